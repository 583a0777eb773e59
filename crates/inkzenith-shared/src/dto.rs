//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to sign in to the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing the admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub expires_at: DateTime<Utc>,
}

/// The admin behind the presented session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
}

/// A freshly mounted view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResponse {
    pub view_id: String,
    pub theme: String,
}

/// One post as rendered by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub display_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Raw markup, rendered verbatim.
    pub content: String,
    pub reader_path: String,
    pub edit_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of the public post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub posts: Vec<PostResponse>,
    pub page: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

/// Open delete confirmation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub post_id: String,
    pub title: String,
    pub message: String,
}

/// Admin dashboard state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub posts: Vec<PostResponse>,
    pub page: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub searching: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_prompt: Option<PromptResponse>,
}

/// Request to search every post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Editor form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Editor state after an interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorResponse {
    /// `create` or `edit`.
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub loaded: bool,
    pub draft: DraftRequest,
    /// Where the front end should navigate next, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
}

/// Single post lookup result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostViewResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostResponse>,
}

/// A visible toast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastResponse {
    pub id: u64,
    pub kind: String,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

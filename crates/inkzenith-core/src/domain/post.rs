use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Title shown for posts saved without one.
pub const UNTITLED: &str = "Untitled";

/// Opaque post identifier assigned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Post entity - a stored blog article.
///
/// `content` is raw markup and is rendered verbatim by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub image_url: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Title to display, falling back to "Untitled".
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Reader link for this post: `/blog/<percent-encoded title>`.
    pub fn reader_path(&self) -> String {
        let title = if self.title.is_empty() {
            "untitled"
        } else {
            self.title.as_str()
        };
        format!("/blog/{}", urlencoding::encode(title))
    }

    /// Admin edit link for this post.
    pub fn edit_path(&self) -> String {
        format!("/admin/edit/{}", self.id)
    }

    /// Ordering used by every listing: newest first, id descending on ties.
    pub fn listing_order(a: &Post, b: &Post) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}

/// Editable fields of a post, as held by the editor form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: None,
            content: content.into(),
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Content is the only required field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("Content is required.".to_string()));
        }
        Ok(())
    }

    /// Blank image URLs are stored as absent.
    pub fn normalized(mut self) -> Self {
        if self
            .image_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            self.image_url = None;
        }
        self
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            image_url: post.image_url.clone(),
            content: post.content.clone(),
        }
    }
}

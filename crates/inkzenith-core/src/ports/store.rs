use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostDraft, PostId};
use crate::error::StoreError;

/// Cursor onto one row of the listing order.
///
/// Holds only what the store needs to resume an ordered query at that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub id: PostId,
    pub created_at: DateTime<Utc>,
}

impl Boundary {
    pub fn of(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            created_at: post.created_at,
        }
    }

    /// Whether `post` sorts strictly after this boundary in listing order.
    pub fn is_before(&self, post: &Post) -> bool {
        (post.created_at, &post.id) < (self.created_at, &self.id)
    }
}

/// Where an ordered query starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPosition {
    /// Skip the boundary row itself.
    After(Boundary),
    /// Include the boundary row.
    At(Boundary),
}

impl StartPosition {
    /// Whether `post` is on or past this start position.
    pub fn admits(&self, post: &Post) -> bool {
        match self {
            StartPosition::After(b) => b.is_before(post),
            StartPosition::At(b) => b.is_before(post) || post.id == b.id,
        }
    }
}

/// Ordered range query over posts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub start: Option<StartPosition>,
    pub limit: Option<usize>,
}

impl PostQuery {
    /// The whole collection in listing order.
    pub fn everything() -> Self {
        Self::default()
    }

    pub fn first(limit: usize) -> Self {
        Self {
            start: None,
            limit: Some(limit),
        }
    }

    pub fn after(boundary: Boundary, limit: usize) -> Self {
        Self {
            start: Some(StartPosition::After(boundary)),
            limit: Some(limit),
        }
    }

    pub fn at(boundary: Boundary, limit: usize) -> Self {
        Self {
            start: Some(StartPosition::At(boundary)),
            limit: Some(limit),
        }
    }
}

/// Document store holding the post collection.
///
/// Timestamps are assigned by the store: `insert` stamps `created_at` and
/// `updated_at` with the same instant, `update` stamps only `updated_at`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Run an ordered range query (created_at descending).
    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError>;

    /// All posts whose title equals `title` exactly, in listing order.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, StoreError>;

    /// Point read by identifier.
    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError>;

    /// Insert a new post and return it with its assigned id and timestamps.
    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError>;

    /// Overwrite the editable fields of an existing post.
    async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, StoreError>;

    /// Delete a post by identifier.
    async fn delete(&self, id: &PostId) -> Result<(), StoreError>;
}

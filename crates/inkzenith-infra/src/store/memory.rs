//! In-memory document store - used when no database is configured and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use inkzenith_core::domain::{Post, PostDraft, PostId};
use inkzenith_core::error::StoreError;
use inkzenith_core::ports::{PostQuery, PostStore};

#[derive(Default)]
struct Collection {
    posts: HashMap<PostId, Post>,
    last_stamp: Option<DateTime<Utc>>,
}

impl Collection {
    /// Server clock: never repeats and never goes backwards, so insertion
    /// order and `created_at` order agree and every write moves `updated_at`.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + TimeDelta::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn ordered(&self) -> Vec<&Post> {
        let mut rows: Vec<&Post> = self.posts.values().collect();
        rows.sort_by(|a, b| Post::listing_order(a, b));
        rows
    }
}

/// In-memory post collection guarded by an async RwLock.
///
/// Data is lost on process restart.
pub struct InMemoryPostStore {
    collection: RwLock<Collection>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            collection: RwLock::new(Collection::default()),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.collection.read().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        let collection = self.collection.read().await;
        let limit = query.limit.unwrap_or(usize::MAX);

        Ok(collection
            .ordered()
            .into_iter()
            .filter(|post| query.start.as_ref().is_none_or(|start| start.admits(post)))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, StoreError> {
        let collection = self.collection.read().await;
        Ok(collection
            .ordered()
            .into_iter()
            .filter(|post| post.title == title)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError> {
        Ok(self.collection.read().await.posts.get(id).cloned())
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let mut collection = self.collection.write().await;
        let now = collection.stamp();
        let post = Post {
            id: PostId::new(Uuid::new_v4().simple().to_string()),
            title: draft.title,
            image_url: draft.image_url,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };
        collection.posts.insert(post.id.clone(), post.clone());
        tracing::debug!(post_id = %post.id, "Post inserted");
        Ok(post)
    }

    async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, StoreError> {
        let mut collection = self.collection.write().await;
        let now = collection.stamp();
        let post = collection.posts.get_mut(id).ok_or(StoreError::NotFound)?;
        post.title = draft.title;
        post.image_url = draft.image_url;
        post.content = draft.content;
        post.updated_at = now;
        tracing::debug!(post_id = %id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<(), StoreError> {
        let mut collection = self.collection.write().await;
        collection.posts.remove(id).ok_or(StoreError::NotFound)?;
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(())
    }
}

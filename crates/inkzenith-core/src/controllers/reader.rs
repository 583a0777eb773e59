//! Single post view, addressed by URL-encoded title.
//!
//! Titles are not unique. When several posts share a title the newest one is
//! shown, matching the store's listing order.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::Post;
use crate::ports::{Notifier, PostStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "post", rename_all = "snake_case")]
pub enum PostViewState {
    Loading,
    Found(Post),
    NotFound,
}

pub struct PostView {
    store: Arc<dyn PostStore>,
    notifier: Arc<dyn Notifier>,
    state: PostViewState,
}

impl PostView {
    pub fn new(store: Arc<dyn PostStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            state: PostViewState::Loading,
        }
    }

    /// Look up the post whose title matches the decoded route segment.
    pub async fn load(&mut self, encoded_title: &str) -> &PostViewState {
        let title = match urlencoding::decode(encoded_title) {
            Ok(title) => title.into_owned(),
            Err(e) => {
                tracing::debug!(error = %e, "Title is not valid percent-encoding, using it raw");
                encoded_title.to_string()
            }
        };

        self.state = match self.store.find_by_title(&title).await {
            Ok(matches) => match matches.into_iter().next() {
                Some(post) => PostViewState::Found(post),
                None => {
                    tracing::debug!(title = %title, "No such blog post");
                    PostViewState::NotFound
                }
            },
            Err(e) => {
                tracing::error!(error = %e, title = %title, "Error fetching blog post");
                self.notifier.error("Failed to load blog post.");
                PostViewState::NotFound
            }
        };
        &self.state
    }

    pub fn state(&self) -> &PostViewState {
        &self.state
    }
}

//! Create/edit form for a single post.

use std::sync::Arc;

use crate::domain::{PostDraft, PostId};
use crate::error::DomainError;
use crate::ports::{Notifier, PostStore};

/// Which record the editor writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(PostId),
}

/// Where the view should go after an editor interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    ToDashboard,
}

pub struct Editor {
    store: Arc<dyn PostStore>,
    notifier: Arc<dyn Notifier>,
    mode: EditorMode,
    form: PostDraft,
    loaded: bool,
}

impl Editor {
    /// Editor for the route: edit mode when an id is given, create mode otherwise.
    pub fn for_route(
        store: Arc<dyn PostStore>,
        notifier: Arc<dyn Notifier>,
        id: Option<PostId>,
    ) -> Self {
        let mode = match id {
            Some(id) => EditorMode::Edit(id),
            None => EditorMode::Create,
        };
        Self {
            store,
            notifier,
            loaded: mode == EditorMode::Create,
            mode,
            form: PostDraft::default(),
        }
    }

    /// Load the record in edit mode. A missing record sends the view back to
    /// the dashboard; a failed read keeps the editor open.
    pub async fn mount(&mut self) -> Transition {
        let EditorMode::Edit(id) = &self.mode else {
            return Transition::Stay;
        };

        match self.store.get(id).await {
            Ok(Some(post)) => {
                self.form = PostDraft::from(&post);
                self.loaded = true;
                Transition::Stay
            }
            Ok(None) => {
                tracing::warn!(post_id = %id, "Blog post not found for editing");
                self.notifier.error("Blog not found!");
                Transition::ToDashboard
            }
            Err(e) => {
                tracing::error!(error = %e, post_id = %id, "Error fetching blog post");
                self.notifier.error("Failed to fetch blog details.");
                Transition::Stay
            }
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    /// Whether the form holds the record's current fields (always true in create mode).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn form(&self) -> &PostDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PostDraft {
        &mut self.form
    }

    pub fn set_form(&mut self, draft: PostDraft) {
        self.form = draft;
    }

    /// Validate and save the form.
    pub async fn submit(&mut self) -> Transition {
        if !self.loaded {
            tracing::warn!("Submit ignored: blog post was never loaded");
            self.notifier.error("Blog post is not loaded yet.");
            return Transition::Stay;
        }
        if let Err(e) = self.form.validate() {
            let message = match e {
                DomainError::Validation(msg) => msg,
                other => other.to_string(),
            };
            self.notifier.error(&message);
            return Transition::Stay;
        }

        let draft = self.form.clone().normalized();
        let saved = match &self.mode {
            EditorMode::Create => self.store.insert(draft).await.map(|post| {
                tracing::info!(post_id = %post.id, "Blog post created");
                "New blog post created!"
            }),
            EditorMode::Edit(id) => self.store.update(id, draft).await.map(|post| {
                tracing::info!(post_id = %post.id, "Blog post updated");
                "Blog post updated successfully!"
            }),
        };

        match saved {
            Ok(message) => {
                self.notifier.success(message);
                Transition::ToDashboard
            }
            Err(e) => {
                tracing::error!(error = %e, "Error saving blog post");
                self.notifier.error(&format!("Failed to save blog post: {e}"));
                Transition::Stay
            }
        }
    }
}

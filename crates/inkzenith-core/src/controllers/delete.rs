use serde::Serialize;

use crate::domain::PostId;

/// Text of the delete confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
}

const DELETE_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Delete Blog Post",
    message: "Are you sure you want to delete this blog post? This action cannot be undone.",
};

/// Two-phase delete: a target is selected first and only deleted on confirm.
#[derive(Debug, Default)]
pub struct DeleteFlow {
    pending: Option<PostId>,
}

impl DeleteFlow {
    /// Mark `id` as pending and open the prompt.
    pub fn select(&mut self, id: PostId) {
        self.pending = Some(id);
    }

    /// Close the prompt without deleting anything.
    pub fn cancel(&mut self) -> Option<PostId> {
        self.pending.take()
    }

    /// Take the pending target for deletion, closing the prompt.
    pub fn take_confirmed(&mut self) -> Option<PostId> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&PostId> {
        self.pending.as_ref()
    }

    /// The prompt to show, if one is open.
    pub fn prompt(&self) -> Option<ConfirmPrompt> {
        self.pending.as_ref().map(|_| DELETE_PROMPT)
    }
}

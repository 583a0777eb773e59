//! View controllers.
//!
//! Each controller owns the state behind one screen and talks to the outside
//! world only through the ports it was constructed with. Store and identity
//! failures are recovered inside the controller: they are logged, raised as
//! an error toast, and reported to the caller as [`Step::Failed`].

mod dashboard;
mod delete;
mod editor;
mod login;
mod pagination;
mod reader;
mod search;

pub use dashboard::Dashboard;
pub use delete::{ConfirmPrompt, DeleteFlow};
pub use editor::{Editor, EditorMode, Transition};
pub use login::LoginForm;
pub use pagination::{Paginator, split_page};
pub use reader::{PostView, PostViewState};
pub use search::{SearchResults, matches_query};

/// Result of a user interaction on a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The interaction ran and the view state changed.
    Applied,
    /// The interaction was not applicable; nothing was fetched or changed.
    Skipped,
    /// The store or identity call failed; view state is as it was before.
    Failed,
}

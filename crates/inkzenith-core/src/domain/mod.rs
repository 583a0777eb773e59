//! Domain entities - the core business objects.

mod account;
mod post;

pub use account::{AdminAccount, AdminSession};
pub use post::{Post, PostDraft, PostId, UNTITLED};

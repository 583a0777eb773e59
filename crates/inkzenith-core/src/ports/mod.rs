//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod notify;
mod store;

pub use auth::{AuthError, IdentityService, PasswordService, TokenClaims, TokenService};
pub use notify::Notifier;
pub use store::{Boundary, PostQuery, PostStore, StartPosition};

//! Authentication implementations.

mod identity;
pub mod jwt;
mod password;

pub use identity::{ADMIN_ROLE, LocalIdentityService};
pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;

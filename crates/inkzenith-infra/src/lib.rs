//! # Inkzenith Infrastructure
//!
//! Concrete implementations of the ports defined in `inkzenith-core`:
//! document stores and the identity service.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL document store via SeaORM
//! - `auth` - JWT + Argon2 identity service

pub mod database;
pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::DatabaseConfig;
pub use store::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService, LocalIdentityService};

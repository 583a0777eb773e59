//! # Inkzenith Shared
//!
//! Wire types exchanged between the blog server and its browser front end.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

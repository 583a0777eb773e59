//! # Inkzenith Core
//!
//! The domain layer of the Inkzenith blog.
//! This crate holds the post model, the ports the blog talks to (document
//! store, identity service, notifications) and the view controllers that
//! drive the reading and admin surfaces. It has no infrastructure dependencies.

pub mod config;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod notify;
pub mod ports;

pub use config::{Theme, UiConfig};
pub use error::{DomainError, StoreError};
pub use notify::{Toast, ToastCenter, ToastKind};

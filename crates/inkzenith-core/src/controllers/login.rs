use std::sync::Arc;

use crate::domain::AdminSession;
use crate::ports::{IdentityService, Notifier};

/// Admin sign-in form.
pub struct LoginForm {
    identity: Arc<dyn IdentityService>,
    notifier: Arc<dyn Notifier>,
}

impl LoginForm {
    pub fn new(identity: Arc<dyn IdentityService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { identity, notifier }
    }

    /// Sign in. Failures are reported as a toast and yield `None`.
    pub async fn submit(&self, email: &str, password: &str) -> Option<AdminSession> {
        match self.identity.sign_in(email.trim(), password).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user_id, "Admin signed in");
                self.notifier.success("Welcome back!");
                Some(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login error");
                self.notifier
                    .error("Failed to login. Please check your credentials.");
                None
            }
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin account - the identity allowed onto the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

impl AdminAccount {
    /// Create an account with a generated ID.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
        }
    }
}

/// A signed-in admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

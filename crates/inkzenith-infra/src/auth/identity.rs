//! Local identity service: admin accounts checked with Argon2, sessions
//! issued as JWTs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};

use inkzenith_core::domain::{AdminAccount, AdminSession};
use inkzenith_core::ports::{AuthError, IdentityService, PasswordService, TokenClaims, TokenService};

/// Role carried by every admin session token.
pub const ADMIN_ROLE: &str = "admin";

pub struct LocalIdentityService {
    accounts: HashMap<String, AdminAccount>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl LocalIdentityService {
    pub fn new(passwords: Arc<dyn PasswordService>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            accounts: HashMap::new(),
            passwords,
            tokens,
        }
    }

    /// Register an account. Emails are matched case-insensitively.
    pub fn with_account(mut self, account: AdminAccount) -> Self {
        self.accounts
            .insert(account.email.to_lowercase(), account);
        self
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait]
impl IdentityService for LocalIdentityService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession, AuthError> {
        let account = self
            .accounts
            .get(&email.to_lowercase())
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.passwords.verify(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.tokens.generate_token(
            account.id,
            &account.email,
            vec![ADMIN_ROLE.to_string()],
        )?;

        Ok(AdminSession {
            user_id: account.id,
            email: account.email.clone(),
            access_token,
            expires_at: Utc::now() + TimeDelta::seconds(self.tokens.expiration_seconds()),
        })
    }

    fn verify_session(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let claims = self.tokens.validate_token(token)?;
        if !claims.roles.iter().any(|r| r == ADMIN_ROLE) {
            return Err(AuthError::InsufficientPermissions);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::JwtConfig;
    use crate::auth::{Argon2PasswordService, JwtTokenService};

    fn identity() -> LocalIdentityService {
        let passwords = Arc::new(Argon2PasswordService::new());
        let hash = passwords.hash("s3cret-pass").unwrap();
        let tokens = Arc::new(JwtTokenService::new(JwtConfig::default()));

        LocalIdentityService::new(passwords, tokens)
            .with_account(AdminAccount::new("Admin@Inkzenith.dev".to_string(), hash))
    }

    #[tokio::test]
    async fn test_sign_in_issues_verifiable_session() {
        let identity = identity();

        let session = identity
            .sign_in("admin@inkzenith.dev", "s3cret-pass")
            .await
            .unwrap();
        let claims = identity.verify_session(&session.access_token).unwrap();

        assert_eq!(claims.user_id, session.user_id);
        assert_eq!(claims.email, "Admin@Inkzenith.dev");
        assert!(session.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn test_wrong_password_or_unknown_email() {
        let identity = identity();

        assert!(matches!(
            identity.sign_in("admin@inkzenith.dev", "nope").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            identity.sign_in("someone@else.dev", "s3cret-pass").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_non_admin_token_is_refused() {
        let tokens = Arc::new(JwtTokenService::new(JwtConfig::default()));
        let identity = LocalIdentityService::new(Arc::new(Argon2PasswordService::new()), tokens.clone());

        let token = tokens
            .generate_token(uuid::Uuid::new_v4(), "reader@inkzenith.dev", vec!["reader".to_string()])
            .unwrap();

        assert!(matches!(
            identity.verify_session(&token),
            Err(AuthError::InsufficientPermissions)
        ));
    }
}

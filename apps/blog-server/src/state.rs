//! Application state - shared across all handlers.

use std::sync::Arc;

use inkzenith_core::domain::AdminAccount;
use inkzenith_core::ports::{IdentityService, PostStore};
use inkzenith_core::UiConfig;
use inkzenith_infra::{Argon2PasswordService, InMemoryPostStore, JwtTokenService, LocalIdentityService};

use crate::config::AppConfig;
use crate::views::ViewRegistry;

#[cfg(feature = "postgres")]
use inkzenith_infra::PostgresPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub identity: Arc<dyn IdentityService>,
    pub ui: UiConfig,
    pub views: Arc<ViewRegistry>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let store = Self::build_store(config).await;

        let mut identity = LocalIdentityService::new(
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(config.jwt.clone())),
        );
        match &config.admin {
            Some(admin) => {
                identity = identity.with_account(AdminAccount::new(
                    admin.email.clone(),
                    admin.password_hash.clone(),
                ));
                tracing::info!(email = %admin.email, "Admin account configured");
            }
            None => tracing::warn!(
                "ADMIN_EMAIL / ADMIN_PASSWORD_HASH not set. Admin sign-in is disabled."
            ),
        }

        tracing::info!("Application state initialized");

        Self {
            views: Arc::new(ViewRegistry::new(config.view_idle_ttl)),
            ..Self::from_parts(store, Arc::new(identity), config.ui.clone())
        }
    }

    pub fn from_parts(
        store: Arc<dyn PostStore>,
        identity: Arc<dyn IdentityService>,
        ui: UiConfig,
    ) -> Self {
        Self {
            store,
            identity,
            ui,
            views: Arc::new(ViewRegistry::default()),
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_store(config: &AppConfig) -> Arc<dyn PostStore> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostStore::new());
        };

        match inkzenith_infra::database::connect(db_config).await {
            Ok(conn) => Arc::new(PostgresPostStore::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostStore::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_store(_config: &AppConfig) -> Arc<dyn PostStore> {
        tracing::info!("Running without postgres feature - using in-memory post store");
        Arc::new(InMemoryPostStore::new())
    }
}

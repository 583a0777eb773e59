//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use inkzenith_core::UiConfig;
use inkzenith_infra::{DatabaseConfig, JwtConfig};

use crate::views::ViewRegistry;

/// The single admin account allowed onto the admin surface.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub ui: UiConfig,
    pub admin: Option<AdminCredentials>,
    pub jwt: JwtConfig,
    /// Mounted views unused for this long are dropped.
    pub view_idle_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        let ui_defaults = UiConfig::default();
        let ui = UiConfig {
            home_page_size: parse_var("HOME_PAGE_SIZE").unwrap_or(ui_defaults.home_page_size),
            dashboard_page_size: parse_var("DASHBOARD_PAGE_SIZE")
                .unwrap_or(ui_defaults.dashboard_page_size),
            toast_ttl: parse_var("TOAST_TTL_MS")
                .map(Duration::from_millis)
                .unwrap_or(ui_defaults.toast_ttl),
            ..ui_defaults
        }
        .normalized();

        let admin = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD_HASH")) {
            (Ok(email), Ok(password_hash)) => Some(AdminCredentials {
                email,
                password_hash,
            }),
            _ => None,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            ui,
            admin,
            jwt: JwtConfig::from_env(),
            view_idle_ttl: parse_var("VIEW_IDLE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(ViewRegistry::DEFAULT_IDLE_TTL),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}

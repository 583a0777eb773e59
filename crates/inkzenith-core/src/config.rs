//! Read-only view configuration, created once at start-up and handed to
//! every controller that needs it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Colour theme. Only the light theme is active; toggling is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
}

/// View configuration shared by the reading and admin surfaces.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Rows per page on the public post list.
    pub home_page_size: usize,
    /// Rows per page on the admin dashboard.
    pub dashboard_page_size: usize,
    /// How long a toast stays visible before it dismisses itself.
    pub toast_ttl: Duration,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            home_page_size: 6,
            dashboard_page_size: 10,
            toast_ttl: Duration::from_millis(5000),
            theme: Theme::Light,
        }
    }
}

impl UiConfig {
    /// Clamp page sizes to at least one row.
    pub fn normalized(mut self) -> Self {
        self.home_page_size = self.home_page_size.max(1);
        self.dashboard_page_size = self.dashboard_page_size.max(1);
        self
    }
}

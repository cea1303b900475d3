//! Application state shared across handlers.

use std::sync::Arc;

use crate::clients::Upstreams;
use crate::config::FrontendConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the upstream
/// service clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FrontendConfig,
    upstreams: Upstreams,
}

impl AppState {
    /// Create a new application state, building the upstream clients from
    /// the configured base URLs.
    #[must_use]
    pub fn new(config: FrontendConfig) -> Self {
        let upstreams = Upstreams::new(&config);
        Self {
            inner: Arc::new(AppStateInner { config, upstreams }),
        }
    }

    /// Get a reference to the frontend configuration.
    #[must_use]
    pub fn config(&self) -> &FrontendConfig {
        &self.inner.config
    }

    /// Get a reference to the upstream service clients.
    #[must_use]
    pub fn upstreams(&self) -> &Upstreams {
        &self.inner.upstreams
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use crate::clients::Collaborators;
use crate::config::CheckoutConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the collaborator
/// clients (built once, injected into handlers - no process-global client
/// handles).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CheckoutConfig,
    collaborators: Collaborators,
}

impl AppState {
    /// Create a new application state, building the collaborator clients
    /// from the configured base URLs.
    #[must_use]
    pub fn new(config: CheckoutConfig) -> Self {
        let collaborators = Collaborators::new(&config);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                collaborators,
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &CheckoutConfig {
        &self.inner.config
    }

    /// Get a reference to the collaborator clients.
    #[must_use]
    pub fn collaborators(&self) -> &Collaborators {
        &self.inner.collaborators
    }
}

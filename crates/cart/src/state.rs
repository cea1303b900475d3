//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::CartConfig;
use crate::store::CartStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart store is held behind the
/// [`CartStore`] trait so tests can inject an in-memory backend.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CartConfig,
    store: Arc<dyn CartStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: CartConfig, store: impl CartStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Arc::new(store),
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &CartConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn store(&self) -> &dyn CartStore {
        self.inner.store.as_ref()
    }
}

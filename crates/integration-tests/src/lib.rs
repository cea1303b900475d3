//! End-to-end tests for Copperline.
//!
//! These tests drive running services over the network and are skipped
//! unless explicitly enabled.
//!
//! # Running Tests
//!
//! ```bash
//! # Start Redis, PostgreSQL, and all services, then:
//! COPPERLINE_E2E=1 cargo test -p copperline-integration-tests
//! ```
//!
//! Service locations default to the local ports and can be overridden with
//! `CARTSERVICE`, `PRODUCTSERVICE`, `CHECKOUTSERVICE`, and `FRONTENDSERVICE`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

/// Whether end-to-end tests are enabled for this run.
#[must_use]
pub fn enabled() -> bool {
    std::env::var("COPPERLINE_E2E").is_ok_and(|v| v == "1")
}

/// Connection details for the running services.
pub struct TestContext {
    pub client: Client,
    pub cart_url: String,
    pub catalog_url: String,
    pub checkout_url: String,
    pub frontend_url: String,
}

impl TestContext {
    /// Build a context from the environment, with local defaults.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed.
    #[must_use]
    pub fn from_env() -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build http client");

        Self {
            client,
            cart_url: env_or("CARTSERVICE", "http://localhost:8081"),
            catalog_url: env_or("PRODUCTSERVICE", "http://localhost:8082"),
            checkout_url: env_or("CHECKOUTSERVICE", "http://localhost:8083"),
            frontend_url: env_or("FRONTENDSERVICE", "http://localhost:8080"),
        }
    }

    /// A session id no other test run has used.
    #[must_use]
    pub fn fresh_session(&self) -> String {
        format!("e2e-{}", uuid::Uuid::new_v4())
    }

    /// A SKU no other test run has used.
    #[must_use]
    pub fn fresh_sku(&self) -> String {
        format!("E2E-{}", uuid::Uuid::new_v4().simple())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

//! Checkout service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (collaborator base URLs)
//! - `CARTSERVICE` - Cart service base URL (e.g., `http://localhost:8081`)
//! - `PRODUCTSERVICE` - Catalog service base URL
//! - `PAYMENTSERVICE` - Payment endpoint base URL
//! - `SHIPPINGSERVICE` - Shipping endpoint base URL
//! - `EMAILSERVICE` - Email endpoint base URL
//!
//! ## Optional
//! - `CHECKOUT_HOST` - Bind address (default: 127.0.0.1)
//! - `CHECKOUT_PORT` - Listen port (default: 8083)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout service configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Cart service base URL.
    pub cart_url: String,
    /// Catalog service base URL.
    pub product_url: String,
    /// Payment endpoint base URL.
    pub payment_url: String,
    /// Shipping endpoint base URL.
    pub shipping_url: String,
    /// Email endpoint base URL.
    pub email_url: String,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Sentry DSN for error tracking.
    pub sentry_dsn: Option<String>,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any collaborator URL is missing or does not
    /// parse as an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cart_url = get_service_url("CARTSERVICE")?;
        let product_url = get_service_url("PRODUCTSERVICE")?;
        let payment_url = get_service_url("PAYMENTSERVICE")?;
        let shipping_url = get_service_url("SHIPPINGSERVICE")?;
        let email_url = get_service_url("EMAILSERVICE")?;

        let host = get_env_or_default("CHECKOUT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHECKOUT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CHECKOUT_PORT", "8083")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHECKOUT_PORT".to_string(), e.to_string()))?;
        let sentry_dsn = std::env::var("SENTRY_DSN").ok();

        Ok(Self {
            cart_url,
            product_url,
            payment_url,
            shipping_url,
            email_url,
            host,
            port,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required collaborator base URL, validated and normalized without a
/// trailing slash.
pub fn get_service_url(key: &str) -> Result<String, ConfigError> {
    let value = std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))?;
    url::Url::parse(&value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(value.trim_end_matches('/').to_string())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

//! Stub service configuration loaded from environment variables.
//!
//! # Environment Variables (all optional)
//!
//! - `STUBS_HOST` - Bind address (default: 127.0.0.1)
//! - `STUBS_PORT` - Listen port (default: 8090)
//! - `STUBS_DELAY_MS` - Simulated processing delay per call (default: 0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Stub service configuration.
#[derive(Debug, Clone)]
pub struct StubsConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Simulated processing delay per call.
    pub delay: Duration,
}

impl StubsConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STUBS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STUBS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STUBS_PORT", "8090")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STUBS_PORT".to_string(), e.to_string()))?;
        let delay_ms = get_env_or_default("STUBS_DELAY_MS", "0")
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar("STUBS_DELAY_MS".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            delay: Duration::from_millis(delay_ms),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

//! Database pool and migrations for the catalog `PostgreSQL`.
//!
//! ## Tables
//!
//! - `product` - the catalog (SKU unique, price in smallest currency unit)
//!
//! # Migrations
//!
//! Migrations live in `crates/catalog/migrations/` and are NOT run on
//! service startup. Run them explicitly via:
//! ```bash
//! cargo run -p copperline-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Embedded catalog migrations, exposed for the CLI.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

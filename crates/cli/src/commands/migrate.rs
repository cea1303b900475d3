//! Run catalog database migrations.
//!
//! Services never migrate on startup; this command is the one place schema
//! changes are applied.

use tracing::info;

use copperline_catalog::config::get_database_url;
use copperline_catalog::db;

/// Run the catalog migrations against `CATALOG_DATABASE_URL`.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration fails to apply.
pub async fn catalog() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = get_database_url("CATALOG_DATABASE_URL")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to catalog database");

    db::MIGRATOR.run(&pool).await?;
    info!("Catalog migrations applied");

    Ok(())
}

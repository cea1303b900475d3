//! Copperline CLI - Database migrations and catalog seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run catalog database migrations
//! copperline-cli migrate
//!
//! # Seed the catalog with the demo product set
//! copperline-cli seed
//!
//! # Seed a catalog running elsewhere
//! copperline-cli seed --url http://catalog.internal:8082
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run catalog database migrations (`CATALOG_DATABASE_URL`)
//! - `seed` - POST the demo products to the catalog service
//!   (`PRODUCTSERVICE`, default `http://localhost:8082`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "copperline-cli")]
#[command(author, version, about = "Copperline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run catalog database migrations
    Migrate,
    /// Seed the catalog with the demo product set
    Seed {
        /// Catalog service base URL (defaults to $PRODUCTSERVICE, then
        /// http://localhost:8082)
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::catalog().await?,
        Commands::Seed { url } => commands::seed::catalog(url).await?,
    }
    Ok(())
}

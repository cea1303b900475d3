//! Copperline Stubs - Stand-in collaborator endpoints.
//!
//! This binary emulates the external payment, shipping, and email providers
//! on port 8090 so the checkout orchestrator can run end-to-end on a
//! developer machine. Each endpoint answers with a freshly minted opaque
//! identifier after an optional simulated processing delay.
//!
//! Not part of the production deployment.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

mod config;
mod routes;

use config::StubsConfig;

#[tokio::main]
async fn main() {
    let config = StubsConfig::from_env().expect("Failed to load configuration");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "copperline_stubs=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(config.clone());

    let addr = config.socket_addr();
    tracing::info!("collaborator stubs listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "OK"
}

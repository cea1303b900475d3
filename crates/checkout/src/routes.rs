//! Checkout route handler.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::instrument;
use validator::Validate;

use copperline_core::CheckoutReceipt;

use crate::error::AppError;
use crate::orchestrator::{self, CheckoutRequest};
use crate::state::AppState;

/// Create the checkout routes router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout))
}

/// Run a checkout.
///
/// The payload is validated before any collaborator is called; an invalid
/// request costs nothing downstream.
#[instrument(skip(state, payload))]
async fn checkout(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutReceipt>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = orchestrator::run(state.collaborators(), &request).await?;
    Ok(Json(receipt))
}

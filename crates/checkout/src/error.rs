//! Error handling for the checkout service.
//!
//! Validation failures answer with `{"error": message}` and 400. A failed
//! checkout answers with 502 and a body that also reports how far the
//! sequence got:
//!
//! ```json
//! {
//!   "error": "shipment failed: ...",
//!   "completed": ["cart_fetched", "priced", "charged"],
//!   "transactionid": "..."
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::orchestrator::{CheckoutFailure, CheckoutStage};

/// Application-level error type for the checkout service.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body was missing or malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request payload failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The checkout sequence failed at a collaborator.
    #[error("{0}")]
    Checkout(#[from] CheckoutFailure),
}

/// Body of a failed-checkout response.
#[derive(Serialize)]
struct FailureBody<'a> {
    error: String,
    completed: &'a [CheckoutStage],
    #[serde(skip_serializing_if = "Option::is_none")]
    transactionid: Option<&'a str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture collaborator failures to Sentry
        if matches!(self, Self::Checkout(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Checkout failed"
            );
        }

        match &self {
            Self::BadRequest(message) | Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::Checkout(failure) => (
                StatusCode::BAD_GATEWAY,
                Json(FailureBody {
                    error: failure.kind.to_string(),
                    completed: &failure.completed,
                    transactionid: failure.transaction_id.as_deref(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::clients::CollaboratorError;
    use crate::orchestrator::FailureKind;

    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("creditcard is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_checkout_failure_is_bad_gateway() {
        let failure = CheckoutFailure {
            completed: vec![
                CheckoutStage::CartFetched,
                CheckoutStage::Priced,
                CheckoutStage::Charged,
            ],
            transaction_id: Some("tx-1".to_string()),
            kind: FailureKind::Shipping(CollaboratorError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "out of trucks".to_string(),
            }),
        };

        let response = AppError::Checkout(failure).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_failure_body_shape() {
        let body = FailureBody {
            error: "payment failed: declined".to_string(),
            completed: &[CheckoutStage::CartFetched, CheckoutStage::Priced],
            transactionid: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "error": "payment failed: declined",
                "completed": ["cart_fetched", "priced"],
            })
        );
    }
}

//! Error handling for the cart service.
//!
//! All error responses carry a JSON body of the shape `{"error": message}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the cart service.
#[derive(Debug, Error)]
pub enum AppError {
    /// The cart store rejected or failed an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The request body was missing or malformed.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, message) = match &self {
            Self::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("missing items".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_status() {
        let response =
            AppError::Store(StoreError::Corrupt("qty is not an integer".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

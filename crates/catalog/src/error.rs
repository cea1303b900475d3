//! Error handling for the catalog service.
//!
//! All error responses carry a JSON body of the shape `{"error": message}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the catalog service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request payload failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request body was missing or malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No product with the requested SKU.
    #[error("not found")]
    NotFound,

    /// A product with the same SKU already exists.
    #[error("a product with this SKU already exists")]
    DuplicateSku,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DuplicateSku => StatusCode::CONFLICT,
        };

        // Don't expose database details to clients
        let message = match &self {
            Self::Database(_) => "internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(get_status(AppError::DuplicateSku), StatusCode::CONFLICT);
        assert_eq!(
            get_status(AppError::Validation("sku is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Database(sqlx::Error::PoolClosed)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound.to_string(), "not found");
    }
}

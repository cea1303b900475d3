//! Error handling for the frontend.
//!
//! The frontend is a browser surface, so errors render as an HTML page
//! carrying the originating status code and message - for an upstream
//! failure, the status and message of the service that failed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::clients::UpstreamError;
use crate::filters;

/// Application-level error type for the frontend.
#[derive(Debug, Error)]
pub enum AppError {
    /// An upstream service answered with a non-success status.
    #[error("upstream error: {message}")]
    Upstream {
        status: StatusCode,
        message: String,
    },

    /// An upstream service could not be reached at all.
    #[error("upstream unreachable: {0}")]
    Unreachable(reqwest::Error),

    /// The shopper session could not be read or written.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, message } => Self::Upstream {
                // reqwest and axum share the http crate's status type
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            },
            UpstreamError::Http(e) => Self::Unreachable(e),
        }
    }
}

/// Error page template.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status_code: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Upstream { status, .. } => *status,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let message = match &self {
            Self::Upstream { message, .. } => message.clone(),
            Self::Unreachable(_) => "a backing service could not be reached".to_string(),
            Self::Session(_) => "session error, please retry".to_string(),
        };

        let page = ErrorTemplate {
            status_code: status.as_u16(),
            message,
        };

        (status, page).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_passes_through() {
        let err = AppError::from(UpstreamError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            message: "not found".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_conflict_passes_through() {
        let err = AppError::from(UpstreamError::Status {
            status: reqwest::StatusCode::CONFLICT,
            message: "a product with this SKU already exists".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }
}

//! Error handling middleware mapping [`AppError`] to HTTP responses
//!
//! Every pipeline failure is converted here; nothing escapes to the
//! transport layer unformatted. The mapping follows the taxonomy:
//! configuration problems and unknown failures are 500, caller-fixable
//! problems (bad inbound JSON, unusable model output) are 400, and an
//! unreachable or rejecting upstream is 503.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sf_types::AppError;

use crate::types::ErrorResponse;

/// Application error that can be converted to an HTTP response.
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ErrorResponse,
}

impl ApiErrorResponse {
    pub fn new(
        status: StatusCode,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: ErrorResponse::new(error_type, message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request_error", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "api_error", message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.error = self.error.with_details(details);
        self
    }

    /// Convert an [`AppError`], gating unknown-failure detail on the debug
    /// flag so internals do not leak in production.
    pub fn from_app_error(err: AppError, debug: bool) -> Self {
        match err {
            AppError::Config(msg) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                msg,
            ),
            AppError::InvalidRequest(msg) => {
                Self::bad_request("Invalid JSON format in request").with_details(msg)
            }
            AppError::Transport(msg) => {
                Self::service_unavailable("Failed to communicate with the AI service")
                    .with_details(msg)
            }
            AppError::UpstreamStatus { status, body } => {
                Self::service_unavailable("Failed to communicate with the AI service")
                    .with_details(format!("API error ({}): {}", status, body))
            }
            AppError::Envelope(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            AppError::ModelOutput(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            AppError::Internal(_) | AppError::Io(_) | AppError::Serialization(_) => {
                let response = Self::internal_error("An unexpected error occurred");
                if debug {
                    response.with_details(err.to_string())
                } else {
                    response
                }
            }
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AppError> for ApiErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from_app_error(err, false)
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiErrorResponse>;

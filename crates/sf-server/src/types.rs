//! API response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    description = "Error response",
    example = json!({
        "error": {
            "message": "Failed to communicate with the AI service",
            "type": "api_error",
            "details": "connection refused"
        }
    })
)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    #[schema(example = "Invalid JSON format in request")]
    pub message: String,

    #[serde(rename = "type")]
    #[schema(example = "invalid_request_error")]
    pub error_type: String,

    /// Underlying cause, when safe to expose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiError {
                message: message.into(),
                error_type: error_type.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.error.details = Some(details.into());
        self
    }
}

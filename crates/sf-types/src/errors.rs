//! Error types and conversions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure reaching the completion API: connection
    /// refused, DNS failure, or the 30-second request timeout.
    #[error("Upstream transport error: {0}")]
    Transport(String),

    /// The completion API was reachable but rejected the request with a
    /// non-2xx status. Kept separate from [`AppError::Transport`] so callers
    /// can tell "service rejected" from "service unreachable".
    #[error("Upstream API error ({status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The completion response envelope did not have the documented
    /// `{choices: [{message: {content}}]}` shape.
    #[error("Invalid completion envelope: {0}")]
    Envelope(String),

    /// The envelope was well-formed but the model's inner content was not a
    /// usable non-empty JSON object of generated files.
    #[error("Unusable model output: {0}")]
    ModelOutput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}

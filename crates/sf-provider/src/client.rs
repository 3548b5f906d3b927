//! Groq chat-completion client
//!
//! One POST per request, bounded by [`REQUEST_TIMEOUT`]. Transport-level
//! failures and non-2xx statuses are surfaced as distinct error variants so
//! the route layer can map "unreachable" and "rejected" differently.

use std::time::Duration;

use reqwest::Client;
use sf_prompt::ChatPayload;
use sf_types::{AppError, AppResult};
use tracing::{debug, warn};

/// Upper bound on a single completion call. No retries are performed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Groq OpenAI-compatible completion endpoint.
pub struct GroqClient {
    api_key: String,
    api_base: String,
    client: Client,
    /// When set, successful response bodies are dumped to
    /// `<base>.<YYYYMMDD_HHMMSS>` best-effort.
    debug_dump_base: Option<String>,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.into(),
            api_base: api_base.into(),
            client,
            debug_dump_base: None,
        })
    }

    /// Enable best-effort dumping of successful response bodies.
    pub fn with_debug_dump(mut self, base: impl Into<String>) -> Self {
        self.debug_dump_base = Some(base.into());
        self
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Perform one completion call and return the raw response body text.
    pub async fn complete(&self, payload: &ChatPayload) -> AppResult<String> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Transport(format!(
                        "Request timed out after {}s: {}",
                        REQUEST_TIMEOUT.as_secs(),
                        e
                    ))
                } else {
                    AppError::Transport(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        self.dump_debug_response(&body);

        Ok(body)
    }

    /// Write the response body to a timestamped dump file. A failed write is
    /// logged and swallowed; this is a diagnostic side channel and must not
    /// fail the request.
    fn dump_debug_response(&self, body: &str) {
        let Some(base) = &self.debug_dump_base else {
            return;
        };

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = format!("{}.{}", base, timestamp);
        match std::fs::write(&path, body) {
            Ok(()) => debug!("Debug response logged to {}", path),
            Err(e) => warn!("Failed to write debug dump {}: {}", path, e),
        }
    }
}

//! Configuration validation

use sf_types::{AppError, AppResult};

use crate::AppConfig;

/// Validate a configuration before the server starts.
///
/// The API key is deliberately not required here; its absence is surfaced
/// per request so the server still boots and reports the problem.
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    if config.api_base.trim().is_empty() {
        return Err(AppError::Config("API base URL must not be empty".into()));
    }
    if !config.api_base.starts_with("http://") && !config.api_base.starts_with("https://") {
        return Err(AppError::Config(format!(
            "API base URL must be http(s), got '{}'",
            config.api_base
        )));
    }
    if config.model.trim().is_empty() {
        return Err(AppError::Config("model identifier must not be empty".into()));
    }
    if config.debug_dump_base.trim().is_empty() {
        return Err(AppError::Config(
            "debug dump base name must not be empty".into(),
        ));
    }

    Ok(())
}

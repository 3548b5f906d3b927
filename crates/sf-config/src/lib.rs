//! Configuration management module
//!
//! Builds an immutable [`AppConfig`] from the process environment exactly
//! once at startup. Components receive it by reference (wrapped in an `Arc`
//! by the server state); nothing reads the environment after boot.

mod validation;

pub use validation::validate_config;

use tracing::warn;

/// Environment variable holding the upstream completion API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable toggling debug mode ("true" or "1").
pub const DEBUG_VAR: &str = "SKETCHFORGE_DEBUG";

/// Base URL of the chat-completion API.
pub const API_BASE: &str = "https://api.groq.com/openai/v1";

/// Model identifier sent in every completion request.
pub const MODEL_NAME: &str = "mixtral-8x7b-32768";

/// Base name for the timestamped debug response dumps.
pub const DEBUG_DUMP_BASE: &str = "debug_ai_response.json";

/// Immutable process-wide configuration.
///
/// A missing API key does not fail startup; it disables the `/generate`
/// endpoint with a 500 instead (the server should come up and report the
/// problem per request rather than crash-loop).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API key. `None` when the variable is unset or empty.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    /// Gates verbose error detail in responses and the response dump file.
    pub debug: bool,
    pub debug_dump_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: API_BASE.to_string(),
            model: MODEL_NAME.to_string(),
            debug: false,
            debug_dump_base: DEBUG_DUMP_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("{} is not set; /generate will be disabled", API_KEY_VAR);
        }

        let debug = std::env::var(DEBUG_VAR)
            .map(|v| {
                let v = v.trim().to_ascii_lowercase();
                v == "true" || v == "1"
            })
            .unwrap_or(false);

        Self {
            api_key,
            debug,
            ..Self::default()
        }
    }

    /// Masked rendering of the API key for startup logs.
    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            Some(key) => "*".repeat(key.len()),
            None => "Not Configured".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_key_present() {
        std::env::set_var(API_KEY_VAR, "gsk_test123");
        std::env::remove_var(DEBUG_VAR);

        let config = AppConfig::from_env();
        assert_eq!(config.api_key.as_deref(), Some("gsk_test123"));
        assert!(!config.debug);
        assert_eq!(config.api_base, API_BASE);
        assert_eq!(config.model, MODEL_NAME);

        std::env::remove_var(API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key_is_unset() {
        std::env::set_var(API_KEY_VAR, "  ");

        let config = AppConfig::from_env();
        assert!(config.api_key.is_none());

        std::env::remove_var(API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn test_debug_flag_parsing() {
        std::env::remove_var(API_KEY_VAR);
        for (value, expected) in [("true", true), ("TRUE", true), ("1", true), ("False", false), ("no", false)] {
            std::env::set_var(DEBUG_VAR, value);
            assert_eq!(AppConfig::from_env().debug, expected, "value {value:?}");
        }
        std::env::remove_var(DEBUG_VAR);
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = AppConfig::default();
        assert_eq!(config.masked_api_key(), "Not Configured");

        config.api_key = Some("secret".to_string());
        assert_eq!(config.masked_api_key(), "******");
    }
}

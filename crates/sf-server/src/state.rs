//! Shared application state
//!
//! Holds the immutable configuration and the upstream client. Cheap to
//! clone; nothing in here is mutable after startup.

use std::sync::Arc;

use sf_config::AppConfig;
use sf_provider::GroqClient;
use sf_types::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when no API key is configured; `/generate` refuses requests
    /// with a 500 in that case instead of the process failing to start.
    client: Option<Arc<GroqClient>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let client = match &config.api_key {
            Some(key) => {
                let client = GroqClient::new(key.clone(), config.api_base.clone())?;
                let client = if config.debug {
                    client.with_debug_dump(config.debug_dump_base.clone())
                } else {
                    client
                };
                Some(Arc::new(client))
            }
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    pub fn client(&self) -> Option<&Arc<GroqClient>> {
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_client_without_api_key() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(state.client().is_none());
    }

    #[test]
    fn test_client_built_when_key_present() {
        let config = AppConfig {
            api_key: Some("gsk_test".to_string()),
            ..AppConfig::default()
        };
        let state = AppState::new(config).unwrap();
        assert!(state.client().is_some());
    }
}

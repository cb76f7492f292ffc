//! Application state management

use crate::api_client::ApiClient;
use coursekit_core::Config;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_base_url = format!("http://{}:{}", config.server.host, config.server.port);
        let api_client = ApiClient::new(api_base_url);

        Self { config, api_client }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_derives_api_base_from_config() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;

        let state = AppState::new(config);
        assert_eq!(state.api_client.base_url(), "http://127.0.0.1:9000");
    }
}

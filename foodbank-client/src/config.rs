//! Client configuration

use std::time::Duration;

use crate::{ClientResult, NetworkHttpClient};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://localhost:7180/api";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration for connecting to the inventory API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://localhost:7180/api")
    pub base_url: String,

    /// Bearer token sent on every request
    pub token: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

use std::time::Duration;

use foodbank_client::ClientConfig;
use foodbank_client::config::DEFAULT_BASE_URL;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 5000 | listen port |
/// | API_BASE_URL | https://localhost:7180/api | inventory API base URL |
/// | API_TOKEN | - | bearer token sent to the inventory API |
/// | REQUEST_TIMEOUT_MS | 30000 | inventory API timeout (ms) |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOGIN_PATH | /login | where the login gate sends browsers |
/// | SESSION_COOKIE | foodbank_session | session cookie checked by the gate |
/// | DEBUG_RAW_JSON | false | expose `/foodbank/raw` |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | - | daily rolling log files |
///
/// # Example
///
/// ```ignore
/// API_BASE_URL=http://localhost:5180/api HTTP_PORT=8080 cargo run -p foodbank-web
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Inventory API base URL
    pub api_base_url: String,
    pub api_token: Option<String>,
    /// Inventory API timeout (ms)
    pub request_timeout_ms: u64,
    /// development | staging | production
    pub environment: String,
    pub login_path: String,
    pub session_cookie: String,
    pub debug_raw_json: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            api_base_url: var("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_token: var("API_TOKEN"),
            request_timeout_ms: var("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            login_path: var("LOGIN_PATH").unwrap_or_else(|| "/login".into()),
            session_cookie: var("SESSION_COOKIE").unwrap_or_else(|| "foodbank_session".into()),
            debug_raw_json: var("DEBUG_RAW_JSON")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        }
    }

    /// Client configuration for the inventory API
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_base_url.clone())
            .with_timeout(Duration::from_millis(self.request_timeout_ms));
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

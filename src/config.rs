//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Run Duel backend (no trailing slash)
    pub api_base_url: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Timeout for backend requests
    pub upstream_timeout: Duration,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
}

impl Config {
    /// Config for tests. Override `api_base_url` to reach a stub backend.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:9".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            upstream_timeout: Duration::from_secs(5),
            cookie_secure: false,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("RUN_DUEL_API_URL")
            .map_err(|_| ConfigError::Missing("RUN_DUEL_API_URL"))?
            .trim()
            .trim_end_matches('/')
            .to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::Invalid("RUN_DUEL_API_URL", "empty".to_string()));
        }

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", v.clone()))?,
            Err(_) => 8080,
        };

        let timeout_secs: u64 = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("UPSTREAM_TIMEOUT_SECS", v.clone()))?,
            Err(_) => 10,
        };

        let cookie_secure = match env::var("COOKIE_SECURE") {
            Ok(v) => parse_bool(&v).ok_or(ConfigError::Invalid("COOKIE_SECURE", v))?,
            Err(_) => !frontend_url.starts_with("http://"),
        };

        Ok(Self {
            api_base_url,
            frontend_url,
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
            cookie_secure,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

use std::env;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub log_level: String,
    pub color: bool,
    pub json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("LAW_QUERY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            color: env::var("NO_COLOR").map(|v| v.is_empty()).unwrap_or(true),
            json: false,
        }
    }

    /// Only `http` and `https` base URLs are accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason: reason.to_string(),
        };
        let url = reqwest::Url::parse(&self.api_url).map_err(|e| invalid(&e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(&format!("unsupported scheme {other}"))),
        }
    }
}

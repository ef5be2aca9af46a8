//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    #[error("invalid API_TIMEOUT_SECS: {0:?}")]
    InvalidTimeout(String),

    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend the `/api` proxy forwards to, without a trailing slash.
    pub api_base_url: String,
    /// Public origin used for canonical URLs in the sitemap.
    pub site_url: String,
    pub api_timeout: Duration,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://localhost:8080`
    /// - `SITE_URL`: default `http://localhost:3000`
    /// - `API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_timeout_secs = match non_blank(lookup("API_TIMEOUT_SECS")) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            api_base_url: base_url("API_BASE_URL", lookup("API_BASE_URL"), DEFAULT_API_BASE_URL)?,
            site_url: base_url("SITE_URL", lookup("SITE_URL"), DEFAULT_SITE_URL)?,
            api_timeout: Duration::from_secs(api_timeout_secs),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn base_url(var: &'static str, value: Option<String>, default: &str) -> Result<String, ConfigError> {
    let raw = non_blank(value).unwrap_or_else(|| default.to_owned());
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { var, value: raw });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

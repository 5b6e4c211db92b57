//! Client configuration.
//!
//! Settings are read from the process environment, after loading a `.env`
//! file from the working directory if one exists:
//!
//! - `PRODUCT_API_BASE_URL`: service base URL (default `http://localhost:8080`)
//! - `PRODUCT_API_TIMEOUT_SECS`: request timeout in seconds (default 30)
//! - `PRODUCT_API_TOKEN`: fixed bearer token; when unset a placeholder
//!   timestamp token is sent

use std::time::Duration;

use anyhow::{Context, Result};

pub const BASE_URL_VAR: &str = "PRODUCT_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "PRODUCT_API_TIMEOUT_SECS";
pub const TOKEN_VAR: &str = "PRODUCT_API_TOKEN";

/// Base URL used when neither the caller nor the environment provides one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        // Silently ignore a missing .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = Self::resolve_base_url(None, lookup(BASE_URL_VAR).as_deref());

        let timeout = match non_empty(lookup(TIMEOUT_VAR)) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a whole number of seconds, got {:?}", TIMEOUT_VAR, raw))?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            timeout,
            token: non_empty(lookup(TOKEN_VAR)),
        })
    }

    /// Base URL precedence: explicit argument, then environment, then the default.
    /// Empty strings count as absent.
    pub fn resolve_base_url(explicit: Option<&str>, env: Option<&str>) -> String {
        explicit
            .filter(|s| !s.is_empty())
            .or_else(|| env.filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = Self::resolve_base_url(Some(base_url.as_str()), Some(self.base_url.as_str()));
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

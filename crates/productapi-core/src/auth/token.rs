use chrono::{SecondsFormat, Utc};

use crate::api::{ApiError, Result};

/// Source of bearer tokens for outgoing requests.
///
/// Called once per request, so implementations may rotate tokens.
pub trait TokenProvider: Send + Sync {
    /// The token without the `Bearer ` prefix
    fn token(&self) -> Result<String>;
}

/// Placeholder token: the current UTC time, e.g. `2019-01-14T11:34:18.045Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampToken;

impl TokenProvider for TimestampToken {
    fn token(&self) -> Result<String> {
        Ok(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ApiError::InvalidToken("token is empty".to_string()));
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").field("token", &"<redacted>").finish()
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

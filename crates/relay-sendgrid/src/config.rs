//! # SendGrid Configuration

use relay_core::{RelayError, RelayResult};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.sendgrid.com";

/// SendGrid API configuration
#[derive(Clone)]
pub struct SendGridConfig {
    /// API key (SG....)
    pub api_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Outbound request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SendGridConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn validate(&self) -> RelayResult<()> {
        if !self.api_key.starts_with("SG.") {
            return Err(RelayError::Configuration(
                "SendGrid API key must start with SG.".to_string(),
            ));
        }
        Ok(())
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set outbound request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

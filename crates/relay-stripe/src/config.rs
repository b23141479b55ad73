//! # Stripe Configuration
//!
//! Configuration for the Stripe adapter.
//! Values are handed in by the caller; this crate never reads the environment.

use relay_core::{RelayError, RelayResult};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
pub const DEFAULT_CONNECT_BASE_URL: &str = "https://connect.stripe.com";
pub const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... / sk_live_..., or restricted rk_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Connect OAuth base URL (for testing/mocking)
    pub connect_base_url: String,

    /// API version
    pub api_version: String,

    /// Outbound request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("connect_base_url", &self.connect_base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StripeConfig {
    /// Create config with the default Stripe endpoints
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_base_url: DEFAULT_CONNECT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }

    /// Check the key looks like a Stripe secret or restricted key
    pub fn validate(&self) -> RelayResult<()> {
        const PREFIXES: [&str; 4] = ["sk_test_", "sk_live_", "rk_test_", "rk_live_"];

        if self.secret_key.is_empty() {
            return Err(RelayError::Configuration(
                "Stripe secret key is empty".to_string(),
            ));
        }
        if !PREFIXES.iter().any(|p| self.secret_key.starts_with(p)) {
            return Err(RelayError::Configuration(
                "Stripe secret key must start with sk_test_, sk_live_, rk_test_ or rk_live_"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// `"live"` or `"test"` depending on the key, for startup logs
    pub fn mode(&self) -> &'static str {
        if self.secret_key.contains("_live_") {
            "live"
        } else if self.secret_key.contains("_test_") {
            "test"
        } else {
            "unknown"
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set custom Connect base URL (for testing)
    pub fn with_connect_base_url(mut self, url: impl Into<String>) -> Self {
        self.connect_base_url = url.into();
        self
    }

    /// Builder: set outbound request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

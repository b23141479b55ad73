//! # Relay Error Types
//!
//! Typed error handling for relay-rs.
//! All adapter operations return `Result<T, RelayError>`.

use serde_json::{json, Value};
use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inbound request could not be turned into an outbound call
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network/HTTP error communicating with a provider
    #[error("Network error [{provider}]: {message}")]
    Network { provider: String, message: String },

    /// Provider answered with a non-success status
    #[error("Provider error [{provider}]: HTTP {status}")]
    Upstream {
        provider: String,
        status: u16,
        body: Value,
    },

    /// Provider success body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RelayError {
    /// Build an `Upstream` error from a raw response body.
    ///
    /// JSON bodies are kept as-is, anything else is wrapped as a JSON string.
    pub fn upstream(provider: impl Into<String>, status: u16, body: &str) -> Self {
        let body = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        RelayError::Upstream {
            provider: provider.into(),
            status,
            body,
        }
    }

    /// Build a `Network` error for a provider
    pub fn network(provider: impl Into<String>, err: impl std::fmt::Display) -> Self {
        RelayError::Network {
            provider: provider.into(),
            message: err.to_string(),
        }
    }

    /// Short machine-readable kind, used as `error.type` in relayed bodies
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Configuration(_) => "configuration_error",
            RelayError::InvalidRequest(_) => "invalid_request_error",
            RelayError::Network { .. } => "api_connection_error",
            RelayError::Upstream { .. } => "api_error",
            RelayError::Serialization(_) => "serialization_error",
        }
    }

    /// The error object relayed to callers.
    ///
    /// Upstream rejections are passed through verbatim; locally raised
    /// errors use `{"error": {"type": ..., "message": ...}}`.
    pub fn error_body(&self) -> Value {
        match self {
            RelayError::Upstream { body, .. } => body.clone(),
            other => json!({
                "error": {
                    "type": other.kind(),
                    "message": other.to_string(),
                }
            }),
        }
    }

    /// Upstream HTTP status, if the provider answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            RelayError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

//! # Email Sender Trait
//!
//! Adapter trait for transactional email providers and the message model.

use crate::error::RelayResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Mailbox with an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    /// Bare address without a display name
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}

/// A single HTML email to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: EmailAddress,
    pub from: EmailAddress,
    pub reply_to: EmailAddress,
    pub subject: String,
    pub html_content: String,
}

impl EmailMessage {
    /// Build a message; replies always go back to the sender.
    pub fn new(
        to: EmailAddress,
        from: EmailAddress,
        subject: impl Into<String>,
        html_content: impl Into<String>,
    ) -> Self {
        Self {
            reply_to: from.clone(),
            to,
            from,
            subject: subject.into(),
            html_content: html_content.into(),
        }
    }
}

/// Adapter trait for email providers.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Hand one message to the provider. Exactly one outbound call, no retry.
    async fn send(&self, message: &EmailMessage) -> RelayResult<()>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared email sender (dynamic dispatch)
pub type BoxedEmailSender = Arc<dyn EmailSender>;

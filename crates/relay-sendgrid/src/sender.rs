//! # SendGrid Sender
//!
//! `EmailSender` implementation for SendGrid. SendGrid answers `202 Accepted`
//! with an empty body on success.

use crate::config::SendGridConfig;
use crate::mail::MailSendRequest;
use crate::PROVIDER;
use async_trait::async_trait;
use relay_core::{EmailMessage, EmailSender, RelayError, RelayResult};
use reqwest::Client;
use tracing::{error, info, instrument};

pub struct SendGridSender {
    config: SendGridConfig,
    client: Client,
}

impl SendGridSender {
    pub fn new(config: SendGridConfig) -> RelayResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            RelayError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl EmailSender for SendGridSender {
    #[instrument(skip(self, message), fields(to = %message.to.email))]
    async fn send(&self, message: &EmailMessage) -> RelayResult<()> {
        let url = format!("{}/v3/mail/send", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .json(&MailSendRequest::from(message))
            .send()
            .await
            .map_err(|e| RelayError::network(PROVIDER, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| RelayError::network(PROVIDER, e))?;
            error!("SendGrid API error: status={}, body={}", status, body);
            return Err(RelayError::upstream(PROVIDER, status.as_u16(), &body));
        }

        info!("Mail sent successfully");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

//! # Application State
//!
//! Shared state for the Axum application: the two adapters and the origin
//! allow-list. Everything is read-only after startup.

use crate::config::AppConfig;
use relay_core::{AllowedOrigins, BoxedEmailSender, BoxedPaymentGateway, RelayResult};
use relay_sendgrid::SendGridSender;
use relay_stripe::StripeGateway;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider adapter
    pub payments: BoxedPaymentGateway,
    /// Email provider adapter
    pub email: BoxedEmailSender,
    /// Origin allow-list
    pub origins: Arc<AllowedOrigins>,
}

impl AppState {
    /// Assemble state from explicit adapters
    pub fn new(
        payments: BoxedPaymentGateway,
        email: BoxedEmailSender,
        origins: AllowedOrigins,
    ) -> Self {
        Self {
            payments,
            email,
            origins: Arc::new(origins),
        }
    }

    /// Build the Stripe and SendGrid adapters from configuration
    pub fn from_config(config: &AppConfig) -> RelayResult<Self> {
        let stripe = StripeGateway::new(config.stripe.clone())?;
        let sendgrid = SendGridSender::new(config.sendgrid.clone())?;

        Ok(Self::new(
            Arc::new(stripe),
            Arc::new(sendgrid),
            config.allowed_origins.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_sendgrid::SendGridConfig;
    use relay_stripe::StripeConfig;

    fn config(stripe_key: &str) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: AllowedOrigins::parse("https://app.example.com"),
            stripe: StripeConfig::new(stripe_key),
            sendgrid: SendGridConfig::new("SG.abc"),
        }
    }

    #[test]
    fn test_state_from_config() {
        let state = AppState::from_config(&config("sk_test_abc")).unwrap();

        assert_eq!(state.payments.provider_name(), "stripe");
        assert_eq!(state.email.provider_name(), "sendgrid");
        assert_eq!(state.origins.len(), 1);
    }

    #[test]
    fn test_invalid_stripe_key_fails_startup() {
        assert!(AppState::from_config(&config("pk_test_abc")).is_err());
    }
}

//! # relay-stripe
//!
//! Stripe adapter for relay-rs.
//!
//! `StripeGateway` implements `PaymentGateway` with two Stripe APIs:
//!
//! 1. **Connect OAuth** - `POST /oauth/token` on `connect.stripe.com`
//!    - Exchanges an authorization code for the connected account's tokens
//!
//! 2. **Checkout Sessions** - `POST /v1/checkout/sessions` on `api.stripe.com`
//!    - One-time payments with an inline price
//!    - Subscriptions against an existing price
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_core::{CheckoutSessionRequest, PaymentGateway};
//! use relay_stripe::{StripeConfig, StripeGateway};
//!
//! let gateway = StripeGateway::new(StripeConfig::new("sk_test_..."))?;
//!
//! let session = gateway
//!     .create_checkout_session(&CheckoutSessionRequest::subscription(
//!         "price_123",
//!         "https://example.com/success",
//!         "https://example.com/cancel",
//!     ))
//!     .await?;
//!
//! // Redirect the payer to session["url"]
//! ```

pub mod checkout;
pub mod config;
pub mod gateway;
pub mod oauth;

// Re-exports
pub use config::StripeConfig;
pub use gateway::StripeGateway;

/// Provider name used in logs and errors
pub const PROVIDER: &str = "stripe";

//! # relay-core
//!
//! Core types and traits for the relay-rs integration server.
//!
//! This crate provides:
//! - `PaymentGateway` trait for payment-provider adapters
//! - `EmailSender` trait for transactional email adapters
//! - `CheckoutSessionRequest` and `EmailMessage` outbound request models
//! - `AllowedOrigins` for the origin allow-list
//! - `RelayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_core::{CheckoutSessionRequest, PaymentGateway};
//!
//! let request = CheckoutSessionRequest::subscription(
//!     "price_123",
//!     "https://example.com/ok",
//!     "https://example.com/cancel",
//! );
//!
//! // Relay the created session back to the caller
//! let session = gateway.create_checkout_session(&request).await?;
//! ```

pub mod email;
pub mod error;
pub mod origin;
pub mod payment;

// Re-exports for convenience
pub use email::{BoxedEmailSender, EmailAddress, EmailMessage, EmailSender};
pub use error::{RelayError, RelayResult};
pub use origin::AllowedOrigins;
pub use payment::{
    BoxedPaymentGateway, CheckoutMode, CheckoutSessionRequest, LineItem, LineItemPrice,
    PaymentGateway, ProductData,
};

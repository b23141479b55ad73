//! # Payment Gateway Trait
//!
//! Adapter trait for payment providers plus the outbound checkout model.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentGateway (trait)                   │
//! │  ├── exchange_authorization_code()                          │
//! │  ├── create_checkout_session()                              │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                    ┌───────┴───────┐
//!                    │ StripeGateway │
//!                    └───────────────┘
//! ```
//!
//! Provider responses are relayed to the caller untouched, so both
//! operations return raw `serde_json::Value`s.

use crate::error::RelayResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Checkout session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// One-time payment
    Payment,
    /// Recurring subscription
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product shown on an ad-hoc price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// How a line item is priced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemPrice {
    /// Inline price created with the session
    PriceData {
        currency: String,
        /// Amount in the currency's minor unit, as a decimal string
        unit_amount_decimal: String,
        product_data: ProductData,
    },
    /// Existing price object (`price_...`)
    Price(String),
}

/// Single checkout line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub price: LineItemPrice,
    pub quantity: u32,
}

/// A checkout session to be created by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub mode: CheckoutMode,
    pub line_items: Vec<LineItem>,
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutSessionRequest {
    /// One-time payment for a single ad-hoc product, quantity 1
    pub fn one_time(
        currency: impl Into<String>,
        unit_amount_decimal: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            mode: CheckoutMode::Payment,
            line_items: vec![LineItem {
                price: LineItemPrice::PriceData {
                    currency: currency.into(),
                    unit_amount_decimal: unit_amount_decimal.into(),
                    product_data: ProductData {
                        name: name.into(),
                        description,
                    },
                },
                quantity: 1,
            }],
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    /// Subscription to an existing price, quantity 1
    pub fn subscription(
        price: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            mode: CheckoutMode::Subscription,
            line_items: vec![LineItem {
                price: LineItemPrice::Price(price.into()),
                quantity: 1,
            }],
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }
}

/// Adapter trait for payment providers.
///
/// Each operation issues exactly one outbound call.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchange an OAuth authorization code for the provider's token payload.
    async fn exchange_authorization_code(&self, code: &str) -> RelayResult<Value>;

    /// Create a hosted checkout session and return the provider's session object.
    async fn create_checkout_session(&self, request: &CheckoutSessionRequest)
        -> RelayResult<Value>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

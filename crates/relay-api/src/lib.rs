//! # relay-api
//!
//! HTTP API layer for relay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Origin allow-list gate and matching CORS headers
//! - Stripe OAuth, checkout and subscription endpoints
//! - SendGrid email endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness message |
//! | GET | `/api/stripe/authorization/{code}` | Exchange Stripe Connect code |
//! | POST | `/api/stripe/checkout/session` | One-time checkout session |
//! | POST | `/api/stripe/subscription` | Subscription checkout session |
//! | POST | `/api/sendgrid/email` | Send an HTML email |

pub mod config;
pub mod gate;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;

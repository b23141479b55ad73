//! # relay-sendgrid
//!
//! SendGrid adapter for relay-rs.
//!
//! `SendGridSender` implements `EmailSender` on top of the v3
//! `POST /v3/mail/send` endpoint. One message means one request; nothing is
//! queued or retried.

pub mod config;
pub mod mail;
pub mod sender;

pub use config::SendGridConfig;
pub use mail::MailSendRequest;
pub use sender::SendGridSender;

/// Provider name used in logs and errors
pub const PROVIDER: &str = "sendgrid";

//! # Stripe Connect OAuth
//!
//! Authorization-code exchange against `POST /oauth/token`.

use serde::Serialize;

pub const GRANT_TYPE: &str = "authorization_code";

/// Form body of the token exchange
#[derive(Serialize)]
pub struct TokenExchangeForm<'a> {
    pub client_secret: &'a str,
    pub code: &'a str,
    pub grant_type: &'static str,
}

impl<'a> TokenExchangeForm<'a> {
    pub fn new(client_secret: &'a str, code: &'a str) -> Self {
        Self {
            client_secret,
            code,
            grant_type: GRANT_TYPE,
        }
    }
}

impl std::fmt::Debug for TokenExchangeForm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenExchangeForm")
            .field("client_secret", &"[REDACTED]")
            .field("code", &self.code)
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

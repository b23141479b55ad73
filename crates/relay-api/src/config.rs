//! # Application Configuration
//!
//! The only place the process environment is read. Built once at startup and
//! handed to everything else.

use relay_core::{AllowedOrigins, RelayError, RelayResult};
use relay_sendgrid::SendGridConfig;
use relay_stripe::StripeConfig;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Front-end origins allowed to call the API (empty = any)
    pub allowed_origins: AllowedOrigins,
    /// Stripe adapter settings
    pub stripe: StripeConfig,
    /// SendGrid adapter settings
    pub sendgrid: SendGridConfig,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> RelayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    ///
    /// Required: `STRIPE_API_KEY`, `SENDGRID_API_KEY`.
    /// Optional: `FRONT_END_URL` (or `FONT_END_URL`), `API_PORT`, `HOST`,
    /// `STRIPE_API_BASE_URL`, `STRIPE_CONNECT_BASE_URL`,
    /// `SENDGRID_API_BASE_URL`, `RELAY_HTTP_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F) -> RelayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            var(key).ok_or_else(|| RelayError::Configuration(format!("{} not set", key)))
        };

        let port = match var("API_PORT") {
            Some(port) => port.trim().parse().map_err(|_| {
                RelayError::Configuration(format!("API_PORT is not a valid port: {}", port))
            })?,
            None => DEFAULT_PORT,
        };

        let timeout = match var("RELAY_HTTP_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(secs.trim().parse().map_err(|_| {
                RelayError::Configuration(format!(
                    "RELAY_HTTP_TIMEOUT_SECS is not a number of seconds: {}",
                    secs
                ))
            })?)),
            None => None,
        };

        let allowed_origins = match var("FRONT_END_URL").or_else(|| var("FONT_END_URL")) {
            Some(list) => {
                let origins = AllowedOrigins::parse(&list);
                // A set but origin-less list must not fall back to open mode
                if origins.is_empty() {
                    return Err(RelayError::Configuration(format!(
                        "FRONT_END_URL has no origins: {:?}",
                        list
                    )));
                }
                origins
            }
            None => AllowedOrigins::open(),
        };

        let mut stripe = StripeConfig::new(required("STRIPE_API_KEY")?).with_timeout(timeout);
        if let Some(url) = var("STRIPE_API_BASE_URL") {
            stripe = stripe.with_api_base_url(url);
        }
        if let Some(url) = var("STRIPE_CONNECT_BASE_URL") {
            stripe = stripe.with_connect_base_url(url);
        }

        let mut sendgrid = SendGridConfig::new(required("SENDGRID_API_KEY")?).with_timeout(timeout);
        if let Some(url) = var("SENDGRID_API_BASE_URL") {
            sendgrid = sendgrid.with_api_base_url(url);
        }

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allowed_origins,
            stripe,
            sendgrid,
        })
    }

    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const KEYS: [(&str, &str); 2] = [
        ("STRIPE_API_KEY", "sk_test_abc"),
        ("SENDGRID_API_KEY", "SG.abc"),
    ];

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(lookup(&KEYS)).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.allowed_origins.is_open());
        assert_eq!(config.stripe.api_base_url, "https://api.stripe.com");
        assert_eq!(config.stripe.connect_base_url, "https://connect.stripe.com");
        assert_eq!(config.sendgrid.api_base_url, "https://api.sendgrid.com");
        assert!(config.stripe.timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let mut vars = KEYS.to_vec();
        vars.extend([
            ("API_PORT", "8081"),
            ("HOST", "127.0.0.1"),
            ("FRONT_END_URL", "https://a.app,https://b.app"),
            ("RELAY_HTTP_TIMEOUT_SECS", "15"),
            ("STRIPE_API_BASE_URL", "http://localhost:12111"),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8081");
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.allowed_origins.admits(Some("https://b.app")));
        assert_eq!(config.stripe.api_base_url, "http://localhost:12111");
        assert_eq!(config.sendgrid.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_legacy_origin_variable() {
        let mut vars = KEYS.to_vec();
        vars.push(("FONT_END_URL", "https://legacy.app"));
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert!(config.allowed_origins.admits(Some("https://legacy.app")));
        assert!(!config.allowed_origins.admits(Some("https://other.app")));
    }

    #[test]
    fn test_origin_list_without_origins_is_rejected() {
        for list in [",", " , ", ",,"] {
            let mut vars = KEYS.to_vec();
            vars.push(("FRONT_END_URL", list));
            let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();

            assert!(matches!(err, RelayError::Configuration(_)));
            assert!(err.to_string().contains("FRONT_END_URL"));
        }

        let mut vars = KEYS.to_vec();
        vars.push(("FONT_END_URL", " ,"));
        assert!(AppConfig::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_blank_origin_variable_is_open() {
        let mut vars = KEYS.to_vec();
        vars.push(("FRONT_END_URL", "   "));
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert!(config.allowed_origins.is_open());
    }

    #[test]
    fn test_missing_keys() {
        let err = AppConfig::from_lookup(lookup(&[("SENDGRID_API_KEY", "SG.abc")])).unwrap_err();
        assert!(err.to_string().contains("STRIPE_API_KEY"));

        let err = AppConfig::from_lookup(lookup(&[("STRIPE_API_KEY", "sk_test_abc")])).unwrap_err();
        assert!(err.to_string().contains("SENDGRID_API_KEY"));
    }

    #[test]
    fn test_bad_port() {
        let mut vars = KEYS.to_vec();
        vars.push(("API_PORT", "http"));
        assert!(AppConfig::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = AppConfig::from_lookup(lookup(&KEYS)).unwrap();
        let printed = format!("{:?}", config);

        assert!(!printed.contains("sk_test_abc"));
        assert!(!printed.contains("SG.abc"));
    }
}

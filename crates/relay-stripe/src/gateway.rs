//! # Stripe Gateway
//!
//! `PaymentGateway` implementation backed by the Stripe HTTP API.
//! Every operation is a single request; responses are relayed as raw JSON.

use crate::checkout::session_form;
use crate::config::StripeConfig;
use crate::oauth::TokenExchangeForm;
use crate::PROVIDER;
use async_trait::async_trait;
use relay_core::{CheckoutSessionRequest, PaymentGateway, RelayError, RelayResult};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Stripe payment gateway
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway; fails on an invalid key or HTTP client setup
    pub fn new(config: StripeConfig) -> RelayResult<Self> {
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

/// Turn a Stripe response into the relayed JSON or an error
async fn read_json(response: Response) -> RelayResult<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RelayError::network(PROVIDER, e))?;

    if !status.is_success() {
        error!("Stripe API error: status={}, body={}", status, body);
        return Err(RelayError::upstream(PROVIDER, status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        RelayError::Serialization(format!("Failed to parse Stripe response: {}", e))
    })
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, code))]
    async fn exchange_authorization_code(&self, code: &str) -> RelayResult<Value> {
        let url = format!("{}/oauth/token", self.config.connect_base_url);
        debug!("Exchanging Stripe authorization code");

        let response = self
            .client
            .post(&url)
            .form(&TokenExchangeForm::new(&self.config.secret_key, code))
            .send()
            .await
            .map_err(|e| RelayError::network(PROVIDER, e))?;

        let tokens = read_json(response).await?;

        let account = tokens
            .get("stripe_user_id")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        info!("Exchanged authorization code: account={}", account);

        Ok(tokens)
    }

    #[instrument(skip(self, request), fields(mode = %request.mode, items = request.line_items.len()))]
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> RelayResult<Value> {
        let form_params = session_form(request);
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        debug!(
            "Creating Stripe checkout session: {} items, mode={}",
            request.line_items.len(),
            request.mode
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| RelayError::network(PROVIDER, e))?;

        let session = read_json(response).await?;

        let session_id = session.get("id").and_then(Value::as_str).unwrap_or("unknown");
        info!("Created Stripe checkout session: id={}", session_id);

        Ok(session)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> StripeGateway {
        let config = StripeConfig::new("sk_test_123")
            .with_api_base_url(server.uri())
            .with_connect_base_url(server.uri());
        StripeGateway::new(config).unwrap()
    }

    fn widget_request() -> CheckoutSessionRequest {
        CheckoutSessionRequest::one_time(
            "usd",
            "1000",
            "Widget",
            Some("A widget".to_string()),
            "https://x/ok",
            "https://x/cancel",
        )
    }

    #[test]
    fn test_rejects_bad_key() {
        assert!(StripeGateway::new(StripeConfig::new("nope")).is_err());
    }

    #[tokio::test]
    async fn test_one_time_checkout_single_call() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(header("authorization", "Bearer sk_test_123"))
            .and(header("stripe-version", "2024-12-18.acacia"))
            .and(body_string_contains("mode=payment"))
            .and(body_string_contains("line_items%5B0%5D%5Bquantity%5D=1"))
            .and(body_string_contains(
                "line_items%5B0%5D%5Bprice_data%5D%5Bunit_amount_decimal%5D=1000",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_1",
                "object": "checkout.session",
                "url": "https://checkout.stripe.com/c/pay/cs_test_1",
                "mode": "payment"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = gateway(&server)
            .create_checkout_session(&widget_request())
            .await
            .unwrap();

        assert_eq!(session["id"], "cs_test_1");
        assert_eq!(session["object"], "checkout.session");
    }

    #[tokio::test]
    async fn test_subscription_checkout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(body_string_contains("mode=subscription"))
            .and(body_string_contains("line_items%5B0%5D%5Bprice%5D=price_123"))
            .and(body_string_contains("line_items%5B0%5D%5Bquantity%5D=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_sub",
                "mode": "subscription"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request =
            CheckoutSessionRequest::subscription("price_123", "https://x/ok", "https://x/cancel");
        let session = gateway(&server)
            .create_checkout_session(&request)
            .await
            .unwrap();

        assert_eq!(session["mode"], "subscription");
    }

    #[tokio::test]
    async fn test_checkout_rejection_keeps_stripe_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "type": "invalid_request_error",
                    "message": "Invalid currency: zzz"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway(&server)
            .create_checkout_session(&widget_request())
            .await
            .unwrap_err();

        assert_eq!(err.upstream_status(), Some(400));
        assert_eq!(err.error_body()["error"]["message"], "Invalid currency: zzz");
    }

    #[tokio::test]
    async fn test_authorization_code_exchange() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains("client_secret=sk_test_123"))
            .and(body_string_contains("code=ac_abc123"))
            .and(body_string_contains("grant_type=authorization_code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "sk_test_connected",
                "livemode": false,
                "stripe_user_id": "acct_123",
                "scope": "read_write"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = gateway(&server)
            .exchange_authorization_code("ac_abc123")
            .await
            .unwrap();

        assert_eq!(tokens["stripe_user_id"], "acct_123");
    }

    #[tokio::test]
    async fn test_authorization_code_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Authorization code does not exist: bogus"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway(&server)
            .exchange_authorization_code("bogus")
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Upstream { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_stripe_is_network_error() {
        let config = StripeConfig::new("sk_test_123").with_api_base_url("http://127.0.0.1:1");
        let err = StripeGateway::new(config)
            .unwrap()
            .create_checkout_session(&widget_request())
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Network { .. }));
    }
}

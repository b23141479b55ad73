//! # Request Handlers
//!
//! Axum request handlers. Each handler turns one inbound request into at most
//! one adapter call and relays the result.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::{CheckoutSessionRequest, EmailAddress, EmailMessage, RelayError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

pub const ROOT_MESSAGE: &str = "This is the backend server deployed as function";
pub const CODE_NOT_FOUND_MESSAGE: &str = "User code not found";
pub const EMAIL_SENT_MESSAGE: &str = "Email send successfully.";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

// =============================================================================
// Request/Response Types
// =============================================================================

/// One-time checkout request
#[derive(Debug, Deserialize)]
pub struct CheckoutSessionBody {
    pub currency: String,
    /// Accepts `"1000"` or `1000`
    #[serde(deserialize_with = "decimal_string")]
    pub unit_amount_decimal: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub success_url: String,
    pub cancel_url: String,
}

/// Subscription checkout request
#[derive(Debug, Deserialize)]
pub struct SubscriptionBody {
    /// Stripe price ID (`price_...`)
    pub price: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// Email request
#[derive(Debug, Deserialize)]
pub struct SendEmailBody {
    pub to: EmailAddress,
    pub from: EmailAddress,
    pub subject: String,
    /// HTML body
    pub content: String,
}

/// `{"message": ...}` response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure responses, one shape per route family
#[derive(Debug)]
pub enum ApiError {
    /// 404 `{"message": "User code not found"}`
    CodeNotFound,
    /// Status plus the relayed error object
    Relayed(StatusCode, Value),
    /// 500 `Internal Server Error` as plain text
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CodeNotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(CODE_NOT_FOUND_MESSAGE)),
            )
                .into_response(),
            ApiError::Relayed(status, body) => (status, Json(body)).into_response(),
            ApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR).into_response()
            }
        }
    }
}

fn decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a decimal string or number, got {}",
            other
        ))),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness message
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// Exchange a Stripe Connect authorization code.
///
/// Any failure is reported as "code not found"; the provider's detail is
/// only logged.
#[instrument(skip(state, code))]
pub async fn stripe_authorization(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tokens = state
        .payments
        .exchange_authorization_code(&code)
        .await
        .map_err(|e| {
            error!("Authorization code exchange failed: {}", e);
            ApiError::CodeNotFound
        })?;

    Ok(Json(tokens))
}

/// Create a one-time payment checkout session
#[instrument(skip(state, payload))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutSessionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        let err = RelayError::InvalidRequest(rejection.body_text());
        error!("Rejected checkout request: {}", err);
        ApiError::Relayed(StatusCode::INTERNAL_SERVER_ERROR, err.error_body())
    })?;

    let request = CheckoutSessionRequest::one_time(
        body.currency,
        body.unit_amount_decimal,
        body.name,
        body.description,
        body.success_url,
        body.cancel_url,
    );

    let session = state
        .payments
        .create_checkout_session(&request)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            ApiError::Relayed(StatusCode::INTERNAL_SERVER_ERROR, e.error_body())
        })?;

    Ok(Json(session))
}

/// Create a subscription checkout session
#[instrument(skip(state, payload))]
pub async fn create_subscription(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        error!("Rejected subscription request: {}", rejection.body_text());
        ApiError::Internal
    })?;

    let request = CheckoutSessionRequest::subscription(body.price, body.success_url, body.cancel_url);

    let session = state
        .payments
        .create_checkout_session(&request)
        .await
        .map_err(|e| {
            error!("Failed to create subscription session: {}", e);
            ApiError::Internal
        })?;

    Ok(Json(session))
}

/// Send a single HTML email; replies go to the sender
#[instrument(skip(state, payload))]
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<SendEmailBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        error!("Rejected email request: {}", rejection.body_text());
        ApiError::Internal
    })?;

    let message = EmailMessage::new(body.to, body.from, body.subject, body.content);

    state.email.send(&message).await.map_err(|e| {
        error!("Failed to send email: {}", e);
        ApiError::Relayed(StatusCode::BAD_REQUEST, e.error_body())
    })?;

    info!("Email relayed to {}", state.email.provider_name());
    Ok(Json(MessageResponse::new(EMAIL_SENT_MESSAGE)))
}

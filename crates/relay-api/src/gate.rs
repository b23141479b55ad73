//! # Origin Gate
//!
//! Middleware that rejects requests whose `Origin` header is not on the
//! allow-list, plus the CORS layer that advertises the same list.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::AllowedOrigins;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::debug;

pub const ACCESS_FORBIDDEN: &str = "Access Forbidden";

/// Body of a rejected request
#[derive(Debug, Serialize)]
pub struct ForbiddenResponse {
    pub error: &'static str,
}

/// Admit or reject a request before any handler runs
pub async fn origin_gate(
    State(origins): State<Arc<AllowedOrigins>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    if origins.admits(origin.as_deref()) {
        return next.run(request).await;
    }

    debug!(
        origin = origin.as_deref().unwrap_or("<none>"),
        path = %request.uri().path(),
        "Rejected request from unlisted origin"
    );

    (
        StatusCode::FORBIDDEN,
        Json(ForbiddenResponse {
            error: ACCESS_FORBIDDEN,
        }),
    )
        .into_response()
}

/// CORS matching the allow-list: `*` in open mode, otherwise the listed origins
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = if origins.is_open() {
        AllowOrigin::any()
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_body() {
        let body = serde_json::to_value(ForbiddenResponse {
            error: ACCESS_FORBIDDEN,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"error": "Access Forbidden"}));
    }
}

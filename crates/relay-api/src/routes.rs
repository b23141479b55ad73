//! # Routes
//!
//! Axum router configuration for the relay API.

use crate::gate::{cors_layer, origin_gate};
use crate::handlers;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - GET  /                                  - Liveness message
/// - GET  /api/stripe/authorization/{code}   - Stripe Connect code exchange
/// - POST /api/stripe/checkout/session       - One-time checkout session
/// - POST /api/stripe/subscription           - Subscription checkout session
/// - POST /api/sendgrid/email                - Send email
///
/// Requests pass through tracing, then CORS, then the origin gate.
pub fn create_router(state: AppState) -> Router {
    let stripe_routes = Router::new()
        .route(
            "/authorization/{code}",
            get(handlers::stripe_authorization),
        )
        .route("/checkout/session", post(handlers::create_checkout_session))
        .route("/subscription", post(handlers::create_subscription));

    let sendgrid_routes = Router::new().route("/email", post(handlers::send_email));

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.origins))
        .layer(middleware::from_fn_with_state(
            state.origins.clone(),
            origin_gate,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api/stripe", stripe_routes)
        .nest("/api/sendgrid", sendgrid_routes)
        .layer(layers)
        .with_state(state)
}

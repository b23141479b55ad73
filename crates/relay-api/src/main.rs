//! # relay-server
//!
//! Stripe and SendGrid relay behind one origin-gated HTTP endpoint.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_API_KEY=sk_test_...
//! export SENDGRID_API_KEY=SG....
//! export FRONT_END_URL=https://app.example.com,https://admin.example.com
//!
//! # Run the server
//! relay-server
//! ```

use relay_api::{routes, AppConfig, AppState};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG from it applies
    dotenvy::dotenv().ok();

    init_logging();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config)?;

    if config.allowed_origins.is_open() {
        info!("Allowed origins: any");
    } else {
        info!(
            "Allowed origins: {:?}",
            config.allowed_origins.iter().collect::<Vec<_>>()
        );
    }
    info!(
        "Providers: {}, {}",
        state.payments.provider_name(),
        state.email.provider_name()
    );
    info!("Stripe mode: {}", config.stripe.mode());

    let app = routes::create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// `LOG_FORMAT=json` switches to JSON lines
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutting down");
}

//! checkout-broker HTTP Server
//!
//! Axum-based server that turns a product tier into a Stripe hosted
//! checkout session and serves the post-checkout landing routes.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_payments::{CheckoutService, StripeProvider};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Initialize payments
    let provider = Arc::new(StripeProvider::from_secret(&config.stripe_secret_key)?);
    let mut checkout = CheckoutService::new(provider, config.domain.clone());
    if let Some(timeout) = config.provider_timeout {
        checkout = checkout.with_timeout(timeout);
    }

    tracing::info!("✓ {} configured", checkout.provider_name());
    for offering in checkout.catalog().offerings() {
        tracing::info!(
            "  {:<6} {} (${}.{:02})",
            offering.tier.as_str(),
            offering.name,
            offering.amount_minor_units / 100,
            offering.amount_minor_units % 100
        );
    }

    let state = AppState { checkout };
    let app = routes::router(state, &config.static_dir);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 checkout-broker running on http://{}", addr);
    tracing::info!("   Public domain: {}", config.domain);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                         - Health check");
    tracing::info!("  POST /create-checkout-session/{{tier}} - Create Stripe checkout");
    tracing::info!("  GET  /success                        - Payment confirmation page");
    tracing::info!("  GET  /cancel                         - Redirect to product listing");
    tracing::info!("  GET  /*                              - Static files from {}", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

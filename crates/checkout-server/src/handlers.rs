//! HTTP Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use checkout_payments::{CheckoutUrl, PaymentError};

use crate::state::AppState;

/// Where `/cancel` sends the browser
pub const CANCEL_REDIRECT_URL: &str = "https://evolvethecosmos.com/#products";

const SUCCESS_PAGE: &str = include_str!("../assets/success.html");

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create a Stripe checkout session for the tier in the path
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Path(tier): Path<String>,
) -> Result<Json<CheckoutUrl>, PaymentError> {
    let checkout = state
        .checkout
        .create_checkout_session(&tier)
        .await
        .inspect_err(|e| match e {
            PaymentError::InvalidTier(_) => tracing::warn!(%tier, "Rejected unknown tier"),
            _ => tracing::error!(%tier, error = ?e, "Stripe error: {}", e),
        })?;

    Ok(Json(checkout))
}

/// Post-payment landing page. Static; the `session_id` query is ignored.
pub async fn success_page() -> Html<&'static str> {
    Html(SUCCESS_PAGE)
}

/// Abandoned checkout: back to the product listing
pub async fn cancel_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, CANCEL_REDIRECT_URL)])
}

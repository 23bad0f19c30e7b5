//! Application State

use checkout_payments::CheckoutService;

/// Shared application state, immutable after startup
#[derive(Clone)]
pub struct AppState {
    /// Catalog lookup and Stripe session creation
    pub checkout: CheckoutService,
}

//! Payment Provider Integration
//!
//! Provider-neutral description of a hosted checkout session and the trait
//! each processor implements.

mod mock;
mod stripe_checkout;

pub use mock::MockProvider;
pub use stripe_checkout::StripeProvider;

use async_trait::async_trait;

use crate::error::Result;

/// Token the provider replaces with the real session id on redirect.
/// Must reach the provider unresolved.
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Settlement currency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
}

/// Accepted payment methods
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
}

/// Session billing mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMode {
    /// One-time payment
    Payment,
}

/// One priced line on the checkout page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub currency: Currency,
    pub unit_amount: i64,
    pub quantity: u64,
    pub product_name: String,
    pub product_description: String,
}

/// Everything the provider needs to open a hosted checkout session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRequest {
    pub payment_method_types: Vec<PaymentMethod>,
    pub line_items: Vec<LineItem>,
    pub mode: PaymentMode,
    pub success_url: String,
    pub cancel_url: String,
}

/// Payment processor (Strategy pattern)
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session and return its redirect URL
    async fn create_session(&self, request: &SessionRequest) -> Result<String>;

    /// Provider name
    fn name(&self) -> &str;
}

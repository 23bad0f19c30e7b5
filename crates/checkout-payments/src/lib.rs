//! # checkout-payments
//!
//! Product catalog and hosted checkout session creation for checkout-broker.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  tier   ┌──────────────────┐  session  ┌─────────────────┐
//! │   Browser   │────────▶│ CheckoutService  │──────────▶│ Stripe Checkout │
//! │  (pricing)  │◀────────│ catalog lookup   │◀──────────│  (hosted page)  │
//! └─────────────┘   url   └──────────────────┘    url    └─────────────────┘
//! ```
//!
//! The browser follows the returned URL to Stripe's hosted page; Stripe then
//! redirects to `/success` or `/cancel` on the configured domain.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use checkout_payments::{CheckoutService, StripeProvider};
//!
//! let provider = Arc::new(StripeProvider::from_secret(&secret_key)?);
//! let service = CheckoutService::new(provider, "https://yoursite.com");
//!
//! let checkout = service.create_checkout_session("pro").await?;
//! // Redirect user to: checkout.url
//! ```

mod catalog;
mod checkout;
mod error;
pub mod provider;

pub use catalog::{Catalog, Offering, Tier};
pub use checkout::{CheckoutService, CheckoutUrl};
pub use error::{PaymentError, Result, INVALID_TIER_MESSAGE};
pub use provider::{MockProvider, PaymentProvider, StripeProvider};

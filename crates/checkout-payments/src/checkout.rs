//! Checkout Session Creation
//!
//! Resolves a tier to its offering and asks the payment provider for a
//! hosted checkout session. Holds no state of its own.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{Catalog, Offering};
use crate::error::{PaymentError, Result};
use crate::provider::{
    Currency, LineItem, PaymentMethod, PaymentMode, PaymentProvider, SessionRequest,
    SESSION_ID_PLACEHOLDER,
};

/// Successful checkout: where to send the browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckoutUrl {
    pub url: String,
}

/// Checkout session service
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct CheckoutService {
    provider: Arc<dyn PaymentProvider>,
    catalog: Catalog,
    domain: String,
    timeout: Option<Duration>,
}

impl CheckoutService {
    /// `domain` is the public base URL, used verbatim as the prefix of the
    /// success and cancel redirects.
    pub fn new(provider: Arc<dyn PaymentProvider>, domain: impl Into<String>) -> Self {
        Self {
            provider,
            catalog: Catalog::standard(),
            domain: domain.into(),
            timeout: None,
        }
    }

    /// Bound the provider call. Without it the provider client's default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn success_url(&self) -> String {
        format!("{}/success?session_id={}", self.domain, SESSION_ID_PLACEHOLDER)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/cancel", self.domain)
    }

    /// Provider request for a single unit of `offering`
    pub fn session_request(&self, offering: &Offering) -> SessionRequest {
        SessionRequest {
            payment_method_types: vec![PaymentMethod::Card],
            line_items: vec![LineItem {
                currency: Currency::Usd,
                unit_amount: offering.amount_minor_units,
                quantity: 1,
                product_name: offering.name.to_string(),
                product_description: offering.description.to_string(),
            }],
            mode: PaymentMode::Payment,
            success_url: self.success_url(),
            cancel_url: self.cancel_url(),
        }
    }

    /// Create a hosted checkout session for `tier`.
    ///
    /// Unknown tiers fail before the provider is contacted. Provider failures
    /// are returned as-is; nothing is retried.
    pub async fn create_checkout_session(&self, tier: &str) -> Result<CheckoutUrl> {
        let offering = self.catalog.lookup(tier)?;
        let request = self.session_request(offering);

        tracing::debug!(
            tier = %offering.tier,
            amount = offering.amount_minor_units,
            provider = self.provider.name(),
            "Creating checkout session"
        );

        let call = self.provider.create_session(&request);
        let url = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                PaymentError::Provider(format!(
                    "Payment provider did not respond within {}s",
                    limit.as_secs()
                ))
            })??,
            None => call.await?,
        };

        Ok(CheckoutUrl { url })
    }
}

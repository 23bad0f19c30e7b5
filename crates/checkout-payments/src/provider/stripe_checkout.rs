//! Stripe Checkout (Hosted)

use async_trait::async_trait;
use stripe::{
    CheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, CreateCheckoutSessionPaymentMethodTypes,
    StripeError,
};

use super::{Currency, PaymentMethod, PaymentMode, PaymentProvider, SessionRequest};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeProvider {
    client: Client,
}

impl StripeProvider {
    /// Create a new Stripe provider
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Talk to a Stripe-compatible API at `api_base` (e.g. stripe-mock)
    pub fn with_api_base(api_base: &str, secret_key: &str) -> Self {
        Self {
            client: Client::from_url(api_base, secret_key),
        }
    }

    /// Validate and wrap a secret key
    pub fn from_secret(secret_key: &str) -> Result<Self> {
        let secret_key = secret_key.trim();
        if secret_key.is_empty() {
            return Err(PaymentError::Config("STRIPE_SECRET_KEY is empty".into()));
        }
        Ok(Self::new(secret_key))
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    async fn create_session(&self, request: &SessionRequest) -> Result<String> {
        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(match request.mode {
            PaymentMode::Payment => CheckoutSessionMode::Payment,
        });
        params.payment_method_types = Some(
            request
                .payment_method_types
                .iter()
                .map(|method| match method {
                    PaymentMethod::Card => CreateCheckoutSessionPaymentMethodTypes::Card,
                })
                .collect(),
        );
        params.line_items = Some(
            request
                .line_items
                .iter()
                .map(|item| CreateCheckoutSessionLineItems {
                    quantity: Some(item.quantity),
                    price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                        currency: match item.currency {
                            Currency::Usd => stripe::Currency::USD,
                        },
                        unit_amount: Some(item.unit_amount),
                        product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                            name: item.product_name.clone(),
                            description: Some(item.product_description.clone()),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .collect(),
        );

        let session = CheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Provider(provider_message(e)))?;

        tracing::debug!(session_id = %session.id, "Stripe checkout session created");

        session
            .url
            .ok_or_else(|| PaymentError::Provider("No checkout URL returned".into()))
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}

/// Stripe's own message when the API reported one, otherwise the client error
fn provider_message(err: StripeError) -> String {
    match err {
        StripeError::Stripe(request_error) => request_error
            .message
            .clone()
            .unwrap_or_else(|| request_error.to_string()),
        other => other.to_string(),
    }
}

//! Mock Payment Provider
//!
//! For tests and local demos. Records every request and answers with a
//! fixed outcome.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{PaymentProvider, SessionRequest};
use crate::error::{PaymentError, Result};

/// Recording provider with a canned response
pub struct MockProvider {
    outcome: std::result::Result<String, String>,
    requests: Mutex<Vec<SessionRequest>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self::succeeding("https://checkout.stripe.com/c/pay/cs_test_mock")
    }

    /// Every session resolves to `url`
    pub fn succeeding(url: impl Into<String>) -> Self {
        Self {
            outcome: Ok(url.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every session fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<SessionRequest> {
        self.recorded().clone()
    }

    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    /// A panic elsewhere must not drop recorded calls
    fn recorded(&self) -> MutexGuard<'_, Vec<SessionRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PaymentProvider for MockProvider {
    async fn create_session(&self, request: &SessionRequest) -> Result<String> {
        self.recorded().push(request.clone());

        self.outcome.clone().map_err(PaymentError::Provider)
    }

    fn name(&self) -> &str {
        "MockProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::PaymentMode;

    fn request() -> SessionRequest {
        SessionRequest {
            payment_method_types: Vec::new(),
            line_items: Vec::new(),
            mode: PaymentMode::Payment,
            success_url: "http://localhost/success".into(),
            cancel_url: "http://localhost/cancel".into(),
        }
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let provider = MockProvider::succeeding("https://example.test/pay");

        let url = provider.create_session(&request()).await.unwrap();
        assert_eq!(url, "https://example.test/pay");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.requests()[0].cancel_url, "http://localhost/cancel");
    }

    #[tokio::test]
    async fn test_mock_records_after_poisoned_lock() {
        let provider = std::sync::Arc::new(MockProvider::new());

        let poisoner = provider.clone();
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.requests.lock().unwrap();
            panic!("poison the request log");
        })
        .join();
        assert!(joined.is_err());
        assert!(provider.requests.is_poisoned());

        provider.create_session(&request()).await.unwrap();
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let provider = MockProvider::failing("card_declined");
        let result = provider.create_session(&request()).await;
        assert_eq!(result, Err(PaymentError::Provider("card_declined".into())));
    }
}

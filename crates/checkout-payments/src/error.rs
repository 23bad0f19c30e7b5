//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Message returned to callers for unknown tier keys
pub const INVALID_TIER_MESSAGE: &str = "Invalid product tier";

/// Checkout-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Tier key not present in the catalog
    #[error("Invalid product tier")]
    InvalidTier(String),

    /// Payment provider rejected or failed the request.
    ///
    /// Displays the provider's message unchanged.
    #[error("{0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Whether the caller is at fault (maps to a 4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::InvalidTier(_))
    }

    /// Message exposed to HTTP callers
    pub fn user_message(&self) -> String {
        match self {
            PaymentError::InvalidTier(_) => INVALID_TIER_MESSAGE.into(),
            PaymentError::Provider(msg) => msg.clone(),
            PaymentError::Config(_) => "Service configuration error.".into(),
        }
    }
}

#[cfg(feature = "axum-handlers")]
mod response {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use serde::Serialize;

    use super::PaymentError;

    #[derive(Serialize)]
    struct ErrorBody {
        error: String,
    }

    impl IntoResponse for PaymentError {
        fn into_response(self) -> Response {
            let status = if self.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };

            (status, Json(ErrorBody { error: self.user_message() })).into_response()
        }
    }
}

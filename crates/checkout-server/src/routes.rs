//! Router

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{cancel_redirect, create_checkout_session, health_check, success_page};
use crate::state::AppState;

/// Build the application router. Paths without a route fall through to
/// files under `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Checkout
        .route("/create-checkout-session/{tier}", post(create_checkout_session))
        .route("/success", get(success_page))
        .route("/cancel", get(cancel_redirect))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use checkout_payments::{CheckoutService, MockProvider};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::handlers::CANCEL_REDIRECT_URL;

    fn app(provider: &Arc<MockProvider>) -> Router {
        let state = AppState {
            checkout: CheckoutService::new(provider.clone(), "http://localhost:3000"),
        };
        router(state, "does-not-exist")
    }

    async fn send(app: Router, method: &str, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_checkout_returns_url() {
        let provider = Arc::new(MockProvider::succeeding("https://checkout.stripe.com/c/pay/cs_42"));

        let response = send(app(&provider), "POST", "/create-checkout-session/pro").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "url": "https://checkout.stripe.com/c/pay/cs_42" }));
        assert_eq!(provider.requests()[0].line_items[0].unit_amount, 19700);
    }

    #[tokio::test]
    async fn test_unknown_tier_is_bad_request() {
        let provider = Arc::new(MockProvider::new());

        let response = send(app(&provider), "POST", "/create-checkout-session/platinum").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Invalid product tier" }));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_server_error() {
        let provider = Arc::new(MockProvider::failing("Invalid API Key provided: sk_test_****"));

        let response = send(app(&provider), "POST", "/create-checkout-session/basic").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid API Key provided: sk_test_****");
        assert!(body.get("url").is_none());
    }

    #[tokio::test]
    async fn test_cancel_redirects() {
        let provider = Arc::new(MockProvider::new());

        for uri in ["/cancel", "/cancel?session_id=abc123&x=1"] {
            let response = send(app(&provider), "GET", uri).await;
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(response.headers()[header::LOCATION], CANCEL_REDIRECT_URL);
        }
    }

    #[tokio::test]
    async fn test_success_page_is_static() {
        let provider = Arc::new(MockProvider::new());

        let response = send(app(&provider), "GET", "/success?session_id=abc123").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Payment Confirmed"));
        assert!(!html.contains("abc123"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let provider = Arc::new(MockProvider::new());

        let response = send(app(&provider), "GET", "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_checkout_requires_post() {
        let provider = Arc::new(MockProvider::new());

        let response = send(app(&provider), "GET", "/create-checkout-session/basic").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_static_dir() {
        let provider = Arc::new(MockProvider::new());

        let response = send(app(&provider), "GET", "/missing.html").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

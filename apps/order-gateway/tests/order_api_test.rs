//! E2E Integration Tests for the Orders Endpoint
//!
//! Drives `POST /api/orders` through the full router: HTTP → order service →
//! validator → currency transformer.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use order_gateway::infrastructure::config::CorsSettings;
use order_gateway::{
    AppState, ArticleError, ArticleGeneratorPort, ArticleRequest, GenerateArticleUseCase,
    OrderService, create_router,
};

// =============================================================================
// Test harness
// =============================================================================

struct UnusedGenerator;

#[async_trait]
impl ArticleGeneratorPort for UnusedGenerator {
    async fn generate(&self, _request: &ArticleRequest) -> Result<String, ArticleError> {
        Err(ArticleError::MissingCredentials)
    }
}

fn router() -> Router {
    let state = AppState {
        order_service: Arc::new(OrderService::standard()),
        generate_article: Arc::new(GenerateArticleUseCase::new(Arc::new(UnusedGenerator))),
        version: "test".to_string(),
    };
    create_router(state, &CorsSettings::default())
}

fn order(id: &str, name: &str, price: &str, currency: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "address": {
            "city": "Taipei",
            "district": "Xinyi",
            "street": "Main St"
        },
        "price": price,
        "currency": currency
    })
}

async fn post_raw(body: Body, content_type: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_order(body: &Value) -> (StatusCode, Value) {
    post_raw(
        Body::from(serde_json::to_vec(body).unwrap()),
        "application/json",
    )
    .await
}

// =============================================================================
// Successful orders
// =============================================================================

#[tokio::test]
async fn twd_order_is_returned_unchanged() {
    let (status, body) = post_order(&order("123", "John Doe", "1000", "TWD")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "123");
    assert_eq!(body["name"], "John Doe");
    assert_eq!(
        body["address"],
        json!({"city": "Taipei", "district": "Xinyi", "street": "Main St"})
    );
    assert_eq!(body["price"].as_f64(), Some(1000.0));
    assert_eq!(body["currency"], "TWD");
}

#[tokio::test]
async fn usd_order_is_converted_to_twd() {
    let mut input = order("124", "Jane Doe", "100", "USD");
    input["address"] = json!({
        "city": "New York",
        "district": "Manhattan",
        "street": "Broadway"
    });

    let (status, body) = post_order(&input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "124");
    assert_eq!(body["address"]["city"], "New York");
    assert_eq!(body["price"].as_f64(), Some(3100.0));
    assert_eq!(body["currency"], "TWD");
}

#[tokio::test]
async fn price_is_a_json_number() {
    let (_, body) = post_order(&order("130", "John Doe", "12.5", "USD")).await;

    assert!(body["price"].is_number());
    assert_eq!(body["price"].as_f64(), Some(387.5));
}

// =============================================================================
// Validation failures
// =============================================================================

#[tokio::test]
async fn non_english_name_is_rejected() {
    let (status, body) = post_order(&order("125", "John123", "1000", "TWD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "Name contains non-English characters"})
    );
}

#[tokio::test]
async fn uncapitalized_name_is_rejected() {
    let (status, body) = post_order(&order("126", "john Doe", "1000", "TWD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Name is not capitalized"}));
}

#[tokio::test]
async fn price_over_limit_is_rejected() {
    let (status, body) = post_order(&order("127", "John Doe", "2001", "TWD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Price is over 2000"}));
}

#[tokio::test]
async fn unsupported_currency_is_rejected() {
    let (status, body) = post_order(&order("128", "John Doe", "1000", "EUR")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Currency format is wrong"}));
}

#[tokio::test]
async fn first_failing_rule_is_reported() {
    // Breaks every rule; only the name format error is reported.
    let (status, body) = post_order(&order("129", "john123", "9999", "eur")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "Name contains non-English characters"})
    );
}

// =============================================================================
// Extreme prices
// =============================================================================

#[tokio::test]
async fn huge_negative_twd_price_is_accepted() {
    let (status, body) =
        post_order(&order("133", "John Doe", "-3000000000000000000000000000", "TWD")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"].as_f64(), Some(-3e27));
}

#[tokio::test]
async fn usd_conversion_overflow_is_bad_request() {
    let (status, body) =
        post_order(&order("134", "John Doe", "-3000000000000000000000000000", "USD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Price is out of range"}));
}

#[tokio::test]
async fn price_beyond_decimal_range_is_bad_request() {
    let (status, body) = post_order(&order("135", "John Doe", "-1e30", "TWD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Price is out of range"}));
}

#[tokio::test]
async fn huge_positive_price_is_over_limit() {
    let (status, body) = post_order(&order("136", "John Doe", "1e30", "TWD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Price is over 2000"}));
}

// =============================================================================
// Malformed bodies
// =============================================================================

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, body) = post_raw(Body::from("{\"id\": "), "application/json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Invalid JSON"}));
}

#[tokio::test]
async fn missing_field_is_unprocessable() {
    let mut input = order("131", "John Doe", "1000", "TWD");
    input.as_object_mut().unwrap().remove("currency");

    let (status, body) = post_order(&input).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("currency"));
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let body = serde_json::to_vec(&order("132", "John Doe", "1000", "TWD")).unwrap();

    let (status, body) = post_raw(Body::from(body), "text/plain").await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["detail"].is_string());
}

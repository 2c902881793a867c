//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the order service and the article
//! use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderValue,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::ports::ArticleGeneratorPort;
use crate::application::services::OrderService;
use crate::application::use_cases::GenerateArticleUseCase;
use crate::infrastructure::config::CorsSettings;

use super::error::ApiError;
use super::request::{CreateOrderRequest, GenerateArticleRequest};
use super::response::{ArticleResponse, HealthResponse, MessageResponse, OrderResponse};

/// Application state shared across handlers.
pub struct AppState<G>
where
    G: ArticleGeneratorPort,
{
    /// Order validation and normalization.
    pub order_service: Arc<OrderService>,
    /// Use case for generating travel articles.
    pub generate_article: Arc<GenerateArticleUseCase<G>>,
    /// Application version.
    pub version: String,
}

impl<G> Clone for AppState<G>
where
    G: ArticleGeneratorPort,
{
    fn clone(&self) -> Self {
        Self {
            order_service: Arc::clone(&self.order_service),
            generate_article: Arc::clone(&self.generate_article),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints, CORS and request tracing.
pub fn create_router<G>(state: AppState<G>, cors: &CorsSettings) -> Router
where
    G: ArticleGeneratorPort + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/orders", post(create_order))
        .route("/api/generate-travel-article", post(generate_travel_article))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors)),
        )
}

/// CORS policy: listed origins, credentials allowed, any method and header.
///
/// Origins that are not valid header values are skipped with a warning, as is
/// the `*` wildcard, which cannot be combined with credentials.
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.as_str() == "*";
            if wildcard {
                tracing::warn!("Ignoring wildcard CORS origin");
            }
            !wildcard
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Greeting endpoint.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World".to_string(),
    })
}

/// Health check endpoint.
async fn health_check<G>(State(state): State<AppState<G>>) -> Json<HealthResponse>
where
    G: ArticleGeneratorPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Create order endpoint.
async fn create_order<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError>
where
    G: ArticleGeneratorPort,
{
    let Json(request) = payload?;
    let order = state.order_service.create_order(request.into())?;
    Ok(Json(order.into()))
}

/// Generate travel article endpoint.
async fn generate_travel_article<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<GenerateArticleRequest>, JsonRejection>,
) -> Result<Json<ArticleResponse>, ApiError>
where
    G: ArticleGeneratorPort,
{
    let Json(request) = payload?;
    let article = state.generate_article.execute(request.into()).await?;
    Ok(Json(ArticleResponse { article }))
}

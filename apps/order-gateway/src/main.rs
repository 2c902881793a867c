//! Order Gateway Binary
//!
//! Starts the order gateway HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-gateway
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_GATEWAY_HOST`: Bind address (default: 0.0.0.0)
//! - `ORDER_GATEWAY_PORT`: HTTP server port (default: 8000)
//! - `ORDER_GATEWAY_CORS_ORIGINS`: Comma-separated allowed origins (default: <http://localhost:3000>)
//! - `OPENAI_API_KEY`: Language model API key; article generation fails without it
//! - `OPENAI_BASE_URL`: API base URL (default: <https://api.openai.com/v1>)
//! - `OPENAI_MODEL`: Chat model (default: gpt-4o)
//! - `OPENAI_TIMEOUT_SECS`: Request timeout (default: 60)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use anyhow::Context;
use order_gateway::{
    AppState, GatewayConfig, GenerateArticleUseCase, OpenAiArticleGenerator, OrderService,
    create_router,
};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Order Gateway");

    let config = GatewayConfig::from_env().context("invalid configuration")?;
    log_config(&config);

    let generator = OpenAiArticleGenerator::new(config.openai.clone())
        .context("failed to create language model client")?;

    let state = AppState {
        order_service: Arc::new(OrderService::standard()),
        generate_article: Arc::new(GenerateArticleUseCase::new(Arc::new(generator))),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state, &config.cors);

    let addr = config.server.addr();
    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/orders");
    tracing::info!("  POST /api/generate-travel-article");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Order gateway stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories. A missing file is fine.
fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(
                    "order_gateway=info"
                        .parse()
                        .expect("static directive 'order_gateway=info' is valid"),
                )
                .add_directive(
                    "tower_http=info"
                        .parse()
                        .expect("static directive 'tower_http=info' is valid"),
                ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(config: &GatewayConfig) {
    tracing::info!(
        addr = %config.server.addr(),
        cors_origins = ?config.cors.allowed_origins,
        model = %config.openai.model,
        llm_base_url = %config.openai.base_url,
        "Configuration loaded"
    );

    if !config.openai.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; article generation will fail");
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}

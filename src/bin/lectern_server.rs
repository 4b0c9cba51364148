//! Lectern HTTP server entry point
//!
//! Starts the REST API server for the Lectern verse service.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern::core::config::Config;
use lectern::core::services::Services;
use lectern::http::{self, middleware as http_middleware};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lectern=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lectern verse service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create shared services
    let services = Arc::new(Services::new(config.clone())?);

    // Build the API router
    let app = Router::new()
        // Health check endpoint
        .route("/health", get(http::health_handler))
        // API v1 endpoints
        .route("/api/v1/search", get(http::search_handler))
        .route("/api/v1/suggest", get(http::suggest_handler))
        .route("/api/v1/books", get(http::books_handler))
        .route("/api/v1/reindex", post(http::reindex_handler))
        // Add middleware
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}

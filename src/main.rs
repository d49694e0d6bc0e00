//! nouveau-nav server entry point.
//!
//! Starts the Axum HTTP server with the REST rendering endpoints.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use nouveau_nav::api;
use nouveau_nav::app_state::AppState;
use nouveau_nav::config::NavConfig;
use nouveau_nav::service::NavService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = NavConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        page_limit = config.page_limit,
        theme_dir = %config.theme_dir.display(),
        "starting nouveau-nav"
    );

    // Build service layer
    let nav_service = Arc::new(NavService::new(&config));

    // Build application state
    let app_state = AppState { nav_service };

    // Build router
    let app = api::build_router()
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

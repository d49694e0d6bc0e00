//! System endpoints: health check, navigation defaults.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::pagination::{MAX_SLOTS, MIN_SLOTS};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Archive navigation defaults in effect.
#[derive(Debug, Serialize, ToSchema)]
pub struct NavDefaults {
    id: String,
    classes: Vec<String>,
    page_limit: i64,
    min_slots: u64,
    max_slots: u64,
    prev_text: String,
    next_text: String,
}

/// `GET /config/nav` — Archive navigation defaults.
#[utoipa::path(
    get,
    path = "/config/nav",
    tag = "System",
    summary = "Navigation defaults",
    description = "Returns the configured archive navigation options and the slot bounds.",
    responses(
        (status = 200, description = "Navigation defaults", body = NavDefaults),
    )
)]
pub async fn nav_defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    let options = state.nav_service.nav_options();
    Json(NavDefaults {
        id: options.id.clone(),
        classes: options.classes.clone(),
        page_limit: options.page_limit,
        min_slots: MIN_SLOTS,
        max_slots: MAX_SLOTS,
        prev_text: options.prev_text.clone(),
        next_text: options.next_text.clone(),
    })
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/nav", get(nav_defaults_handler))
}

//! Breadcrumb handlers.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{BreadcrumbRequest, BreadcrumbResponse};
use crate::app_state::AppState;

/// `POST /breadcrumbs` — Build a breadcrumb trail.
#[utoipa::path(
    post,
    path = "/api/v1/breadcrumbs",
    tag = "Breadcrumbs",
    summary = "Build a breadcrumb trail",
    description = "Returns the ordered crumbs for the described view, starting at the site home.",
    request_body = BreadcrumbRequest,
    responses(
        (status = 200, description = "Breadcrumb trail", body = BreadcrumbResponse),
        (status = 422, description = "Malformed context"),
    )
)]
pub async fn breadcrumbs_json(
    State(state): State<AppState>,
    Json(req): Json<BreadcrumbRequest>,
) -> impl IntoResponse {
    let options = state
        .nav_service
        .breadcrumb_options(req.use_prefix, req.blog_title);
    let trail = state.nav_service.breadcrumbs(&req.context, &options);
    Json(BreadcrumbResponse {
        crumbs: trail.into_crumbs(),
    })
}

/// `POST /breadcrumbs/html` — Render a breadcrumb trail.
#[utoipa::path(
    post,
    path = "/api/v1/breadcrumbs/html",
    tag = "Breadcrumbs",
    summary = "Render breadcrumbs",
    description = "Renders Foundation breadcrumb markup for the described view.",
    request_body = BreadcrumbRequest,
    responses(
        (status = 200, description = "Breadcrumb markup", body = String, content_type = "text/html"),
        (status = 422, description = "Malformed context"),
    )
)]
pub async fn breadcrumbs_html(
    State(state): State<AppState>,
    Json(req): Json<BreadcrumbRequest>,
) -> impl IntoResponse {
    let options = state
        .nav_service
        .breadcrumb_options(req.use_prefix, req.blog_title);
    Html(state.nav_service.breadcrumbs_html(&req.context, &options))
}

/// Breadcrumb routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/breadcrumbs", post(breadcrumbs_json))
        .route("/breadcrumbs/html", post(breadcrumbs_html))
}

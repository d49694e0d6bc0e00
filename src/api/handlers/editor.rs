//! Editor settings handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Map;

use crate::api::dto::{EditorQuery, EditorSettingsResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, NavError};

/// `GET /editor/settings` — TinyMCE configuration for the theme.
///
/// # Errors
///
/// Returns [`NavError::Editor`] if the style rules cannot be encoded.
#[utoipa::path(
    get,
    path = "/api/v1/editor/settings",
    tag = "Editor",
    summary = "TinyMCE settings",
    description = "Returns the content stylesheet list, the second toolbar row with the styles dropdown, and init settings with both style dropdown variants.",
    params(EditorQuery),
    responses(
        (status = 200, description = "Editor settings", body = EditorSettingsResponse),
        (status = 500, description = "Encoding failure", body = ErrorResponse),
    )
)]
pub async fn editor_settings(
    State(state): State<AppState>,
    Query(query): Query<EditorQuery>,
) -> Result<impl IntoResponse, NavError> {
    let settings =
        state
            .nav_service
            .editor_settings(&query.content_css, query.buttons(), Map::new())?;
    Ok(Json(EditorSettingsResponse::from(settings)))
}

/// Editor routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/editor/settings", get(editor_settings))
}

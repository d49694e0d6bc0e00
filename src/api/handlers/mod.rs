//! REST endpoint handlers organized by resource.

pub mod breadcrumbs;
pub mod editor;
pub mod layout;
pub mod pagination;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pagination::routes())
        .merge(breadcrumbs::routes())
        .merge(editor::routes())
        .merge(layout::routes())
}

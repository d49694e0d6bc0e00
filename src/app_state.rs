//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::NavService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Navigation service for all rendering.
    pub nav_service: Arc<NavService>,
}

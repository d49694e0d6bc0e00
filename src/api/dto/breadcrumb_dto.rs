//! Breadcrumb DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::breadcrumb::{BreadcrumbContext, Crumb};

/// Request body for the breadcrumb endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BreadcrumbRequest {
    /// View description, tagged with `type` (e.g. `singular`, `search`).
    #[schema(value_type = Object)]
    pub context: BreadcrumbContext,
    /// Override the configured archive-prefix setting.
    #[serde(default)]
    pub use_prefix: Option<bool>,
    /// Override the configured blog title.
    #[serde(default)]
    pub blog_title: Option<String>,
}

/// Response body for `POST /api/v1/breadcrumbs`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BreadcrumbResponse {
    /// Crumbs in display order, home first.
    #[schema(value_type = Vec<Object>)]
    pub crumbs: Vec<Crumb>,
}

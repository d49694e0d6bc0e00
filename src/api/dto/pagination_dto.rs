//! Pagination and article page DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::pagination::{PaginationResult, PaginationToken};

/// Query parameters for the pagination endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Current page; 0 or negative means unset.
    #[serde(default)]
    pub current: i64,
    /// Total number of pages (must be at least 1).
    pub total: i64,
    /// Slot budget, clamped to 9..=1000. Defaults to the configured limit.
    #[serde(default)]
    pub slots: Option<i64>,
    /// Base URL for page links (HTML endpoint only). Defaults to the site home.
    #[serde(default)]
    pub base: Option<String>,
}

/// Response body for `GET /api/v1/pagination`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationResponse {
    /// Selected layout: `short`, `start`, `middle` or `end`.
    pub mode: String,
    /// Page the strip was computed for.
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Ordered tokens, each tagged with `kind`.
    #[schema(value_type = Vec<Object>)]
    pub tokens: Vec<PaginationToken>,
}

impl From<PaginationResult> for PaginationResponse {
    fn from(result: PaginationResult) -> Self {
        Self {
            mode: result.mode().to_string(),
            current_page: result.page(),
            total_pages: result.total_pages(),
            tokens: result.into_tokens(),
        }
    }
}

/// Query parameters for `GET /api/v1/article-pages/html`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticlePagesQuery {
    /// Page being read. Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of pages in the article, at most 1000.
    pub pages: u64,
    /// False on teaser views. Defaults to true.
    #[serde(default = "default_more")]
    pub more: bool,
    /// Article permalink.
    pub permalink: String,
}

fn default_page() -> u64 {
    1
}

fn default_more() -> bool {
    true
}

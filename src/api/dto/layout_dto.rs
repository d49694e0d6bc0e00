//! Template lookup and document title DTOs.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::byline::Byline;

/// Query parameters for `GET /api/v1/templates/{kind}`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TemplateQuery {
    /// Specialised template name, e.g. `shop` for `header-shop.php`.
    #[serde(default)]
    pub name: Option<String>,
    /// Theme-relative directory. Defaults to `layout/`.
    #[serde(default)]
    pub path: Option<String>,
}

/// Response body for a resolved template.
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateResponse {
    /// `header` or `footer`.
    pub kind: String,
    /// Resolved file path.
    pub path: String,
    /// HTML comment naming the template relative to the theme directory.
    pub marker: String,
}

/// Query parameters for `GET /api/v1/title`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Title of the current view.
    #[serde(default)]
    pub title: String,
    /// Site name.
    #[serde(default)]
    pub site_name: String,
    /// Site tagline.
    #[serde(default)]
    pub description: String,
    /// Home or front page.
    #[serde(default)]
    pub is_home: bool,
    /// Archive page number.
    #[serde(default)]
    pub paged: u64,
    /// Page within a multi-page post.
    #[serde(default)]
    pub page: u64,
}

/// Query parameters for `GET /api/v1/posted-on`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostedOnQuery {
    /// RFC 3339 publication time, e.g. `2024-03-05T14:30:00%2B01:00`.
    pub published: DateTime<FixedOffset>,
    /// Author display name.
    pub author_name: String,
    /// Author archive URL.
    pub author_url: String,
}

impl From<PostedOnQuery> for Byline {
    fn from(query: PostedOnQuery) -> Self {
        Self {
            published: query.published,
            author_name: query.author_name,
            author_url: query.author_url,
        }
    }
}

/// Response body for `GET /api/v1/title`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TitleResponse {
    /// Composed document title.
    pub title: String,
}

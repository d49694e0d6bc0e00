//! Pagination handlers: token strip, archive markup, article pages.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ArticlePagesQuery, PaginationQuery, PaginationResponse};
use crate::app_state::AppState;
use crate::domain::article_pages::MAX_ARTICLE_PAGES;
use crate::error::{ErrorResponse, NavError};

/// `GET /pagination` — Compute the pagination strip as tokens.
///
/// # Errors
///
/// Returns [`NavError::Pagination`] when `total < 1`.
#[utoipa::path(
    get,
    path = "/api/v1/pagination",
    tag = "Pagination",
    summary = "Compute a pagination strip",
    description = "Returns the layout mode and the ordered tokens (arrows, pages, ellipses) for the given page, total and slot budget.",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pagination tokens", body = PaginationResponse),
        (status = 400, description = "Total pages below 1", body = ErrorResponse),
    )
)]
pub async fn pagination_tokens(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, NavError> {
    let result = state
        .nav_service
        .pagination(query.current, query.total, query.slots)?;
    Ok(Json(PaginationResponse::from(result)))
}

/// `GET /pagination/html` — Render the archive pagination strip.
///
/// # Errors
///
/// Returns [`NavError::Pagination`] when `total < 1`.
#[utoipa::path(
    get,
    path = "/api/v1/pagination/html",
    tag = "Pagination",
    summary = "Render archive pagination",
    description = "Renders Foundation pagination markup. Empty when there is only one page.",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pagination markup", body = String, content_type = "text/html"),
        (status = 400, description = "Total pages below 1", body = ErrorResponse),
    )
)]
pub async fn pagination_html(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, NavError> {
    let html = state.nav_service.archive_nav_html(
        query.current,
        query.total,
        query.slots,
        query.base.as_deref(),
    )?;
    Ok(Html(html))
}

/// `GET /article-pages/html` — Render a multi-page article's page list.
///
/// # Errors
///
/// Returns [`NavError::InvalidRequest`] when `pages` exceeds
/// [`MAX_ARTICLE_PAGES`].
#[utoipa::path(
    get,
    path = "/api/v1/article-pages/html",
    tag = "Pagination",
    summary = "Render article page links",
    description = "Renders the page list for a post split with <!--nextpage-->. Empty for single-page posts.",
    params(ArticlePagesQuery),
    responses(
        (status = 200, description = "Article page markup", body = String, content_type = "text/html"),
        (status = 400, description = "Too many pages", body = ErrorResponse),
    )
)]
pub async fn article_pages_html(
    State(state): State<AppState>,
    Query(query): Query<ArticlePagesQuery>,
) -> Result<impl IntoResponse, NavError> {
    if query.pages > MAX_ARTICLE_PAGES {
        return Err(NavError::InvalidRequest(format!(
            "pages must be at most {MAX_ARTICLE_PAGES}, got {}",
            query.pages
        )));
    }
    Ok(Html(state.nav_service.article_nav_html(
        query.page,
        query.pages,
        query.more,
        &query.permalink,
    )))
}

/// Pagination routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pagination", get(pagination_tokens))
        .route("/pagination/html", get(pagination_html))
        .route("/article-pages/html", get(article_pages_html))
}

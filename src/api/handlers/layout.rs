//! Layout handlers: template lookup, document title, post byline.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    PostedOnQuery, TemplateQuery, TemplateResponse, TitleQuery, TitleResponse,
};
use crate::app_state::AppState;
use crate::domain::templates::TemplateKind;
use crate::domain::title::TitleParts;
use crate::error::{ErrorResponse, NavError};

/// `GET /templates/{kind}` — Resolve a header or footer template.
///
/// # Errors
///
/// Returns [`NavError::InvalidRequest`] for an unknown kind and
/// [`NavError::Template`] when no file matches or the path leaves the theme.
#[utoipa::path(
    get,
    path = "/api/v1/templates/{kind}",
    tag = "Layout",
    summary = "Resolve a layout template",
    description = "Looks up `header[-name].php` or `footer[-name].php` under the theme directory.",
    params(
        ("kind" = String, Path, description = "`header` or `footer`"),
        TemplateQuery,
    ),
    responses(
        (status = 200, description = "Resolved template", body = TemplateResponse),
        (status = 400, description = "Unknown template kind", body = ErrorResponse),
        (status = 404, description = "Template not found", body = ErrorResponse),
    )
)]
pub async fn locate_template(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<TemplateQuery>,
) -> Result<impl IntoResponse, NavError> {
    let template_kind = match kind.as_str() {
        "header" => TemplateKind::Header,
        "footer" => TemplateKind::Footer,
        other => {
            return Err(NavError::InvalidRequest(format!(
                "unknown template kind: {other}"
            )));
        }
    };

    let path = state.nav_service.locate_template(
        template_kind,
        query.name.as_deref(),
        query.path.as_deref(),
    )?;

    Ok(Json(TemplateResponse {
        kind,
        marker: state.nav_service.template_marker(&path),
        path: path.display().to_string(),
    }))
}

/// `GET /title` — Compose the document title.
#[utoipa::path(
    get,
    path = "/api/v1/title",
    tag = "Layout",
    summary = "Compose a document title",
    params(TitleQuery),
    responses(
        (status = 200, description = "Document title", body = TitleResponse),
    )
)]
pub async fn page_title(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> impl IntoResponse {
    let parts = TitleParts {
        title: &query.title,
        site_name: &query.site_name,
        description: &query.description,
        is_home: query.is_home,
        paged: query.paged,
        page: query.page,
    };
    Json(TitleResponse {
        title: state.nav_service.page_title(&parts),
    })
}

/// `GET /posted-on` — Render a post's byline.
#[utoipa::path(
    get,
    path = "/api/v1/posted-on",
    tag = "Layout",
    summary = "Render a post byline",
    description = "Renders \"Posted on <date> by <author>\" with a `<time>` element and an author link.",
    params(PostedOnQuery),
    responses(
        (status = 200, description = "Byline markup", body = String, content_type = "text/html"),
        (status = 400, description = "Missing or malformed parameters"),
    )
)]
pub async fn posted_on(
    State(state): State<AppState>,
    Query(query): Query<PostedOnQuery>,
) -> impl IntoResponse {
    Html(state.nav_service.posted_on_html(&query.into()))
}

/// Layout routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/templates/{kind}", get(locate_template))
        .route("/title", get(page_title))
        .route("/posted-on", get(posted_on))
}

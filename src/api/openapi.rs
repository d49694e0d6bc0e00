//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{
    BreadcrumbRequest, BreadcrumbResponse, EditorSettingsResponse, PaginationResponse,
    TemplateResponse, TitleResponse,
};
use crate::api::handlers::{breadcrumbs, editor, layout, pagination, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "nouveau-nav", description = "Pagination, breadcrumb and editor helpers for the Nouveau theme"),
    paths(
        system::health_handler,
        system::nav_defaults_handler,
        pagination::pagination_tokens,
        pagination::pagination_html,
        pagination::article_pages_html,
        breadcrumbs::breadcrumbs_json,
        breadcrumbs::breadcrumbs_html,
        editor::editor_settings,
        layout::locate_template,
        layout::page_title,
        layout::posted_on,
    ),
    components(schemas(
        ErrorResponse,
        ErrorBody,
        PaginationResponse,
        BreadcrumbRequest,
        BreadcrumbResponse,
        EditorSettingsResponse,
        TemplateResponse,
        TitleResponse,
        system::HealthResponse,
        system::NavDefaults,
    )),
    tags(
        (name = "System", description = "Health and configuration"),
        (name = "Pagination", description = "Archive and article pagination"),
        (name = "Breadcrumbs", description = "Breadcrumb trails"),
        (name = "Editor", description = "TinyMCE customization"),
        (name = "Layout", description = "Templates, document titles and post bylines"),
    )
)]
pub struct ApiDoc;

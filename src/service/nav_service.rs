//! Navigation service: applies configured defaults and renders.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::NavConfig;
use crate::domain::breadcrumb::{BreadcrumbContext, BreadcrumbOptions, BreadcrumbTrail};
use crate::domain::byline::Byline;
use crate::domain::editor::{self, StyleFormat};
use crate::domain::pagination::{PaginationRequest, PaginationResult};
use crate::domain::templates::{self, TemplateKind};
use crate::domain::title::{self, TitleParts};
use crate::error::NavError;
use crate::render::{
    ArticleNavOptions, BreadcrumbMarkup, NavOptions, PermalinkPages, render_archive_nav,
    render_article_nav, render_breadcrumbs, render_posted_on,
};

/// Editor configuration handed to TinyMCE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSettings {
    /// Comma-separated content stylesheets.
    pub content_css: String,
    /// Second toolbar row.
    pub toolbar2: Vec<String>,
    /// Init settings with the style dropdown entries filled in.
    pub settings: Map<String, Value>,
}

/// Stateless coordinator over the domain and render layers.
///
/// Holds only configuration, so it is shared behind an `Arc` without
/// locking.
#[derive(Debug, Clone)]
pub struct NavService {
    nav_options: NavOptions,
    breadcrumb_options: BreadcrumbOptions,
    theme_uri: String,
    theme_dir: PathBuf,
    style_formats: Vec<StyleFormat>,
    simple_styles: Vec<(String, String)>,
}

impl NavService {
    /// Creates a service from configuration.
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self {
            nav_options: NavOptions {
                id: config.nav_id.clone(),
                classes: config.nav_classes.clone(),
                page_limit: config.page_limit,
                prev_text: config.prev_text.clone(),
                next_text: config.next_text.clone(),
            },
            breadcrumb_options: BreadcrumbOptions {
                use_prefix: config.breadcrumb_prefix,
                blog_title: config.blog_title.clone(),
                home_url: config.home_url.clone(),
                ..BreadcrumbOptions::default()
            },
            theme_uri: config.theme_uri.clone(),
            theme_dir: config.theme_dir.clone(),
            style_formats: editor::default_style_formats(),
            simple_styles: editor::default_simple_styles(),
        }
    }

    /// Archive navigation options in effect.
    #[must_use]
    pub fn nav_options(&self) -> &NavOptions {
        &self.nav_options
    }

    /// Computes the pagination strip; `slots` falls back to the configured
    /// page limit.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Pagination`] when `total < 1`.
    pub fn pagination(
        &self,
        current: i64,
        total: i64,
        slots: Option<i64>,
    ) -> Result<PaginationResult, NavError> {
        let slots = slots.unwrap_or(self.nav_options.page_limit);
        let request = PaginationRequest::new(current, total, slots)?;
        let result = request.compute();
        tracing::debug!(
            current,
            total,
            slots = request.effective_slots(),
            mode = %result.mode(),
            "pagination computed"
        );
        Ok(result)
    }

    /// Renders the archive pagination strip with links under `base`
    /// (the site home when absent).
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Pagination`] when `total < 1`.
    pub fn archive_nav_html(
        &self,
        current: i64,
        total: i64,
        slots: Option<i64>,
        base: Option<&str>,
    ) -> Result<String, NavError> {
        let result = self.pagination(current, total, slots)?;
        let links = PermalinkPages::new(base.unwrap_or(&self.breadcrumb_options.home_url));
        Ok(render_archive_nav(&result, &self.nav_options, &links))
    }

    /// Renders a multi-page article's page list.
    #[must_use]
    pub fn article_nav_html(&self, page: u64, num_pages: u64, more: bool, permalink: &str) -> String {
        tracing::debug!(page, num_pages, more, "rendering article pages");
        render_article_nav(
            page,
            num_pages,
            more,
            permalink,
            &ArticleNavOptions::default(),
        )
    }

    /// Breadcrumb options, with the per-request overrides applied.
    #[must_use]
    pub fn breadcrumb_options(
        &self,
        use_prefix: Option<bool>,
        blog_title: Option<String>,
    ) -> BreadcrumbOptions {
        let mut options = self.breadcrumb_options.clone();
        if let Some(use_prefix) = use_prefix {
            options.use_prefix = use_prefix;
        }
        if let Some(blog_title) = blog_title {
            options.blog_title = blog_title;
        }
        options
    }

    /// Builds the breadcrumb trail for `context`.
    #[must_use]
    pub fn breadcrumbs(
        &self,
        context: &BreadcrumbContext,
        options: &BreadcrumbOptions,
    ) -> BreadcrumbTrail {
        let trail = crate::domain::breadcrumb::breadcrumb_trail(context, options);
        tracing::debug!(crumbs = trail.len(), "breadcrumb trail built");
        trail
    }

    /// Renders the breadcrumb trail for `context`.
    #[must_use]
    pub fn breadcrumbs_html(&self, context: &BreadcrumbContext, options: &BreadcrumbOptions) -> String {
        render_breadcrumbs(
            &self.breadcrumbs(context, options),
            &BreadcrumbMarkup::default(),
        )
    }

    /// Produces the TinyMCE configuration: stylesheet list, toolbar row and
    /// init settings with both style dropdown variants filled in.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Editor`] if the style rules cannot be encoded.
    pub fn editor_settings(
        &self,
        content_css: &str,
        toolbar2: Vec<String>,
        mut settings: Map<String, Value>,
    ) -> Result<EditorSettings, NavError> {
        editor::apply_simple_styles(&mut settings, &self.simple_styles);
        editor::apply_style_formats(&mut settings, &self.style_formats)?;
        Ok(EditorSettings {
            content_css: editor::append_stylesheet(content_css, &self.theme_uri),
            toolbar2: editor::add_style_select(toolbar2),
            settings,
        })
    }

    /// Resolves a header or footer template under the theme directory.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Template`] when no candidate exists or a candidate
    /// is not theme-relative.
    pub fn locate_template(
        &self,
        kind: TemplateKind,
        name: Option<&str>,
        path: Option<&str>,
    ) -> Result<PathBuf, NavError> {
        let candidates = templates::template_candidates(
            kind,
            name,
            path.unwrap_or(templates::DEFAULT_TEMPLATE_PATH),
        );
        let found = templates::locate_template(&self.theme_dir, &candidates).inspect_err(|err| {
            tracing::warn!(%kind, error = %err, "template lookup failed");
        })?;
        Ok(found)
    }

    /// Marker comment naming a resolved template relative to the theme directory.
    #[must_use]
    pub fn template_marker(&self, template: &Path) -> String {
        templates::file_marker(
            &template.display().to_string(),
            &self.theme_dir.display().to_string(),
        )
    }

    /// Renders a post's "Posted on ... by ..." byline.
    #[must_use]
    pub fn posted_on_html(&self, byline: &Byline) -> String {
        tracing::debug!(author = %byline.author_name, "rendering byline");
        render_posted_on(byline)
    }

    /// Composes the document title.
    #[must_use]
    pub fn page_title(&self, parts: &TitleParts<'_>) -> String {
        title::page_title(parts)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::pagination::PaginationMode;
    use crate::domain::templates::TemplateError;

    fn service() -> NavService {
        NavService::new(&NavConfig::default())
    }

    #[test]
    fn pagination_uses_configured_limit() {
        let Ok(result) = service().pagination(40, 80, None) else {
            panic!("valid request rejected");
        };
        assert_eq!(result.mode(), PaginationMode::Middle);
        assert_eq!(result.page_numbers().count(), 11);
    }

    #[test]
    fn pagination_rejects_empty_sets() {
        let result = service().pagination(1, 0, Some(9));
        assert!(matches!(result, Err(NavError::Pagination(_))));
    }

    #[test]
    fn archive_nav_defaults_to_home_url() {
        let Ok(html) = service().archive_nav_html(1, 3, None, None) else {
            panic!("render failed");
        };
        assert!(html.contains(r#"<a href="/page/2/">2</a>"#));
        let Ok(html) = service().archive_nav_html(1, 3, None, Some("/news")) else {
            panic!("render failed");
        };
        assert!(html.contains(r#"<a href="/news/page/2/">2</a>"#));
    }

    #[test]
    fn breadcrumb_overrides_apply() {
        let svc = service();
        let options = svc.breadcrumb_options(Some(false), Some("Journal".to_string()));
        assert!(!options.use_prefix);
        assert_eq!(options.blog_title, "Journal");
        assert_eq!(options.home_url, "/");
    }

    #[test]
    fn editor_settings_fill_both_dropdowns() {
        let Ok(settings) = service().editor_settings("", vec!["bold".to_string()], Map::new())
        else {
            panic!("editor settings failed");
        };
        assert_eq!(
            settings.content_css,
            "/wp-content/themes/nv/assets/css/editor.css"
        );
        assert_eq!(settings.toolbar2, vec!["styleselect", "bold"]);
        assert!(settings.settings.contains_key(editor::STYLE_FORMATS_KEY));
        assert!(settings.settings.contains_key(editor::SIMPLE_STYLES_KEY));
    }

    #[test]
    fn missing_template_maps_to_not_found() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let config = NavConfig {
            theme_dir: dir.path().to_path_buf(),
            ..NavConfig::default()
        };
        let result = NavService::new(&config).locate_template(TemplateKind::Header, None, None);
        assert!(matches!(result, Err(NavError::Template(TemplateError::NotFound(_)))));
    }
}

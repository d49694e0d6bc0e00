//! HTML rendering on top of the domain layer.
//!
//! Markup follows Foundation's pagination and breadcrumb components.

pub mod archive_nav;
pub mod article_nav;
pub mod breadcrumbs;
pub mod html;
pub mod posted_on;

pub use archive_nav::{NavOptions, PageLinks, PermalinkPages, render_archive_nav};
pub use article_nav::{ArticleNavOptions, render_article_nav};
pub use breadcrumbs::{BreadcrumbMarkup, render_breadcrumbs};
pub use posted_on::render_posted_on;

//! Domain layer: pure navigation, editor and template helpers.
//!
//! Nothing in here performs I/O except [`templates::locate_template`], and
//! nothing reads ambient state: every input arrives as an argument.

pub mod article_pages;
pub mod breadcrumb;
pub mod byline;
pub mod collections;
pub mod editor;
pub mod pagination;
pub mod templates;
pub mod title;

pub use breadcrumb::{BreadcrumbContext, BreadcrumbOptions, BreadcrumbTrail};
pub use pagination::{
    PaginationError, PaginationMode, PaginationRequest, PaginationResult, PaginationToken,
};

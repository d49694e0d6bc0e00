//! Foundation-style breadcrumb markup.

use crate::domain::breadcrumb::{BreadcrumbTrail, CrumbState};

use super::html::{escape_attr, escape_html};

/// Wrapping markup for [`render_breadcrumbs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbMarkup {
    /// Opening markup.
    pub before: String,
    /// Closing markup.
    pub after: String,
}

impl Default for BreadcrumbMarkup {
    fn default() -> Self {
        Self {
            before: r#"<ul class="breadcrumbs">"#.to_string(),
            after: "</ul>".to_string(),
        }
    }
}

/// Renders a trail as a list of links.
#[must_use]
pub fn render_breadcrumbs(trail: &BreadcrumbTrail, markup: &BreadcrumbMarkup) -> String {
    let mut out = markup.before.clone();
    for crumb in trail.crumbs() {
        let class = match crumb.state {
            CrumbState::Link => "",
            CrumbState::Current => r#" class="current""#,
            CrumbState::Unavailable => r#" class="unavailable""#,
        };
        out.push_str(&format!(
            r#"<li{class}><a href="{}">{}</a></li>"#,
            escape_attr(&crumb.href),
            escape_html(&crumb.label)
        ));
    }
    out.push_str(&markup.after);
    out
}

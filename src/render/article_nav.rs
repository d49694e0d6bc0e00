//! Markup for the page list of a multi-page article.

use crate::domain::article_pages::{article_pages, is_multipage};

use super::html::escape_attr;

/// Wrapping markup for [`render_article_nav`].
///
/// In `page_before`, `%` marks where the active class goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleNavOptions {
    /// Opening markup.
    pub before: String,
    /// Markup before each link; `%` is replaced with the active class.
    pub page_before: String,
    /// Markup after each link.
    pub page_after: String,
    /// Inside the link, before the number.
    pub link_before: String,
    /// Inside the link, after the number.
    pub link_after: String,
    /// Closing markup.
    pub after: String,
}

impl Default for ArticleNavOptions {
    fn default() -> Self {
        Self {
            before: r#"<dl class="page-link sub-nav"><dt>Pages:</dt>"#.to_string(),
            page_before: "<dd%>".to_string(),
            page_after: "</dd>".to_string(),
            link_before: String::new(),
            link_after: String::new(),
            after: "</dl>".to_string(),
        }
    }
}

/// URL of page `number` of the article at `permalink`.
#[must_use]
pub fn article_page_link(permalink: &str, number: u64) -> String {
    if number <= 1 {
        return permalink.to_string();
    }
    let sep = if permalink.ends_with('/') { "" } else { "/" };
    format!("{permalink}{sep}{number}/")
}

/// Renders the page list, or nothing for a single-page article.
#[must_use]
pub fn render_article_nav(
    page: u64,
    num_pages: u64,
    more: bool,
    permalink: &str,
    options: &ArticleNavOptions,
) -> String {
    if !is_multipage(num_pages) {
        return String::new();
    }

    let mut out = options.before.clone();
    for link in article_pages(page, num_pages, more) {
        let marker = if link.current { r#" class="active" "# } else { "" };
        out.push(' ');
        out.push_str(&options.page_before.replace('%', marker));
        out.push_str(r#"<a href=""#);
        out.push_str(&escape_attr(&article_page_link(permalink, link.number)));
        out.push_str(r#"">"#);
        out.push_str(&options.link_before);
        out.push_str(&link.number.to_string());
        out.push_str(&options.link_after);
        out.push_str("</a>");
        out.push_str(&options.page_after);
    }
    out.push_str(&options.after);
    out
}

//! Foundation-style markup for the archive pagination strip.

use crate::domain::pagination::{PaginationResult, PaginationToken};

use super::html::{encode_bare_ampersands, escape_attr};

/// Builds the URLs behind each pagination link.
pub trait PageLinks {
    /// URL of page `number` (one-based).
    fn page(&self, number: u64) -> String;

    /// URL behind the "previous" arrow.
    fn previous(&self, current: u64) -> String {
        self.page(current.saturating_sub(1).max(1))
    }

    /// URL behind the "next" arrow.
    fn next(&self, current: u64, total: u64) -> String {
        self.page(current.saturating_add(1).min(total.max(1)))
    }
}

/// Pretty-permalink links: `base` for page 1, `{base}page/{n}/` after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermalinkPages {
    base: String,
}

impl PermalinkPages {
    /// Creates links rooted at `base`; a trailing slash is added if missing.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }
}

impl PageLinks for PermalinkPages {
    fn page(&self, number: u64) -> String {
        if number <= 1 {
            self.base.clone()
        } else {
            format!("{}page/{number}/", self.base)
        }
    }
}

/// Presentation options for [`render_archive_nav`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOptions {
    /// `id` attribute of the `<nav>` element.
    pub id: String,
    /// Classes on the `<nav>` element.
    pub classes: Vec<String>,
    /// Slot budget passed to the calculator.
    pub page_limit: i64,
    /// Markup inside the "previous" link.
    pub prev_text: String,
    /// Markup inside the "next" link.
    pub next_text: String,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            id: "nav-generic".to_string(),
            classes: vec!["pagenav".to_string(), "archive".to_string()],
            page_limit: 15,
            prev_text: "&laquo;".to_string(),
            next_text: "&raquo;".to_string(),
        }
    }
}

/// Renders the pagination strip.
///
/// A single-page result renders nothing: there is nowhere to navigate to.
#[must_use]
pub fn render_archive_nav(
    result: &PaginationResult,
    options: &NavOptions,
    links: &impl PageLinks,
) -> String {
    let page = result.page();
    let total = result.total_pages();
    if total <= 1 {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        r#"<nav id="{}" class="{}"><ul class="pagination">"#,
        escape_attr(&options.id),
        escape_attr(&options.classes.join(" "))
    ));

    for token in result.tokens() {
        match token {
            PaginationToken::ArrowPrev { enabled } => {
                push_arrow(
                    &mut out,
                    *enabled,
                    &links.previous(page),
                    &options.prev_text,
                );
            }
            PaginationToken::ArrowNext { enabled } => {
                push_arrow(
                    &mut out,
                    *enabled,
                    &links.next(page, total),
                    &options.next_text,
                );
            }
            PaginationToken::Page { number, current } => {
                let class = if *current { " current " } else { "" };
                out.push_str(&format!(
                    r#"<li class="{class}"><a href="{}">{number}</a></li>"#,
                    escape_attr(&links.page(*number))
                ));
            }
            PaginationToken::Ellipsis => {
                out.push_str(r#"<li class="unavailable"><a href="">&hellip;</a></li>"#);
            }
        }
    }

    out.push_str("</ul></nav>");
    out
}

fn push_arrow(out: &mut String, enabled: bool, href: &str, label: &str) {
    let class = if enabled { "arrow" } else { "arrow unavailable" };
    out.push_str(&format!(
        r#"<li class="{class}"><a href="{}">{}</a></li>"#,
        escape_attr(href),
        encode_bare_ampersands(label)
    ));
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::pagination::compute;

    fn render(current: i64, total: i64, slots: i64) -> String {
        let Ok(result) = compute(current, total, slots) else {
            panic!("valid request rejected");
        };
        render_archive_nav(&result, &NavOptions::default(), &PermalinkPages::new("/blog"))
    }

    #[test]
    fn permalink_pages() {
        let links = PermalinkPages::new("https://example.com/news/");
        assert_eq!(links.page(1), "https://example.com/news/");
        assert_eq!(links.page(4), "https://example.com/news/page/4/");
        assert_eq!(links.previous(1), "https://example.com/news/");
        assert_eq!(links.next(9, 9), "https://example.com/news/page/9/");
        assert_eq!(links.next(2, 9), "https://example.com/news/page/3/");
    }

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(render(1, 1, 9), "");
    }

    #[test]
    fn short_strip_markup() {
        let html = render(2, 3, 9);
        assert_eq!(
            html,
            concat!(
                r#"<nav id="nav-generic" class="pagenav archive"><ul class="pagination">"#,
                r#"<li class="arrow"><a href="/blog/">&laquo;</a></li>"#,
                r#"<li class=""><a href="/blog/">1</a></li>"#,
                r#"<li class=" current "><a href="/blog/page/2/">2</a></li>"#,
                r#"<li class=""><a href="/blog/page/3/">3</a></li>"#,
                r#"<li class="arrow"><a href="/blog/page/3/">&raquo;</a></li>"#,
                "</ul></nav>"
            )
        );
    }

    #[test]
    fn arrows_disable_at_the_ends() {
        let first = render(1, 30, 9);
        assert!(first.contains(r#"<li class="arrow unavailable"><a href="/blog/">&laquo;</a></li>"#));
        let last = render(30, 30, 9);
        assert!(last.contains(
            r#"<li class="arrow unavailable"><a href="/blog/page/30/">&raquo;</a></li>"#
        ));
    }

    #[test]
    fn ellipses_render_as_unavailable_items() {
        let html = render(50, 100, 9);
        assert_eq!(
            html.matches(r#"<li class="unavailable"><a href="">&hellip;</a></li>"#)
                .count(),
            2
        );
        assert!(html.contains(r#"<a href="/blog/page/100/">100</a>"#));
    }

    #[test]
    fn options_are_escaped() {
        let Ok(result) = compute(1, 3, 9) else {
            panic!("valid request rejected");
        };
        let options = NavOptions {
            id: "nav\"x".to_string(),
            classes: vec!["a".to_string(), "<b>".to_string()],
            prev_text: "Q&A".to_string(),
            ..NavOptions::default()
        };
        let html = render_archive_nav(&result, &options, &PermalinkPages::new("/"));
        assert!(html.starts_with(r#"<nav id="nav&quot;x" class="a &lt;b&gt;">"#));
        assert!(html.contains(">Q&#038;A</a>"));
    }
}

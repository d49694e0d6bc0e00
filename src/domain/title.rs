//! Document `<title>` composition.

/// Inputs for [`page_title`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleParts<'a> {
    /// Title of the current view; empty on the front page.
    pub title: &'a str,
    /// Site name.
    pub site_name: &'a str,
    /// Site tagline.
    pub description: &'a str,
    /// Whether this is the blog home or the static front page.
    pub is_home: bool,
    /// Archive page number (0 when unset).
    pub paged: u64,
    /// Page number within a multi-page post (0 when unset).
    pub page: u64,
}

/// Joins the title segments with ` | `.
///
/// The tagline is only added on the home page, and a `Page N` suffix only
/// when either page counter reaches 2.
#[must_use]
pub fn page_title(parts: &TitleParts<'_>) -> String {
    let mut title = String::new();
    if !parts.title.is_empty() {
        title.push_str(parts.title);
        title.push_str(" | ");
    }
    title.push_str(parts.site_name);

    if parts.is_home && !parts.description.is_empty() {
        title.push_str(" | ");
        title.push_str(parts.description);
    }

    let page = parts.paged.max(parts.page);
    if page >= 2 {
        title.push_str(&format!(" | Page {page}"));
    }
    title
}

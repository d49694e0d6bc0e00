//! Page list for posts split into several pages with `<!--nextpage-->`.

use serde::Serialize;

/// Most pages a split article may have. A post this long is malformed input.
pub const MAX_ARTICLE_PAGES: u64 = 1_000;

/// One entry in a multi-page article's page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticlePageLink {
    /// One-based page number.
    pub number: u64,
    /// Whether the reader is on this page.
    pub current: bool,
}

/// Lists every page of a multi-page article.
///
/// `more` is false on archive views showing only the teaser; in that case
/// page 1 is never flagged as current, so the first link stays clickable.
#[must_use]
pub fn article_pages(page: u64, num_pages: u64, more: bool) -> Vec<ArticlePageLink> {
    (1..=num_pages)
        .map(|number| ArticlePageLink {
            number,
            current: number == page && !(!more && page == 1),
        })
        .collect()
}

/// Whether the article has more than one page and needs navigation at all.
#[must_use]
pub const fn is_multipage(num_pages: u64) -> bool {
    num_pages > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_current_page() {
        let pages = article_pages(2, 3, true);
        let flags: Vec<bool> = pages.iter().map(|p| p.current).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(pages.last().map(|p| p.number), Some(3));
    }

    #[test]
    fn teaser_view_does_not_flag_first_page() {
        let pages = article_pages(1, 3, false);
        assert!(pages.iter().all(|p| !p.current));
    }

    #[test]
    fn teaser_flag_only_affects_page_one() {
        let pages = article_pages(3, 3, false);
        assert_eq!(pages.iter().filter(|p| p.current).count(), 1);
    }

    #[test]
    fn multipage_threshold() {
        assert!(!is_multipage(0));
        assert!(!is_multipage(1));
        assert!(is_multipage(2));
        assert!(article_pages(1, 0, true).is_empty());
    }
}

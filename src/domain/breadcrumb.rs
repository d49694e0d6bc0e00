//! Breadcrumb trail construction.
//!
//! The caller describes what kind of view is being rendered through a
//! [`BreadcrumbContext`]; [`breadcrumb_trail`] turns it into an ordered list
//! of [`Crumb`]s that always starts at the site home.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a crumb is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrumbState {
    /// Ordinary link.
    Link,
    /// The view being displayed.
    Current,
    /// A label without a destination (e.g. a taxonomy name).
    Unavailable,
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Visible text.
    pub label: String,
    /// Link target; empty for unavailable crumbs.
    pub href: String,
    /// Presentation state.
    pub state: CrumbState,
}

impl Crumb {
    fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            state: CrumbState::Link,
        }
    }

    fn current(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            state: CrumbState::Current,
        }
    }

    fn unavailable(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: String::new(),
            state: CrumbState::Unavailable,
        }
    }
}

/// A titled link, used for a singular item's ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrumbLink {
    /// Ancestor title.
    pub title: String,
    /// Ancestor permalink.
    pub url: String,
}

/// The kind of view a trail is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BreadcrumbContext {
    /// A single post, page or custom post type item.
    Singular {
        /// Post type slug; `post` selects the blog title as archive label.
        post_type: String,
        /// Pages never get an archive prefix.
        #[serde(default)]
        is_page: bool,
        /// Post type archive URL; the home URL is used when absent.
        #[serde(default)]
        archive_url: Option<String>,
        /// Post type display label, used for non-`post` types.
        #[serde(default)]
        post_type_label: Option<String>,
        /// Parent items, outermost first.
        #[serde(default)]
        ancestors: Vec<CrumbLink>,
        /// Item title.
        title: String,
        /// Item permalink.
        permalink: String,
    },
    /// A taxonomy term archive.
    TaxonomyArchive {
        /// Taxonomy display label (e.g. `Categories`).
        taxonomy_label: String,
        /// Term name.
        term_name: String,
        /// Term archive URL.
        url: String,
    },
    /// A post type archive.
    PostTypeArchive {
        /// Post type display label.
        label: String,
        /// Archive URL.
        url: String,
    },
    /// Search results.
    Search {
        /// Decoded search terms.
        query: String,
    },
    /// Yearly date archive.
    Year {
        /// Any date inside the archive period.
        date: NaiveDate,
        /// Raw `m` query argument.
        m: String,
    },
    /// Monthly date archive.
    Month {
        /// Any date inside the archive period.
        date: NaiveDate,
        /// Raw `m` query argument.
        m: String,
    },
    /// Daily date archive.
    Day {
        /// The archive day.
        date: NaiveDate,
        /// Raw `m` query argument.
        m: String,
    },
    /// Anything else: the trail holds only the home crumb.
    Other,
}

/// Trail-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbOptions {
    /// Add the post type archive before singular non-page items.
    pub use_prefix: bool,
    /// Archive label for ordinary blog posts.
    pub blog_title: String,
    /// Label of the first crumb.
    pub home_label: String,
    /// Target of the first crumb.
    pub home_url: String,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            use_prefix: true,
            blog_title: "Blog".to_string(),
            home_label: "Home".to_string(),
            home_url: "/".to_string(),
        }
    }
}

/// Ordered crumbs, home first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail(Vec<Crumb>);

impl BreadcrumbTrail {
    /// All crumbs in display order.
    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.0
    }

    /// Consumes the trail, returning its crumbs.
    #[must_use]
    pub fn into_crumbs(self) -> Vec<Crumb> {
        self.0
    }

    /// The crumb marked current, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Crumb> {
        self.0.iter().find(|c| c.state == CrumbState::Current)
    }

    /// Number of crumbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: every trail has a home crumb.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the trail for `context`.
#[must_use]
pub fn breadcrumb_trail(context: &BreadcrumbContext, options: &BreadcrumbOptions) -> BreadcrumbTrail {
    let mut crumbs = vec![Crumb::link(&options.home_label, &options.home_url)];

    match context {
        BreadcrumbContext::Singular {
            post_type,
            is_page,
            archive_url,
            post_type_label,
            ancestors,
            title,
            permalink,
        } => {
            if options.use_prefix && !is_page {
                let href = archive_url.as_deref().unwrap_or(&options.home_url);
                let label = if post_type == "post" {
                    options.blog_title.as_str()
                } else {
                    post_type_label.as_deref().unwrap_or(post_type)
                };
                crumbs.push(Crumb::link(label, href));
            }
            crumbs.extend(
                ancestors
                    .iter()
                    .map(|ancestor| Crumb::link(&ancestor.title, &ancestor.url)),
            );
            crumbs.push(Crumb::current(title, permalink));
        }
        BreadcrumbContext::TaxonomyArchive {
            taxonomy_label,
            term_name,
            url,
        } => {
            crumbs.push(Crumb::unavailable(taxonomy_label));
            crumbs.push(Crumb::current(term_name, url));
        }
        BreadcrumbContext::PostTypeArchive { label, url } => {
            crumbs.push(Crumb::current(label, url));
        }
        BreadcrumbContext::Search { query } => {
            let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
            crumbs.push(Crumb::current(
                format!("Search: {query}"),
                format!("/?s={encoded}"),
            ));
        }
        BreadcrumbContext::Year { date, m } => {
            crumbs.push(date_crumb("Year", date.format("%Y"), m));
        }
        BreadcrumbContext::Month { date, m } => {
            crumbs.push(date_crumb("Month", date.format("%B %Y"), m));
        }
        BreadcrumbContext::Day { date, m } => {
            crumbs.push(date_crumb("Date", date.format("%B %d, %Y"), m));
        }
        BreadcrumbContext::Other => {}
    }

    BreadcrumbTrail(crumbs)
}

fn date_crumb(prefix: &str, formatted: impl std::fmt::Display, m: &str) -> Crumb {
    Crumb::current(format!("{prefix}: {formatted}"), format!("/?m={m}"))
}

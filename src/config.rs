//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level service configuration.
///
/// Loaded once at startup via [`NavConfig::from_env`].
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Default slot budget for archive pagination.
    pub page_limit: i64,

    /// `id` attribute of the archive `<nav>` element.
    pub nav_id: String,

    /// Classes on the archive `<nav>` element.
    pub nav_classes: Vec<String>,

    /// Markup inside the "previous" arrow.
    pub prev_text: String,

    /// Markup inside the "next" arrow.
    pub next_text: String,

    /// Site home URL; first breadcrumb and default pagination base.
    pub home_url: String,

    /// Archive label for blog posts in breadcrumbs.
    pub blog_title: String,

    /// Whether singular breadcrumbs get a post type archive prefix.
    pub breadcrumb_prefix: bool,

    /// Public URI of the theme, used for the editor stylesheet.
    pub theme_uri: String,

    /// Theme directory on disk, searched for layout templates.
    pub theme_dir: PathBuf,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl NavConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` cannot be parsed.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()?;

        let nav_classes = lookup("NAV_CLASSES")
            .unwrap_or_else(|| "pagenav archive".to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Ok(Self {
            listen_addr,
            page_limit: parse_value(lookup("NAV_PAGE_LIMIT"), 15),
            nav_id: lookup("NAV_ID").unwrap_or_else(|| "nav-generic".to_string()),
            nav_classes,
            prev_text: lookup("NAV_PREV_TEXT").unwrap_or_else(|| "&laquo;".to_string()),
            next_text: lookup("NAV_NEXT_TEXT").unwrap_or_else(|| "&raquo;".to_string()),
            home_url: lookup("SITE_HOME_URL").unwrap_or_else(|| "/".to_string()),
            blog_title: lookup("BLOG_TITLE").unwrap_or_else(|| "Blog".to_string()),
            breadcrumb_prefix: parse_bool(lookup("BREADCRUMB_USE_PREFIX"), true),
            theme_uri: lookup("THEME_URI").unwrap_or_else(|| "/wp-content/themes/nv".to_string()),
            theme_dir: lookup("THEME_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from),
            request_timeout_secs: parse_value(lookup("REQUEST_TIMEOUT_SECS"), 10),
        })
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            page_limit: 15,
            nav_id: "nav-generic".to_string(),
            nav_classes: vec!["pagenav".to_string(), "archive".to_string()],
            prev_text: "&laquo;".to_string(),
            next_text: "&raquo;".to_string(),
            home_url: "/".to_string(),
            blog_title: "Blog".to_string(),
            breadcrumb_prefix: true,
            theme_uri: "/wp-content/themes/nv".to_string(),
            theme_dir: PathBuf::from("."),
            request_timeout_secs: 10,
        }
    }
}

/// Parses a raw value as `T`, returning `default` on missing or invalid
/// values.
fn parse_value<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Parses a raw value as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_bool(raw: Option<String>, default: bool) -> bool {
    match raw.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}

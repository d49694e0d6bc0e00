//! Header and footer template lookup.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Directory searched when no path is given.
pub const DEFAULT_TEMPLATE_PATH: &str = "layout/";

/// Errors raised by template lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// None of the candidate files exist under the theme directory.
    #[error("the specified template ({0}) was not found")]
    NotFound(String),
    /// A candidate is absolute or climbs out of the theme directory.
    #[error("template path escapes the theme directory: {0}")]
    OutsideTheme(String),
}

/// Which layout template to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `header.php` / `header-{name}.php`.
    Header,
    /// `footer.php` / `footer-{name}.php`.
    Footer,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Footer => f.write_str("footer"),
        }
    }
}

/// Theme-relative file names to try, most specific first.
///
/// `path` always gets exactly one trailing slash.
#[must_use]
pub fn template_candidates(kind: TemplateKind, name: Option<&str>, path: &str) -> Vec<String> {
    let path = format!("{}/", path.trim_end_matches(['/', '\\']));
    match name {
        Some(name) => vec![format!("{path}{kind}-{name}.php")],
        None => vec![format!("{path}{kind}.php")],
    }
}

/// Whether `candidate` names a file below the directory it is joined to.
///
/// Only plain and `.` components are accepted; root, prefix and `..`
/// components are not.
#[must_use]
pub fn is_theme_relative(candidate: &str) -> bool {
    Path::new(candidate)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Returns the first candidate that exists under `theme_dir`.
///
/// # Errors
///
/// Returns [`TemplateError::OutsideTheme`] if any candidate is not
/// theme-relative, and [`TemplateError::NotFound`] naming the first
/// candidate when nothing matches.
pub fn locate_template(theme_dir: &Path, candidates: &[String]) -> Result<PathBuf, TemplateError> {
    if let Some(escaping) = candidates.iter().find(|c| !is_theme_relative(c)) {
        return Err(TemplateError::OutsideTheme(escaping.clone()));
    }
    candidates
        .iter()
        .map(|candidate| theme_dir.join(candidate))
        .find(|path| path.is_file())
        .ok_or_else(|| TemplateError::NotFound(candidates.first().cloned().unwrap_or_default()))
}

/// HTML comment naming the template a fragment came from.
///
/// The site root prefix `abspath` is stripped so only the site-relative path
/// is shown.
#[must_use]
pub fn file_marker(file: &str, abspath: &str) -> String {
    let relative = if abspath.is_empty() {
        file
    } else {
        file.strip_prefix(abspath).unwrap_or(file)
    };
    format!(
        "\n\n<!-- Template file: /{} -->\n\n",
        relative.trim_start_matches('/')
    )
}

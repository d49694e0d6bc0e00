//! Post byline: when a post was published and by whom.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Visible date format, e.g. `March 5, 2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Publication date and author of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Byline {
    /// Publication time with the site's UTC offset.
    pub published: DateTime<FixedOffset>,
    /// Author display name.
    pub author_name: String,
    /// Author archive URL.
    pub author_url: String,
}

impl Byline {
    /// ISO 8601 timestamp for the `datetime` attribute, e.g.
    /// `2024-03-05T14:30:00+01:00`.
    #[must_use]
    pub fn machine_date(&self) -> String {
        self.published.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// Human-readable publication date.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.published.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Title attribute for the author link.
    #[must_use]
    pub fn author_tooltip(&self) -> String {
        format!("View all posts by {}", self.author_name)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn byline(published: &str) -> Byline {
        let Ok(published) = DateTime::parse_from_rfc3339(published) else {
            panic!("bad fixture date: {published}");
        };
        Byline {
            published,
            author_name: "Ada".to_string(),
            author_url: "/author/ada/".to_string(),
        }
    }

    #[test]
    fn machine_date_keeps_offset_without_fraction() {
        assert_eq!(
            byline("2024-03-05T14:30:00.250+01:00").machine_date(),
            "2024-03-05T14:30:00+01:00"
        );
        assert_eq!(
            byline("2024-03-05T14:30:00Z").machine_date(),
            "2024-03-05T14:30:00+00:00"
        );
    }

    #[test]
    fn display_date_has_no_day_padding() {
        assert_eq!(byline("2024-03-05T14:30:00Z").display_date(), "March 5, 2024");
        assert_eq!(byline("2023-11-21T08:00:00Z").display_date(), "November 21, 2023");
    }

    #[test]
    fn tooltip_names_author() {
        assert_eq!(byline("2024-03-05T14:30:00Z").author_tooltip(), "View all posts by Ada");
    }
}

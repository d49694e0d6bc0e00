//! "Posted on ... by ..." byline markup.

use crate::domain::byline::Byline;

use super::html::{escape_attr, escape_html};

/// Renders the byline with a `<time>` element and an author vcard link.
#[must_use]
pub fn render_posted_on(byline: &Byline) -> String {
    format!(
        concat!(
            r#"<span class="posted-on">Posted on "#,
            "<time datetime='{datetime}' pubdate>{date}</time>",
            " by <span class='author vcard'>",
            "<a href='{url}' title='{tooltip}' rel='author'>{name}</a>",
            "</span></span>"
        ),
        datetime = escape_attr(&byline.machine_date()),
        date = escape_html(&byline.display_date()),
        url = escape_attr(&byline.author_url),
        tooltip = escape_attr(&byline.author_tooltip()),
        name = escape_html(&byline.author_name),
    )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn renders_time_and_author_link() {
        let Ok(published) = DateTime::parse_from_rfc3339("2024-03-05T14:30:00+01:00") else {
            panic!("bad fixture date");
        };
        let byline = Byline {
            published,
            author_name: "Ada".to_string(),
            author_url: "/author/ada/".to_string(),
        };
        assert_eq!(
            render_posted_on(&byline),
            concat!(
                r#"<span class="posted-on">Posted on "#,
                "<time datetime='2024-03-05T14:30:00+01:00' pubdate>March 5, 2024</time>",
                " by <span class='author vcard'>",
                "<a href='/author/ada/' title='View all posts by Ada' rel='author'>Ada</a>",
                "</span></span>"
            )
        );
    }

    #[test]
    fn author_fields_are_escaped() {
        let Ok(published) = DateTime::parse_from_rfc3339("2024-03-05T14:30:00Z") else {
            panic!("bad fixture date");
        };
        let byline = Byline {
            published,
            author_name: "O'Brien <Ed>".to_string(),
            author_url: "/author/x/' onmouseover='x".to_string(),
        };
        let html = render_posted_on(&byline);
        assert!(html.contains("href='/author/x/&#039; onmouseover=&#039;x'"));
        assert!(html.contains("title='View all posts by O&#039;Brien &lt;Ed&gt;'"));
        assert!(html.contains(">O'Brien &lt;Ed&gt;</a>"));
    }
}

//! Escaping helpers shared by the renderers.

/// Escapes text for use inside an element body.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for use inside a double- or single-quoted attribute.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rewrites bare ampersands in trusted markup to `&#038;`.
///
/// Numeric references (`&#...`) and named entities of 1 to 8 letters
/// followed by `;` are left alone, so labels like `&laquo;` survive.
#[must_use]
pub fn encode_bare_ampersands(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find('&') {
        let (before, after) = rest.split_at(pos);
        out.push_str(before);
        let tail = after.get(1..).unwrap_or_default();
        if starts_reference(tail) {
            out.push('&');
            rest = tail;
        } else {
            // the character after the ampersand is consumed with it
            out.push_str("&#038;");
            let mut chars = tail.chars();
            if let Some(consumed) = chars.next() {
                out.push(consumed);
            }
            rest = chars.as_str();
        }
    }
    out.push_str(rest);
    out
}

/// True when the text after an `&` is a numeric reference, or one character
/// followed by up to eight letters and a `;`.
fn starts_reference(tail: &str) -> bool {
    let mut chars = tail.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if first == '#' {
        return true;
    }
    let name = chars.as_str();
    let letters = name.chars().take_while(char::is_ascii_alphabetic).count();
    (1..=8).contains(&letters) && name.get(letters..).is_some_and(|s| s.starts_with(';'))
}

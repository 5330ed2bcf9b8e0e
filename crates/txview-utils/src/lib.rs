//! Utility functions and helpers

use std::borrow::Cow;

/// Escape text for interpolation into HTML element content or quoted attributes
pub fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len() + 16);
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Percent-encode a single path segment for use in a link target
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

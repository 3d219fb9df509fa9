//! HTML text escaping.

/// Escape the five HTML-reserved characters in `text`.
///
/// Each of `& < > " '` is replaced by its entity exactly once; the output is
/// never re-scanned, so `&amp;` in the input becomes `&amp;amp;`. Nothing else
/// is touched. URLs placed into `href`/`src` attributes do not go through
/// here.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_all_reserved_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn is_not_recursive() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn plain_and_empty_text_pass_through() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Rust · WASM ğüş"), "Rust · WASM ğüş");
    }
}

//! Escaping for text and attribute values.

use std::borrow::Cow;

/// Escape text so that none of `& < > ' "` survive as markup.
///
/// Quotes become numeric references (`&#34;`, `&#39;`) and NUL becomes
/// U+FFFD.
///
/// ```
/// assert_eq!(scour_html::escape_text("a < b & 'c'"), "a &lt; b &amp; &#39;c&#39;");
/// ```
#[must_use]
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape_with(input, |c| match c {
        '&' => Some("&amp;"),
        '\'' => Some("&#39;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\0' => Some("\u{FFFD}"),
        _ => None,
    })
}

/// Escape an attribute value for use inside double quotes.
///
/// Same as [`escape_text`] except that CR is written as `&#13;` and NUL is
/// left alone.
#[must_use]
pub fn escape_attribute_value(input: &str) -> Cow<'_, str> {
    escape_with(input, |c| match c {
        '&' => Some("&amp;"),
        '\'' => Some("&#39;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\r' => Some("&#13;"),
        _ => None,
    })
}

/// Escape only `<` and `>`, leaving character references as they are.
///
/// Enough to stop text from turning into markup when it is spliced next to
/// other text, without decoding or re-encoding anything the author wrote.
/// NUL becomes U+FFFD, as in [`escape_text`].
///
/// ```
/// assert_eq!(scour_html::escape_brackets("<b>&amp;"), "&lt;b&gt;&amp;");
/// ```
#[must_use]
pub fn escape_brackets(input: &str) -> Cow<'_, str> {
    escape_with(input, |c| match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\0' => Some("\u{FFFD}"),
        _ => None,
    })
}

fn escape_with(input: &str, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = input.find(|c| replacement(c).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first]);
    for c in input[first..].chars() {
        match replacement(c) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

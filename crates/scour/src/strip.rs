//! Reduce markup to plain text.
//!
//! This is a bracket scan, not a parse. Anything between `<` and the next
//! `>` goes, so malformed input can lose more text than a browser would
//! hide, but nothing that looks like a tag can survive.

use scour_html::{decode_entities, escape_text};

/// Tags that become a newline before the rest are removed. Case-sensitive.
const LINE_BREAKS: [&str; 4] = ["</p>", "<br>", "</br>", "<br/>"];

/// Typographic references that read better as their ASCII counterparts.
const PLAIN_ENTITIES: [(&str, &str); 7] = [
    ("&#8216;", "'"),
    ("&#8217;", "'"),
    ("&#8220;", "\""),
    ("&#8221;", "\""),
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

/// Escapes that are harmless in plain text and undone after escaping.
const UNESCAPED_AFTERWARDS: [(&str, &str); 4] = [
    ("&#34;", "\""),
    ("&#39;", "'"),
    ("&amp; ", "& "),
    ("&amp;amp; ", "& "),
];

/// Strip every tag from `input`, keeping paragraph and line breaks as `\n`.
///
/// Entities are decoded and the result is escaped again, so the output is
/// safe to drop into HTML and never contains `<` or `>`.
///
/// ```
/// assert_eq!(
///     scour::strip_html("<b><p>Bold </b> Not bold</p>\nAlso not bold."),
///     "Bold  Not bold\nAlso not bold."
/// );
/// ```
#[must_use]
pub fn strip_html(input: &str) -> String {
    let mut output = if input.contains(['<', '>']) {
        remove_tags(input)
    } else {
        input.to_string()
    };

    for (entity, plain) in PLAIN_ENTITIES {
        output = output.replace(entity, plain);
    }

    let decoded = decode_entities(&output);
    let mut output = escape_text(&decoded).into_owned();

    for (escaped, plain) in UNESCAPED_AFTERWARDS {
        output = output.replace(escaped, plain);
    }
    output
}

fn remove_tags(input: &str) -> String {
    // Newlines carry no meaning in markup, only the tags below do.
    let mut source = input.replace('\n', "");
    for tag in LINE_BREAKS {
        source = source.replace(tag, "\n");
    }

    let mut text = String::with_capacity(source.len());
    let mut in_tag = false;
    for c in source.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_never_survive() {
        assert_eq!(remove_tags("a<b>c</b>d>e<f"), "acde");
    }

    #[test]
    fn line_breaks_replace_source_newlines() {
        assert_eq!(remove_tags("a\nb<br>c</p>"), "ab\nc\n");
    }
}

//! Allow-list HTML sanitizer.
//!
//! Tokens are pulled one at a time from [`HtmlTokenizer`] and either copied
//! to the output, rewritten, or dropped. Nothing is balanced or nested: the
//! only state carried between tokens is the name of the unsafe element whose
//! content is currently being skipped.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use scour_html::{Attribute, HtmlTokenizer, Token, TokenizeError, escape_brackets};

use crate::policy::{AllowList, is_unsafe_tag};

/// `data:` or `javascript:`, with any whitespace between the letters.
static SCHEME_INJECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(d\s*a\s*t\s*a|j\s*a\s*v\s*a\s*s\s*c\s*r\s*i\s*p\s*t\s*)\s*:")
        .expect("scheme injection pattern is a valid regex")
});

/// Links must be site-relative or use an explicit web or mail scheme.
static SAFE_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?:/(?:[^/\\]|\z)|mailto://|https?://)")
        .expect("safe href pattern is a valid regex")
});

/// Sanitize with the default [`AllowList`].
///
/// ```
/// assert_eq!(scour::sanitize_html("<b>hello world</b>")?, "<b>hello world</b>");
/// assert_eq!(scour::sanitize_html("<IMG SRC=javascript:alert(1)>")?, "");
/// # Ok::<(), scour::TokenizeError>(())
/// ```
///
/// # Errors
///
/// Returns the tokenizer's error if the input could not be tokenized. No
/// partial output is returned in that case.
pub fn sanitize_html(input: &str) -> Result<String, TokenizeError> {
    Sanitizer::default().sanitize(input)
}

/// Sanitize with a caller-supplied [`AllowList`].
///
/// # Errors
///
/// Same as [`sanitize_html`].
pub fn sanitize_html_allowing(input: &str, allow: &AllowList) -> Result<String, TokenizeError> {
    run(HtmlTokenizer::new(input), allow)
}

/// Keep only allowed attributes with safe, non-empty values.
///
/// Values that mention a `javascript:` or `data:` scheme anywhere are emptied,
/// as are `href` values that are not site-relative, `http(s)://` or
/// `mailto://`. Emptied attributes are dropped. Order is preserved.
#[must_use]
pub fn clean_attributes(attributes: Vec<Attribute>, allow: &AllowList) -> Vec<Attribute> {
    filter_attributes(attributes, allow).kept
}

/// A reusable sanitizer: an allow-list plus a tokenizer buffer limit.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    allow: AllowList,
    max_buf: Option<usize>,
}

impl Sanitizer {
    /// Create a sanitizer with no buffer limit.
    #[must_use]
    pub const fn new(allow: AllowList) -> Self {
        Self {
            allow,
            max_buf: None,
        }
    }

    /// Fail inputs where a single token grows past `limit` bytes.
    #[must_use]
    pub fn with_max_buf(mut self, limit: usize) -> Self {
        self.max_buf = Some(limit);
        self
    }

    /// The allow-list this sanitizer applies.
    #[must_use]
    pub const fn allow_list(&self) -> &AllowList {
        &self.allow
    }

    /// Sanitize a string.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::BufferExceeded`] if a token outgrows the limit.
    pub fn sanitize(&self, input: &str) -> Result<String, TokenizeError> {
        self.sanitize_with(HtmlTokenizer::new(input))
    }

    /// Sanitize raw bytes, which must be UTF-8.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::InvalidUtf8`] for malformed input, otherwise as
    /// [`Sanitizer::sanitize`].
    pub fn sanitize_bytes(&self, input: &[u8]) -> Result<String, TokenizeError> {
        self.sanitize_with(HtmlTokenizer::from_utf8(input)?)
    }

    fn sanitize_with(&self, tokenizer: HtmlTokenizer<'_>) -> Result<String, TokenizeError> {
        match self.max_buf {
            Some(limit) => run(tokenizer.with_max_buf(limit), &self.allow),
            None => run(tokenizer, &self.allow),
        }
    }
}

fn run(mut tokenizer: HtmlTokenizer<'_>, allow: &AllowList) -> Result<String, TokenizeError> {
    let mut buffer = String::new();
    let mut skipping: Option<String> = None;

    loop {
        let token = tokenizer
            .next_token()
            .inspect_err(|err| warn!("sanitizing stopped: {err}"))?;

        match token {
            Token::EndOfFile => return Ok(buffer),
            Token::StartTag { name, attributes } => {
                if skipping.is_none() && allow.allows_tag(&name) {
                    push_tag(&mut buffer, name, attributes, allow, false);
                } else if is_unsafe_tag(&name) {
                    debug!("skipping <{name}> and its content");
                    skipping = Some(name);
                } else {
                    debug!("dropping <{name}>");
                }
            }
            Token::SelfClosingTag { name, attributes } => {
                if skipping.as_deref() == Some(name.as_str()) {
                    debug!("leaving <{name}/>");
                    skipping = None;
                } else if skipping.is_none() && allow.allows_tag(&name) {
                    push_tag(&mut buffer, name, attributes, allow, true);
                } else if is_unsafe_tag(&name) {
                    debug!("skipping <{name}/> and what follows");
                    skipping = Some(name);
                } else {
                    debug!("dropping <{name}/>");
                }
            }
            Token::EndTag { name } => {
                if skipping.is_none() && allow.allows_tag(&name) {
                    buffer.push_str("</");
                    buffer.push_str(&name);
                    buffer.push('>');
                } else if skipping.as_deref() == Some(name.as_str()) {
                    debug!("leaving <{name}>");
                    skipping = None;
                }
            }
            Token::Text { data } => {
                if skipping.is_none() {
                    buffer.push_str(&escape_brackets(&data));
                }
            }
            Token::Comment { .. } | Token::Doctype { .. } => {}
        }
    }
}

fn push_tag(
    buffer: &mut String,
    name: String,
    attributes: Vec<Attribute>,
    allow: &AllowList,
    self_closing: bool,
) {
    let filtered = filter_attributes(attributes, allow);
    if filtered.script_url {
        debug!("dropping <{name}> pointing at a script or data URL");
        return;
    }

    let token = if self_closing {
        Token::SelfClosingTag {
            name,
            attributes: filtered.kept,
        }
    } else {
        Token::StartTag {
            name,
            attributes: filtered.kept,
        }
    };
    buffer.push_str(&token.to_string());
}

struct FilteredAttributes {
    kept: Vec<Attribute>,
    /// An allowed `src` or `href` used `javascript:` or `data:` as its scheme.
    script_url: bool,
}

/// Whether the value's own scheme, rather than some later text, is
/// `javascript:` or `data:`.
fn starts_with_injected_scheme(value: &str) -> bool {
    SCHEME_INJECTION
        .find(value)
        .is_some_and(|found| value[..found.start()].trim().is_empty())
}

fn filter_attributes(attributes: Vec<Attribute>, allow: &AllowList) -> FilteredAttributes {
    let mut script_url = false;
    let kept = attributes
        .into_iter()
        .filter(|attribute| allow.allows_attribute(&attribute.name))
        .filter(|attribute| {
            let value = attribute.value.to_lowercase();
            if SCHEME_INJECTION.is_match(&value) {
                debug!("emptying {}={:?}", attribute.name, attribute.value);
                if matches!(attribute.name.as_str(), "src" | "href")
                    && starts_with_injected_scheme(&value)
                {
                    script_url = true;
                }
                return false;
            }
            if attribute.name == "href" && !SAFE_HREF.is_match(&value) {
                debug!("removing unsafe href {:?}", attribute.value);
                return false;
            }
            !value.is_empty()
        })
        .collect();

    FilteredAttributes { kept, script_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_prefixes() {
        for safe in ["/", "/a", "http://x", "https://x", "mailto://x"] {
            assert!(SAFE_HREF.is_match(safe), "{safe}");
        }
        for unsafe_href in ["//evil", "/\\evil", "ftp://x", "x http://y", "#top"] {
            assert!(!SAFE_HREF.is_match(unsafe_href), "{unsafe_href}");
        }
    }

    #[test]
    fn scheme_injection_tolerates_whitespace() {
        assert!(SCHEME_INJECTION.is_match("java\tscript:alert(1)"));
        assert!(SCHEME_INJECTION.is_match("d a t a :text/html"));
        assert!(!SCHEME_INJECTION.is_match("/data/file"));
    }

    #[test]
    fn clean_attributes_drops_empty_and_unsafe_values() {
        let cleaned = clean_attributes(
            vec![
                Attribute::new("href", "//evil"),
                Attribute::new("id", ""),
                Attribute::new("onclick", "x()"),
                Attribute::new("class", "c"),
            ],
            &AllowList::default(),
        );
        assert_eq!(cleaned, vec![Attribute::new("class", "c")]);
    }

    #[test]
    fn script_url_is_reported() {
        let filtered = filter_attributes(
            vec![Attribute::new("src", "JavaScript:x"), Attribute::new("alt", "a")],
            &AllowList::default(),
        );
        assert!(filtered.script_url);
        assert_eq!(filtered.kept, vec![Attribute::new("alt", "a")]);
    }

    #[test]
    fn scheme_text_elsewhere_only_empties_the_attribute() {
        let filtered = filter_attributes(
            vec![
                Attribute::new("title", "Metadata: x"),
                Attribute::new("href", "https://x/?q=data:1"),
                Attribute::new("src", "/img?u=javascript:x"),
                Attribute::new("class", "c"),
            ],
            &AllowList::default(),
        );
        assert!(!filtered.script_url);
        assert_eq!(filtered.kept, vec![Attribute::new("class", "c")]);
    }

    #[test]
    fn leading_scheme_tolerates_whitespace() {
        assert!(starts_with_injected_scheme(" j a v a s c r i p t : x"));
        assert!(starts_with_injected_scheme("data:text/html"));
        assert!(!starts_with_injected_scheme("https://x/?q=data:1"));
    }
}

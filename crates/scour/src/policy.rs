//! Which tags and attributes survive sanitizing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Elements whose content is dropped along with the tag.
///
/// These are never emitted, even when an [`AllowList`] names them.
pub const UNSAFE_TAGS: &[&str] = &[
    "title", "script", "style", "iframe", "frame", "frameset", "noframes", "noembed", "embed",
    "applet", "object", "base",
];

/// Tags kept by [`AllowList::default`].
pub const DEFAULT_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "div",
    "span",
    "hr",
    "p",
    "br",
    "b",
    "i",
    "ol",
    "ul",
    "li",
    "a",
    "img",
];

/// Attributes kept by [`AllowList::default`].
pub const DEFAULT_ATTRIBUTES: &[&str] = &["id", "class", "src", "href", "title", "alt", "name", "rel"];

/// Returns true for elements that are skipped together with their content.
#[must_use]
pub fn is_unsafe_tag(name: &str) -> bool {
    UNSAFE_TAGS.contains(&name)
}

/// The tag and attribute names a [`Sanitizer`](crate::Sanitizer) lets through.
///
/// Names are compared in lowercase, which is how the tokenizer reports them.
/// When deserialized, a missing `tags` or `attributes` field falls back to
/// the built-in list; an empty list allows nothing.
///
/// ```
/// use scour::AllowList;
///
/// let allow = AllowList::new(["b", "I"], ["title"]);
/// assert!(allow.allows_tag("i"));
/// assert!(!allow.allows_tag("p"));
/// assert!(allow.allows_attribute("title"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowList {
    tags: BTreeSet<String>,
    attributes: BTreeSet<String>,
}

impl AllowList {
    /// Build an allow-list from explicit tag and attribute names.
    #[must_use]
    pub fn new<T, A>(tags: T, attributes: A) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            tags: lowercase_set(tags),
            attributes: lowercase_set(attributes),
        }
    }

    /// Whether a tag may be emitted. Unsafe tags are refused regardless.
    #[must_use]
    pub fn allows_tag(&self, name: &str) -> bool {
        !is_unsafe_tag(name) && self.tags.contains(name)
    }

    /// Whether an attribute may be kept on an emitted tag.
    #[must_use]
    pub fn allows_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// The allowed tag names, in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// The allowed attribute names, in sorted order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS, DEFAULT_ATTRIBUTES)
    }
}

fn lowercase_set<I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_tags_are_refused_even_when_listed() {
        let allow = AllowList::new(["script", "b"], Vec::<String>::new());
        assert!(!allow.allows_tag("script"));
        assert!(allow.allows_tag("b"));
    }

    #[test]
    fn names_are_lowercased_and_sorted() {
        let allow = AllowList::new(["B", "a"], ["TITLE"]);
        assert_eq!(allow.tags().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(allow.attributes().collect::<Vec<_>>(), ["title"]);
    }

    #[test]
    fn defaults_contain_no_unsafe_tag() {
        assert!(DEFAULT_TAGS.iter().all(|tag| !is_unsafe_tag(tag)));
    }
}

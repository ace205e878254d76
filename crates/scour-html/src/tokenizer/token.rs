use core::fmt;

use crate::escape::escape_attribute_value;

/// An attribute on a start or self-closing tag token.
///
/// Names are ASCII-lowercased by the tokenizer. Values have their character
/// references decoded, so `href="&#106;avascript:"` arrives here as
/// `javascript:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, lowercase.
    pub name: String,
    /// Decoded attribute value.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A lexical unit produced by [`HtmlTokenizer`](crate::HtmlTokenizer).
///
/// Tokens come out one at a time in document order. Runs of character data
/// are coalesced into a single [`Token::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr="value">`
    StartTag {
        /// Tag name, lowercase.
        name: String,
        /// Attributes in source order, duplicates removed.
        attributes: Vec<Attribute>,
    },

    /// `</name>`. Attributes written on an end tag are parsed and discarded.
    EndTag {
        /// Tag name, lowercase.
        name: String,
    },

    /// `<name attr="value"/>`
    SelfClosingTag {
        /// Tag name, lowercase.
        name: String,
        /// Attributes in source order, duplicates removed.
        attributes: Vec<Attribute>,
    },

    /// Character data exactly as it appeared in the source. Character
    /// references are not decoded.
    Text {
        /// Raw text.
        data: String,
    },

    /// `<!--data-->`, also produced for bogus comments such as `<?php ...>`.
    Comment {
        /// Comment body.
        data: String,
    },

    /// `<!DOCTYPE data>`
    Doctype {
        /// Everything between the keyword and the closing `>`, trimmed.
        data: String,
    },

    /// End of input. Returned forever once reached.
    EndOfFile,
}

impl Token {
    /// Tag name for start, end and self-closing tags.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. }
            | Self::EndTag { name }
            | Self::SelfClosingTag { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

/// Writes the token back out as HTML.
///
/// Attribute values are always double-quoted and escaped. Text is written
/// verbatim, so callers that want escaped text must escape it themselves.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { name, attributes } => {
                write!(f, "<{name}")?;
                write_attributes(f, attributes)?;
                write!(f, ">")
            }
            Self::SelfClosingTag { name, attributes } => {
                write!(f, "<{name}")?;
                write_attributes(f, attributes)?;
                write!(f, "/>")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { data } => f.write_str(data),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Doctype { data } => write!(f, "<!DOCTYPE {data}>"),
            Self::EndOfFile => Ok(()),
        }
    }
}

fn write_attributes(f: &mut fmt::Formatter<'_>, attributes: &[Attribute]) -> fmt::Result {
    for attr in attributes {
        write!(f, " {}=\"{}\"", attr.name, escape_attribute_value(&attr.value))?;
    }
    Ok(())
}

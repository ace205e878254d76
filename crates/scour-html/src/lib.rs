//! HTML tokenizer for the Scour sanitizer.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RAWTEXT, PLAINTEXT and tag states
//!   - Attribute parsing with duplicate removal
//!   - Comment, bogus comment and DOCTYPE handling
//!   - A pull interface: one token per call, no lookahead
//! - **Character references**: named, decimal and hexadecimal
//! - **Escaping** of text and attribute values
//!
//! # Not Implemented
//!
//! - Tree construction; nothing here balances tags
//! - RCDATA and script data states (both read as RAWTEXT)
//! - The full named character reference table

/// Character reference decoding.
pub mod entities;
/// Tokenizer failures.
pub mod error;
/// Escaping for text and attribute values.
pub mod escape;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use entities::{decode_attribute_value, decode_entities};
pub use error::TokenizeError;
pub use escape::{escape_attribute_value, escape_brackets, escape_text};
pub use tokenizer::{Attribute, HtmlTokenizer, Token, TokenizerState, tokenize};

//! HTML tokenizer module.
//!
//! A reduced form of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
//! the data, tag, attribute, comment, DOCTYPE and raw text states, driven one
//! token at a time by [`HtmlTokenizer::next_token`].

/// Helper methods for tokenizer state transitions and emission.
mod helpers;
/// HTML tokenizer state machine implementation.
pub mod machine;
/// Token types produced by the tokenizer.
pub mod token;

pub use machine::{HtmlTokenizer, TokenizerState, tokenize};
pub use token::{Attribute, Token};

//! Tokenizer failures.

use thiserror::Error;

/// Why a tokenizer stopped before reaching the end of its input.
///
/// End of input itself is not an error; it is reported as
/// [`Token::EndOfFile`](crate::Token::EndOfFile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A single token grew past the limit set with
    /// [`HtmlTokenizer::with_max_buf`](crate::HtmlTokenizer::with_max_buf).
    #[error("token exceeds the {limit}-byte buffer limit")]
    BufferExceeded {
        /// The configured limit in bytes.
        limit: usize,
    },

    /// The input bytes were not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
}

impl From<core::str::Utf8Error> for TokenizeError {
    fn from(err: core::str::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

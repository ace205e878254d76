//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Building the current tag token
//! - Token emission ("Emit the current token")

use std::mem;

use log::trace;

use super::machine::{HtmlTokenizer, RAW_TEXT_ELEMENTS, TagBuilder, TokenizerState};
use super::token::{Attribute, Token};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HtmlTokenizer<'_> {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next step.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HtmlTokenizer<'_> {
    /// "Consume the next input character"
    ///
    /// Returns None at the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// "If the next few characters are..."
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// "ASCII case-insensitive match for the word 'DOCTYPE'"
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.input[self.current_pos..]
            .as_bytes()
            .get(..target.len())
            .is_some_and(|next| next.eq_ignore_ascii_case(target.as_bytes()))
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present, and
    /// `target` must be ASCII.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
    /// U+000C FORM FEED (FF), U+0020 SPACE"
    ///
    /// CR is included because input is not newline-normalized first.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\r' | '\x0C')
    }
}

// =============================================================================
// Current Tag Helpers
// =============================================================================

impl HtmlTokenizer<'_> {
    /// "Append the current input character to the current tag token's tag name."
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Some(tag) = self.current_tag.as_mut() {
            tag.name.push(c);
        }
    }

    /// "Set the self-closing flag of the current tag token."
    pub(super) fn set_self_closing(&mut self) {
        if let Some(tag) = self.current_tag.as_mut() {
            tag.self_closing = true;
        }
    }

    /// "Start a new attribute in the current tag token."
    pub(super) fn start_new_attribute(&mut self) {
        self.commit_current_attribute();
        if let Some(tag) = self.current_tag.as_mut() {
            tag.current_attribute = Some(Attribute::new("", ""));
        }
    }

    /// "Append the current input character to the current attribute's name."
    pub(super) fn append_to_current_attribute_name(&mut self, c: char) {
        if let Some(attr) = self
            .current_tag
            .as_mut()
            .and_then(|tag| tag.current_attribute.as_mut())
        {
            attr.name.push(c);
        }
    }

    /// "Append the current input character to the current attribute's value."
    pub(super) fn append_to_current_attribute_value(&mut self, c: char) {
        if let Some(attr) = self
            .current_tag
            .as_mut()
            .and_then(|tag| tag.current_attribute.as_mut())
        {
            attr.value.push(c);
        }
    }

    /// "If there is already an attribute on the token with the exact same
    /// name, then this is a duplicate-attribute parse error and the new
    /// attribute must be removed from the token."
    pub(super) fn commit_current_attribute(&mut self) {
        let duplicate = self
            .current_tag
            .as_mut()
            .is_some_and(TagBuilder::commit_attribute);
        if duplicate {
            self.log_parse_error("duplicate-attribute");
        }
    }

    /// "An appropriate end tag token is an end tag token whose tag name
    /// matches the tag name of the last start tag to have been emitted from
    /// this tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        match (&self.last_start_tag_name, &self.current_tag) {
            (Some(last_start_tag), Some(tag)) => tag.is_end && tag.name == *last_start_tag,
            _ => false,
        }
    }

    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    ///
    /// "Anything else":
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer... Reconsume in the RAWTEXT state."
    pub(super) fn emit_raw_text_end_tag_name_anything_else(&mut self) {
        self.text.push_str("</");
        self.text.push_str(&self.temporary_buffer);
        self.current_tag = None;
        self.reconsume_in(TokenizerState::RawText);
    }

    /// "EOF - This is an eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag is dropped.
    pub(super) fn eof_in_tag(&mut self) {
        self.log_parse_error("eof-in-tag");
        self.current_tag = None;
        self.reconsume_in(TokenizerState::Data);
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HtmlTokenizer<'_> {
    fn push_token(&mut self, token: Token) {
        self.pending.push_back(token);
        self.token_start = self.current_pos;
    }

    /// Emit the buffered character data, if any, as one text token.
    pub(super) fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let data = mem::take(&mut self.text);
            self.push_token(Token::Text { data });
        }
    }

    /// "Emit the current tag token."
    ///
    /// Start tags of raw text elements switch the tokenizer into the RAWTEXT
    /// (or PLAINTEXT) state, which in a browser is the tree builder's job.
    pub(super) fn emit_tag(&mut self) {
        self.commit_current_attribute();
        let Some(tag) = self.current_tag.take() else {
            return;
        };
        self.flush_text();

        let token = tag.finish();
        if let Token::StartTag { name, .. } = &token {
            if name == "plaintext" {
                self.switch_to(TokenizerState::PlainText);
            } else if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                self.last_start_tag_name = Some(name.clone());
                self.switch_to(TokenizerState::RawText);
            }
        }
        self.push_token(token);
    }

    /// "Emit the comment token."
    pub(super) fn emit_comment(&mut self) {
        self.flush_text();
        let data = mem::take(&mut self.comment);
        self.push_token(Token::Comment { data });
    }

    /// "Emit the current DOCTYPE token."
    pub(super) fn emit_doctype(&mut self) {
        self.flush_text();
        let data = mem::take(&mut self.comment).trim().to_string();
        self.push_token(Token::Doctype { data });
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof(&mut self) {
        self.flush_text();
        self.at_eof = true;
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HtmlTokenizer<'_> {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Parse errors are not fatal - the tokenizer recovers and continues.
    pub(super) fn log_parse_error(&self, code: &str) {
        trace!(
            "parse error {code} at byte {} in {} state",
            self.current_pos, self.state
        );
    }
}

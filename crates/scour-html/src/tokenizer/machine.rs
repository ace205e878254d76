use std::collections::VecDeque;

use log::warn;
use strum_macros::Display;

use super::token::{Attribute, Token};
use crate::entities::decode_attribute_value;
use crate::error::TokenizeError;

/// Elements whose content is read as raw text up to the matching end tag.
///
/// [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
pub(super) const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "script", "style", "textarea", "title", "xmp",
];

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. RCDATA and script data are folded into
/// [`TokenizerState::RawText`]; character references are left in text and
/// decoded in attribute values when the tag is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    RawText,
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    PlainText,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    RawTextLessThanSign,
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    RawTextEndTagOpen,
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    RawTextEndTagName,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    Doctype,
}

/// A tag token under construction.
#[derive(Debug)]
pub(super) struct TagBuilder {
    pub(super) is_end: bool,
    pub(super) name: String,
    pub(super) self_closing: bool,
    pub(super) attributes: Vec<Attribute>,
    pub(super) current_attribute: Option<Attribute>,
}

impl TagBuilder {
    pub(super) const fn new(is_end: bool) -> Self {
        Self {
            is_end,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            current_attribute: None,
        }
    }

    /// Moves the attribute being built onto the tag. Returns true if it was
    /// dropped as a duplicate of an earlier attribute.
    pub(super) fn commit_attribute(&mut self) -> bool {
        let Some(attr) = self.current_attribute.take() else {
            return false;
        };
        if self.attributes.iter().any(|a| a.name == attr.name) {
            return true;
        }
        self.attributes.push(attr);
        false
    }

    pub(super) fn finish(self) -> Token {
        let Self {
            is_end,
            name,
            self_closing,
            mut attributes,
            ..
        } = self;

        if is_end {
            return Token::EndTag { name };
        }
        for attr in &mut attributes {
            attr.value = decode_attribute_value(&attr.value);
        }
        if self_closing {
            Token::SelfClosingTag { name, attributes }
        } else {
            Token::StartTag { name, attributes }
        }
    }
}

/// A pull-based HTML tokenizer.
///
/// Each call to [`next_token`](Self::next_token) runs the state machine just
/// far enough to produce one token. Once [`Token::EndOfFile`] or an error has
/// been returned, every later call returns the same thing again.
///
/// ```
/// use scour_html::{HtmlTokenizer, Token};
///
/// let mut tokenizer = HtmlTokenizer::new("<b>hi</b>");
/// assert_eq!(tokenizer.next_token()?.tag_name(), Some("b"));
/// assert_eq!(tokenizer.next_token()?, Token::Text { data: "hi".into() });
/// # Ok::<(), scour_html::TokenizeError>(())
/// ```
#[derive(Debug)]
pub struct HtmlTokenizer<'a> {
    pub(super) state: TokenizerState,
    pub(super) input: &'a str,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    // When true, the next step will not consume a new character.
    // "Reconsume in the X state" sets this flag.
    pub(super) reconsume: bool,
    pub(super) current_tag: Option<TagBuilder>,
    /// Character data waiting to be emitted as one text token.
    pub(super) text: String,
    /// Data of the comment or DOCTYPE being read.
    pub(super) comment: String,
    /// "The last start tag token emitted", used to find the end of raw text.
    pub(super) last_start_tag_name: Option<String>,
    pub(super) temporary_buffer: String,
    pub(super) pending: VecDeque<Token>,
    /// Byte offset where the token being built began.
    pub(super) token_start: usize,
    pub(super) max_buf: Option<usize>,
    pub(super) at_eof: bool,
    pub(super) error: Option<TokenizeError>,
}

impl<'a> HtmlTokenizer<'a> {
    /// Create a new tokenizer for the given input.
    ///
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
    /// "The initial state is the data state."
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        HtmlTokenizer {
            state: TokenizerState::Data,
            input,
            current_pos: 0,
            current_input_character: None,
            reconsume: false,
            current_tag: None,
            text: String::new(),
            comment: String::new(),
            last_start_tag_name: None,
            temporary_buffer: String::new(),
            pending: VecDeque::new(),
            token_start: 0,
            max_buf: None,
            at_eof: false,
            error: None,
        }
    }

    /// Create a tokenizer over raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::InvalidUtf8`] if `input` is not valid UTF-8.
    pub fn from_utf8(input: &'a [u8]) -> Result<Self, TokenizeError> {
        let input = core::str::from_utf8(input).inspect_err(|err| {
            warn!("rejecting HTML input: {err}");
        })?;
        Ok(Self::new(input))
    }

    /// Limit how many bytes a single token may span.
    ///
    /// When a token grows past `limit`, [`next_token`](Self::next_token)
    /// fails with [`TokenizeError::BufferExceeded`].
    #[must_use]
    pub fn with_max_buf(mut self, limit: usize) -> Self {
        self.max_buf = Some(limit);
        self
    }

    /// The state the machine is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Produce the next token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::BufferExceeded`] when a token outgrows the
    /// limit set with [`with_max_buf`](Self::with_max_buf).
    pub fn next_token(&mut self) -> Result<Token, TokenizeError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
            if self.at_eof {
                return Ok(Token::EndOfFile);
            }
            if let Some(limit) = self.max_buf
                && self.current_pos - self.token_start > limit
            {
                let err = TokenizeError::BufferExceeded { limit };
                warn!("tokenizer stopped at byte {}: {err}", self.current_pos);
                self.error = Some(err.clone());
                return Err(err);
            }
            self.step();
        }
    }

    /// Run one iteration of the state machine.
    fn step(&mut self) {
        // Each state begins by consuming the next input character,
        // unless we're reconsuming from a previous state transition.
        if self.reconsume {
            self.reconsume = false;
        } else {
            self.current_input_character = self.consume();
        }

        match self.state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::RawText => self.handle_raw_text_state(),
            TokenizerState::PlainText => self.handle_plain_text_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),
            TokenizerState::RawTextLessThanSign => self.handle_raw_text_less_than_sign_state(),
            TokenizerState::RawTextEndTagOpen => self.handle_raw_text_end_tag_open_state(),
            TokenizerState::RawTextEndTagName => self.handle_raw_text_end_tag_name_state(),
            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"');
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'');
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::Doctype => self.handle_doctype_state(),
        }
    }

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    ///
    /// Character references are not consumed here; text keeps its source form.
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            // "EOF - Emit an end-of-file token."
            None => self.emit_eof(),
            Some(c) => self.text.push(c),
        }
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    fn handle_raw_text_state(&mut self) {
        match self.current_input_character {
            // "Switch to the RAWTEXT less-than sign state."
            Some('<') => self.switch_to(TokenizerState::RawTextLessThanSign),
            None => self.emit_eof(),
            Some(c) => self.text.push(c),
        }
    }

    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    fn handle_plain_text_state(&mut self) {
        match self.current_input_character {
            None => self.emit_eof(),
            Some(c) => self.text.push(c),
        }
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            // "U+0021 EXCLAMATION MARK (!) - Switch to the markup declaration open state."
            Some('!') => self.markup_declaration_open(),
            // "U+002F SOLIDUS (/) - Switch to the end tag open state."
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            // "ASCII alpha - Create a new start tag token, set its tag name to the
            // empty string. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_tag = Some(TagBuilder::new(false));
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003F QUESTION MARK (?) - Create a comment token whose data is the
            // empty string. Reconsume in the bogus comment state."
            Some('?') => {
                self.log_parse_error("unexpected-question-mark-instead-of-tag-name");
                self.comment.clear();
                self.reconsume_in(TokenizerState::BogusComment);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the data state."
            _ => {
                self.log_parse_error("invalid-first-character-of-tag-name");
                self.text.push('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// Looks ahead past the '!' without a state of its own.
    fn markup_declaration_open(&mut self) {
        self.comment.clear();
        if self.next_few_characters_are("--") {
            self.consume_string("--");
            // "<!-->" and "<!--->" are complete, empty comments.
            if self.next_few_characters_are(">") || self.next_few_characters_are("->") {
                self.log_parse_error("abrupt-closing-of-empty-comment");
                let closing = if self.next_few_characters_are(">") { ">" } else { "->" };
                self.consume_string(closing);
                self.switch_to(TokenizerState::Data);
                self.emit_comment();
            } else {
                self.switch_to(TokenizerState::Comment);
            }
        } else if self.next_few_characters_are_case_insensitive("doctype") {
            self.consume_string("doctype");
            self.switch_to(TokenizerState::Doctype);
        } else {
            // "Anything else - This is an incorrectly-opened-comment parse error.
            // Switch to the bogus comment state."
            self.log_parse_error("incorrectly-opened-comment");
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            // "ASCII alpha - Create a new end tag token. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_tag = Some(TagBuilder::new(true));
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-end-tag-name parse
            // error. Switch to the data state."
            Some('>') => {
                self.log_parse_error("missing-end-tag-name");
                self.switch_to(TokenizerState::Data);
            }
            // "EOF - Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
            // character token and an end-of-file token."
            None => {
                self.log_parse_error("eof-before-tag-name");
                self.text.push_str("</");
                self.reconsume_in(TokenizerState::Data);
            }
            // "Anything else - Create a comment token whose data is the empty string.
            // Reconsume in the bogus comment state."
            Some(_) => {
                self.log_parse_error("invalid-first-character-of-tag-name");
                self.comment.clear();
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_tag_name('\u{FFFD}');
            }
            None => self.eof_in_tag(),
            // "ASCII upper alpha - Append the lowercase version of the current
            // input character to the current tag token's tag name."
            Some(c) => self.append_to_tag_name(c.to_ascii_lowercase()),
        }
    }

    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    fn handle_raw_text_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/) - Set the temporary buffer to the empty string.
            // Switch to the RAWTEXT end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::RawTextEndTagOpen);
            }
            _ => {
                self.text.push('<');
                self.reconsume_in(TokenizerState::RawText);
            }
        }
    }

    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    fn handle_raw_text_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_tag = Some(TagBuilder::new(true));
                self.reconsume_in(TokenizerState::RawTextEndTagName);
            }
            _ => {
                self.text.push_str("</");
                self.reconsume_in(TokenizerState::RawText);
            }
        }
    }

    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    ///
    /// Only "an appropriate end tag token" leaves raw text; the comparison is
    /// ASCII case-insensitive because the name is lowercased as it is read.
    fn handle_raw_text_end_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) && self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.append_to_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            _ => self.emit_raw_text_end_tag_name_anything_else(),
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            // "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+002F SOLIDUS (/), U+003E GREATER-THAN SIGN (>), EOF -
            // Reconsume in the after attribute name state."
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            // "U+003D EQUALS SIGN (=) - Start a new attribute in the current tag
            // token. Set that attribute's name to the current input character."
            Some('=') => {
                self.log_parse_error("unexpected-equals-sign-before-attribute-name");
                self.start_new_attribute();
                self.append_to_current_attribute_name('=');
                self.switch_to(TokenizerState::AttributeName);
            }
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_current_attribute_name('\u{FFFD}');
            }
            Some(c @ ('"' | '\'' | '<')) => {
                self.log_parse_error("unexpected-character-in-attribute-name");
                self.append_to_current_attribute_name(c);
            }
            Some(c) => self.append_to_current_attribute_name(c.to_ascii_lowercase()),
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            None => self.eof_in_tag(),
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-attribute-value
            // parse error. Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.log_parse_error("missing-attribute-value");
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_current_attribute_value('\u{FFFD}');
            }
            None => self.eof_in_tag(),
            Some(c) => self.append_to_current_attribute_value(c),
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_current_attribute_value('\u{FFFD}');
            }
            None => self.eof_in_tag(),
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.log_parse_error("unexpected-character-in-unquoted-attribute-value");
                self.append_to_current_attribute_value(c);
            }
            Some(c) => self.append_to_current_attribute_value(c),
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            None => self.eof_in_tag(),
            Some(_) => {
                self.log_parse_error("missing-whitespace-between-attributes");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            // "Set the self-closing flag of the current tag token. Switch to the
            // data state. Emit the current tag token."
            Some('>') => {
                self.set_self_closing();
                self.switch_to(TokenizerState::Data);
                self.emit_tag();
            }
            None => self.eof_in_tag(),
            // "Anything else - This is an unexpected-solidus-in-tag parse error.
            // Reconsume in the before attribute name state."
            Some(_) => {
                self.log_parse_error("unexpected-solidus-in-tag");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_comment();
            }
            None => {
                self.emit_comment();
                self.reconsume_in(TokenizerState::Data);
            }
            Some('\0') => self.comment.push('\u{FFFD}'),
            Some(c) => self.comment.push(c),
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    ///
    /// The dash and bang sub-states are collapsed into a look-ahead for
    /// `-->` and `--!>`.
    fn handle_comment_state(&mut self) {
        match self.current_input_character {
            Some('-') if self.next_few_characters_are("->") => {
                self.consume_string("->");
                self.switch_to(TokenizerState::Data);
                self.emit_comment();
            }
            Some('-') if self.next_few_characters_are("-!>") => {
                self.log_parse_error("incorrectly-closed-comment");
                self.consume_string("-!>");
                self.switch_to(TokenizerState::Data);
                self.emit_comment();
            }
            None => {
                self.log_parse_error("eof-in-comment");
                self.emit_comment();
                self.reconsume_in(TokenizerState::Data);
            }
            Some(c) => self.comment.push(c),
        }
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    ///
    /// The name and identifiers are not split out; the token carries the
    /// whole declaration body.
    fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_doctype();
            }
            None => {
                self.log_parse_error("eof-in-doctype");
                self.emit_doctype();
                self.reconsume_in(TokenizerState::Data);
            }
            Some(c) => self.comment.push(c),
        }
    }
}

/// Tokenize `input` in one go, including the final [`Token::EndOfFile`].
///
/// # Errors
///
/// Propagates the first error from [`HtmlTokenizer::next_token`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = HtmlTokenizer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

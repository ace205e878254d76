//! Integration tests for the HTML tokenizer.

use quickcheck_macros::quickcheck;
use scour_html::{Attribute, HtmlTokenizer, Token, TokenizeError, TokenizerState, tokenize};

/// Helper to tokenize a string that must not fail
fn tokens(input: &str) -> Vec<Token> {
    tokenize(input).expect("tokenizing a str without a buffer limit cannot fail")
}

fn text(data: &str) -> Token {
    Token::Text { data: data.into() }
}

#[test]
fn test_plain_text() {
    let tokens = tokens("Hello");
    assert_eq!(tokens, vec![text("Hello"), Token::EndOfFile]);
}

#[test]
fn test_empty_input() {
    assert_eq!(tokens(""), vec![Token::EndOfFile]);
}

#[test]
fn test_doctype() {
    let tokens = tokens("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2);
    assert_eq!(
        tokens[0],
        Token::Doctype {
            data: "html".into()
        }
    );
}

#[test]
fn test_start_and_end_tag() {
    let tokens = tokens("<DIV>x</Div>");
    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "div".into(),
                attributes: vec![]
            },
            text("x"),
            Token::EndTag { name: "div".into() },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokens("<br/><hr />");
    assert!(matches!(&tokens[0], Token::SelfClosingTag { name, .. } if name == "br"));
    assert!(matches!(&tokens[1], Token::SelfClosingTag { name, .. } if name == "hr"));
}

#[test]
fn test_stray_solidus_is_not_self_closing() {
    let tokens = tokens("<br / >");
    assert!(matches!(&tokens[0], Token::StartTag { name, attributes } if name == "br" && attributes.is_empty()));
}

#[test]
fn test_attributes() {
    let tokens = tokens(r#"<a href="/x" HREF='y' Title=t disabled>"#);
    match &tokens[0] {
        Token::StartTag { name, attributes } => {
            assert_eq!(name, "a");
            assert_eq!(
                attributes,
                &vec![
                    Attribute::new("href", "/x"),
                    Attribute::new("title", "t"),
                    Attribute::new("disabled", ""),
                ]
            );
        }
        other => panic!("Expected StartTag token, got {other:?}"),
    }
}

#[test]
fn test_attribute_values_are_decoded_but_text_is_not() {
    let tokens = tokens(r#"<a href="&#106;ava&#x73;cript:x">&amp;&lt;</a>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, "javascript:x"),
        other => panic!("Expected StartTag token, got {other:?}"),
    }
    assert_eq!(tokens[1], text("&amp;&lt;"));
}

#[test]
fn test_unquoted_value_runs_to_whitespace_or_gt() {
    let tokens = tokens("<p id=0</p> or");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, "0</p"),
        other => panic!("Expected StartTag token, got {other:?}"),
    }
    assert_eq!(tokens[1], text(" or"));
}

#[test]
fn test_script_content_is_raw_text() {
    let tokens = tokens(r#"<script>if (a < b) { x = "</p>"; }</SCRIPT >after"#);
    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "script".into(),
                attributes: vec![]
            },
            text(r#"if (a < b) { x = "</p>"; }"#),
            Token::EndTag {
                name: "script".into()
            },
            text("after"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_raw_text_start_tag_switches_state() {
    let mut tokenizer = HtmlTokenizer::new("<style>p{}</style>");
    let token = tokenizer.next_token().expect("no buffer limit");
    assert_eq!(token.tag_name(), Some("style"));
    assert_eq!(tokenizer.state(), TokenizerState::RawText);
}

#[test]
fn test_unterminated_raw_text_runs_to_eof() {
    let tokens = tokens("<style>body{}</sty");
    assert_eq!(tokens[1], text("body{}</sty"));
    assert!(tokens[2].is_eof());
}

#[test]
fn test_plaintext_swallows_the_rest() {
    let tokens = tokens("<plaintext><b>x</plaintext>");
    assert_eq!(tokens[1], text("<b>x</plaintext>"));
}

#[test]
fn test_comments() {
    assert_eq!(
        tokens("<!-- hi -->x"),
        vec![
            Token::Comment {
                data: " hi ".into()
            },
            text("x"),
            Token::EndOfFile
        ]
    );
    assert_eq!(tokens("<!-->x")[0], Token::Comment { data: String::new() });
    assert_eq!(
        tokens("<?php echo('hello world')>")[0],
        Token::Comment {
            data: "?php echo('hello world')".into()
        }
    );
}

#[test]
fn test_cdata_is_a_bogus_comment() {
    let tokens = tokens("<![CDATA[<sender>John Smith</sender>]]>");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "[CDATA[<sender".into()
        }
    );
    assert_eq!(tokens[1], text("John Smith"));
    assert_eq!(tokens[3], text("]]>"));
}

#[test]
fn test_lone_less_than_is_text() {
    assert_eq!(tokens("a < b <"), vec![text("a < b <"), Token::EndOfFile]);
}

#[test]
fn test_empty_end_tag_is_dropped() {
    assert_eq!(tokens("a</>b"), vec![text("ab"), Token::EndOfFile]);
}

#[test]
fn test_unfinished_tag_is_dropped() {
    assert_eq!(tokens(r#"text<img src="x"#), vec![text("text"), Token::EndOfFile]);
}

#[test]
fn test_eof_is_sticky() {
    let mut tokenizer = HtmlTokenizer::new("x");
    assert_eq!(tokenizer.next_token(), Ok(text("x")));
    assert_eq!(tokenizer.next_token(), Ok(Token::EndOfFile));
    assert_eq!(tokenizer.next_token(), Ok(Token::EndOfFile));
}

#[test]
fn test_buffer_limit() {
    let input = "a".repeat(100);
    let mut tokenizer = HtmlTokenizer::new(&input).with_max_buf(10);
    let err = TokenizeError::BufferExceeded { limit: 10 };
    assert_eq!(tokenizer.next_token(), Err(err.clone()));
    assert_eq!(tokenizer.next_token(), Err(err));
}

#[test]
fn test_buffer_limit_counts_per_token() {
    let mut tokenizer = HtmlTokenizer::new("<b>abc</b><i>def</i>").with_max_buf(8);
    loop {
        match tokenizer.next_token() {
            Ok(Token::EndOfFile) => break,
            Ok(_) => {}
            Err(err) => panic!("unexpected error: {err}"),
        }
    }
}

#[test]
fn test_invalid_utf8() {
    let err = HtmlTokenizer::from_utf8(&[b'f', 0xFF]).unwrap_err();
    assert_eq!(err, TokenizeError::InvalidUtf8 { valid_up_to: 1 });
}

#[test]
fn test_display_escapes_attribute_values() {
    let token = Token::StartTag {
        name: "p".into(),
        attributes: vec![Attribute::new("title", r#"a "b" <c>"#)],
    };
    assert_eq!(token.to_string(), r#"<p title="a &#34;b&#34; &lt;c&gt;">"#);

    let token = Token::SelfClosingTag {
        name: "hr".into(),
        attributes: vec![],
    };
    assert_eq!(token.to_string(), "<hr/>");
    assert_eq!(text("a < b").to_string(), "a < b");
}

#[quickcheck]
fn any_input_tokenizes_to_eof(input: String) -> bool {
    tokenize(&input).is_ok_and(|tokens| tokens.last().is_some_and(Token::is_eof))
}

#[quickcheck]
fn markup_free_input_is_one_text_token(input: String) -> bool {
    let input: String = input.chars().filter(|c| *c != '<').collect();
    let tokens = tokens(&input);
    if input.is_empty() {
        tokens == vec![Token::EndOfFile]
    } else {
        tokens == vec![text(&input), Token::EndOfFile]
    }
}

//! Integration tests for the plain-text stripper.

use quickcheck_macros::quickcheck;
use scour::strip_html;

#[test]
fn test_entities_become_plain_text() {
    assert_eq!(strip_html("&nbsp;"), " ");
    assert_eq!(strip_html("FOO&#x000D;ZOO"), "FOO\rZOO");
    assert_eq!(
        strip_html("&#8220;hello&#8221; it&#8217;s for &#8216;real&#8217;"),
        r#""hello" it's for 'real'"#
    );
    assert_eq!(strip_html("caf&eacute; &copy; 2024"), "café © 2024");
}

#[test]
fn test_escaped_markup_stays_escaped() {
    assert_eq!(strip_html("&amp;#x000D;"), "&amp;#x000D;");
    assert_eq!(
        strip_html(r#"&lt;iframe src="" attr=""&gt;>>>>>"#),
        r#"&lt;iframe src="" attr=""&gt;"#
    );
    assert_eq!(strip_html("&gt & test &lt"), "&gt; & test &lt;");
}

#[test]
fn test_breaks_become_newlines() {
    assert_eq!(
        strip_html("<b><p>Bold </b> Not bold</p>\nAlso not bold."),
        "Bold  Not bold\nAlso not bold."
    );
    assert_eq!(strip_html("Something<br/>Some more"), "Something\nSome more");
    assert_eq!(
        strip_html(r#"<p>Some text</p><frameset src="testing.html"></frameset>"#),
        "Some text\n"
    );
}

#[test]
fn test_line_breaks_are_case_sensitive() {
    assert_eq!(strip_html("a<BR>b"), "ab");
}

#[test]
fn test_malformed_markup() {
    assert_eq!(strip_html(r#"<invalid attr="invalid"<,<p><p><p><p><p>"#), "");
    assert_eq!(strip_html("<script><!--<script </s"), "");
    assert_eq!(
        strip_html(
            r#"<a href="/" alt="Fab.com | Aqua Paper Map 22"" title="Fab.com | Aqua Paper Map 22" - fab.com">test</a>"#
        ),
        "test"
    );
    assert_eq!(
        strip_html(
            "<p</p>?> or <p id=0</p> or <<</>><ASDF><@$!@£M<<>>>>>>>>>>>>>><>***************aaaaaaaaaaaaaaaaaaaaaaaaaa>"
        ),
        " or ***************aaaaaaaaaaaaaaaaaaaaaaaaaa"
    );
    assert_eq!(
        strip_html(
            r#"<a href="http://www.example.com"?>This is a 'test' of <b>bold</b> &amp; <i>italic</i></a> <br/> invalid markup.<//data>><alert><script CDATA[:Asdfjk2354115nkjafdgs]>. <div src=">"><><img src="">"#
        ),
        "This is a 'test' of bold & italic \n invalid markup.. \""
    );
}

#[test]
fn test_content_of_unsafe_elements_is_kept_as_text() {
    assert_eq!(strip_html("<![CDATA[<sender>John Smith</sender>]]>"), "John Smith]]");
    assert_eq!(
        strip_html("<!-- <script src='blah.js' data-rel='fsd'> --> This is text"),
        " -- This is text"
    );
    assert_eq!(
        strip_html(r#"<IMG """><SCRIPT>alert("XSS")</SCRIPT>">"#),
        r#"alert("XSS")""#
    );
}

#[test]
fn test_script_urls_vanish_with_their_tag() {
    assert_eq!(
        strip_html("<IMG SRC=javascript:alert(String.fromCharCode(88,83,83))>"),
        ""
    );
    assert_eq!(strip_html("<IMG SRC=JaVaScRiPt:alert('XSS')&gt;"), "");
    assert_eq!(strip_html(r#"<IMG SRC="javascript:alert('XSS')" <test"#), "");
}

#[quickcheck]
fn output_has_no_angle_brackets(input: String) -> bool {
    let output = strip_html(&input);
    !output.contains('<') && !output.contains('>')
}

#[quickcheck]
fn markup_free_ascii_text_is_unchanged(input: String) -> bool {
    let input: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '\n')
        .collect();
    strip_html(&input) == input
}

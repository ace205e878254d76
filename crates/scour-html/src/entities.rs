//! Character reference decoding.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The full named table has 2,231 entries; we carry the common ones. Unknown
//! references are left in the text untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// Names ending in ';' are the normal form. The handful without ';' are the
/// legacy references that browsers still accept bare (`&amp`, `&lt`).
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("amp;", "&"),
        ("amp", "&"),
        ("AMP;", "&"),
        ("AMP", "&"),
        ("lt;", "<"),
        ("lt", "<"),
        ("LT;", "<"),
        ("LT", "<"),
        ("gt;", ">"),
        ("gt", ">"),
        ("GT;", ">"),
        ("GT", ">"),
        ("quot;", "\""),
        ("quot", "\""),
        ("QUOT;", "\""),
        ("QUOT", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        ("nbsp", "\u{00A0}"),
        ("copy;", "\u{00A9}"),
        ("copy", "\u{00A9}"),
        ("reg;", "\u{00AE}"),
        ("reg", "\u{00AE}"),
        ("trade;", "\u{2122}"),
        ("colon;", ":"),
        ("Tab;", "\t"),
        ("NewLine;", "\n"),
        ("sol;", "/"),
        ("lpar;", "("),
        ("rpar;", ")"),
        ("period;", "."),
        ("comma;", ","),
        ("semi;", ";"),
        ("equals;", "="),
        ("num;", "#"),
        ("excl;", "!"),
        ("quest;", "?"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("bull;", "\u{2022}"),
        ("middot;", "\u{00B7}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        ("cent;", "\u{00A2}"),
        ("pound;", "\u{00A3}"),
        ("euro;", "\u{20AC}"),
        ("yen;", "\u{00A5}"),
        ("times;", "\u{00D7}"),
        ("divide;", "\u{00F7}"),
        ("plusmn;", "\u{00B1}"),
        ("deg;", "\u{00B0}"),
        ("frac12;", "\u{00BD}"),
        ("frac14;", "\u{00BC}"),
        ("frac34;", "\u{00BE}"),
        ("szlig;", "\u{00DF}"),
        ("Agrave;", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"),
        ("Acirc;", "\u{00C2}"),
        ("Atilde;", "\u{00C3}"),
        ("Auml;", "\u{00C4}"),
        ("Aring;", "\u{00C5}"),
        ("AElig;", "\u{00C6}"),
        ("agrave;", "\u{00E0}"),
        ("aacute;", "\u{00E1}"),
        ("acirc;", "\u{00E2}"),
        ("atilde;", "\u{00E3}"),
        ("auml;", "\u{00E4}"),
        ("aring;", "\u{00E5}"),
        ("aelig;", "\u{00E6}"),
        ("Egrave;", "\u{00C8}"),
        ("Eacute;", "\u{00C9}"),
        ("egrave;", "\u{00E8}"),
        ("eacute;", "\u{00E9}"),
        ("ecirc;", "\u{00EA}"),
        ("euml;", "\u{00EB}"),
        ("Igrave;", "\u{00CC}"),
        ("Iacute;", "\u{00CD}"),
        ("igrave;", "\u{00EC}"),
        ("iacute;", "\u{00ED}"),
        ("icirc;", "\u{00EE}"),
        ("iuml;", "\u{00EF}"),
        ("Ograve;", "\u{00D2}"),
        ("Oacute;", "\u{00D3}"),
        ("Ouml;", "\u{00D6}"),
        ("Oslash;", "\u{00D8}"),
        ("ograve;", "\u{00F2}"),
        ("oacute;", "\u{00F3}"),
        ("ocirc;", "\u{00F4}"),
        ("ouml;", "\u{00F6}"),
        ("oslash;", "\u{00F8}"),
        ("Ugrave;", "\u{00D9}"),
        ("Uacute;", "\u{00DA}"),
        ("Uuml;", "\u{00DC}"),
        ("ugrave;", "\u{00F9}"),
        ("uacute;", "\u{00FA}"),
        ("ucirc;", "\u{00FB}"),
        ("uuml;", "\u{00FC}"),
        ("yacute;", "\u{00FD}"),
        ("yuml;", "\u{00FF}"),
        ("ntilde;", "\u{00F1}"),
        ("Ntilde;", "\u{00D1}"),
        ("ccedil;", "\u{00E7}"),
        ("Ccedil;", "\u{00C7}"),
        ("thorn;", "\u{00FE}"),
        ("THORN;", "\u{00DE}"),
        ("eth;", "\u{00F0}"),
        ("ETH;", "\u{00D0}"),
    ])
});

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// Code points 0x80..=0x9F are read as Windows-1252, the way browsers do.
const WINDOWS_1252: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Look up a named character reference.
///
/// The `name` should NOT include the leading '&'.
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Decode every character reference in `input`.
///
/// ```
/// assert_eq!(scour_html::decode_entities("&lt;b&gt; &amp &#x41;&#66;"), "<b> & AB");
/// assert_eq!(scour_html::decode_entities("&bogus;"), "&bogus;");
/// ```
#[must_use]
pub fn decode_entities(input: &str) -> String {
    decode(input, false)
}

/// Decode the character references in an attribute value.
///
/// Differs from [`decode_entities`] in one place: a legacy reference without
/// its ';' followed by '=' or an alphanumeric is left alone, so
/// `?a=1&copy=2` keeps its query string.
#[must_use]
pub fn decode_attribute_value(input: &str) -> String {
    decode(input, true)
}

fn decode(input: &str, in_attribute: bool) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let consumed = if after.starts_with('#') {
            decode_numeric(after, &mut out)
        } else {
            decode_named(after, in_attribute, &mut out)
        };
        match consumed {
            Some(len) => rest = &after[len..],
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `after` starts at '#'. Returns the number of bytes consumed after the '&'.
fn decode_numeric(after: &str, out: &mut String) -> Option<usize> {
    let bytes = after.as_bytes();
    let (radix, digits_start) = match bytes.get(1) {
        Some(b'x' | b'X') => (16, 2),
        _ => (10, 1),
    };

    let digits_len = after[digits_start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit() || (radix == 16 && b.is_ascii_hexdigit()))
        .count();
    if digits_len == 0 {
        return None;
    }

    let digits = &after[digits_start..digits_start + digits_len];
    let value = digits.chars().fold(0u32, |acc, d| {
        // Overlong references saturate and end up as U+FFFD below.
        acc.saturating_mul(radix)
            .saturating_add(d.to_digit(radix).unwrap_or(0))
    });
    out.push(numeric_reference_char(value));

    let mut consumed = digits_start + digits_len;
    if bytes.get(consumed) == Some(&b';') {
        consumed += 1;
    }
    Some(consumed)
}

fn numeric_reference_char(value: u32) -> char {
    match value {
        0 => '\u{FFFD}',
        0x80..=0x9F => WINDOWS_1252[(value - 0x80) as usize],
        _ => char::from_u32(value).unwrap_or('\u{FFFD}'),
    }
}

fn decode_named(after: &str, in_attribute: bool, out: &mut String) -> Option<usize> {
    let name_len = after.bytes().take_while(u8::is_ascii_alphanumeric).count();
    if name_len == 0 {
        return None;
    }

    let name = &after[..name_len];
    if after[name_len..].starts_with(';')
        && let Some(value) = lookup_entity(&after[..=name_len])
    {
        out.push_str(value);
        return Some(name_len + 1);
    }

    // Legacy references: longest prefix that is a bare entity name.
    for len in (2..=name_len).rev() {
        if let Some(value) = lookup_entity(&name[..len]) {
            let next = after.as_bytes().get(len);
            if in_attribute && next.is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'=') {
                return None;
            }
            out.push_str(value);
            return Some(len);
        }
    }
    None
}

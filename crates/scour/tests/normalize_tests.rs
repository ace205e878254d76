//! Integration tests for the name and path normalizers and accent folding.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use scour::{fold_accents, normalize_name, normalize_path};

#[test]
fn test_normalize_path() {
    let cases = [
        ("ReAd ME.md", "read-me.md"),
        (
            "E88E08A7-279C-4CC1-8B90-86DE0D70443C.html",
            "e88e08a7-279c-4cc1-8b90-86de0d70443c.html",
        ),
        (
            "/user/test/I am a long url's_-?ASDF@£$%£%^testé.html",
            "/user/test/i-am-a-long-urls-asdfteste.html",
        ),
        ("/../../4-icon.jpg", "/4-icon.jpg"),
        ("/Images/../4-icon.jpg", "/images/4-icon.jpg"),
        ("../4 icon.*", "/4-icon."),
        ("Spac ey/Name/test før url", "spac-ey/name/test-foer-url"),
        ("../*", "/"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_path(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_normalize_name() {
    let cases = [
        ("ReAd ME.md", "read-me.md"),
        ("/var/etc/jobs/go/go/src/pkg/foo/bar.go", "bar.go"),
        ("I am a long url's_-?ASDF@£$%£%^é.html", "i-am-a-long-urls-asdf.html"),
        ("/../../4-icon.jpg", "4-icon.jpg"),
        ("/Images/../4-icon.jpg", "4-icon.jpg"),
        ("../4 icon.jpg", "4-icon.jpg"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_name(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_results_may_be_empty() {
    assert_eq!(normalize_name("???"), "");
    assert_eq!(normalize_path("@£$"), "");
    assert_eq!(normalize_path(""), "");
}

#[test]
fn test_dash_collapse_is_a_single_pass() {
    assert_eq!(normalize_name("a_-b"), "a-b");
    assert_eq!(normalize_name("a - b"), "a--b");
}

#[test]
fn test_fold_accents() {
    assert_eq!(fold_accents("café"), "cafe");
    assert_eq!(fold_accents("Łódź"), "Lodź");
    assert_eq!(fold_accents("Œuvre ß"), "OEuvre ss");
    assert_eq!(fold_accents("plain ascii"), "plain ascii");
}

// =============================================================================
// Properties
// =============================================================================

/// Names built from characters that never form runs of dashes.
#[derive(Debug, Clone)]
struct Segmented(String);

impl Arbitrary for Segmented {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[char] = &['a', 'B', '7', 'é', 'ø', '/', '.', '?', 'x'];
        let len = usize::arbitrary(g) % 32;
        let text = (0..len)
            .filter_map(|_| g.choose(ALPHABET).copied())
            .collect();
        Self(text)
    }
}

#[quickcheck]
fn normalize_path_is_idempotent(input: Segmented) -> bool {
    let once = normalize_path(&input.0);
    normalize_path(&once) == once
}

#[test]
fn test_filtered_characters_cannot_form_parent_references() {
    assert_eq!(normalize_path("a/.?./b"), "a/b");
    assert_eq!(normalize_path(".£./etc"), "/etc");
}

#[quickcheck]
fn normalized_paths_never_climb(input: String) -> bool {
    !normalize_path(&input).contains("..")
}

#[quickcheck]
fn normalized_names_have_no_separators(input: String) -> bool {
    let name = normalize_name(&input);
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

#[quickcheck]
fn normalizers_are_deterministic(input: String) -> bool {
    normalize_path(&input) == normalize_path(&input) && normalize_name(&input) == normalize_name(&input)
}

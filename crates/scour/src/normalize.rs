//! ASCII-safe file names and URL paths.

use std::sync::LazyLock;

use regex::Regex;

use crate::accents::fold_accents;
use crate::path::{base_name, clean_path};

/// Characters that join words and become a dash.
static JOINERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ &_=+:]").expect("joiner pattern is a valid regex"));

static ILLEGAL_IN_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z_~\-./]").expect("path character pattern is a valid regex")
});

static ILLEGAL_IN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^[:alnum:]\-.]").expect("name character pattern is a valid regex")
});

/// Turn arbitrary text into a lowercase ASCII URL path.
///
/// Parent references are removed after every other character has been
/// filtered, so the result never contains `..` and cannot climb out of
/// wherever it is joined. The result may be empty; an empty input gives
/// `""`, not `"."`.
///
/// ```
/// assert_eq!(scour::normalize_path("../4 icon.*"), "/4-icon.");
/// assert_eq!(scour::normalize_path("Spac ey/Name/test før url"), "spac-ey/name/test-foer-url");
/// ```
#[must_use]
pub fn normalize_path(text: &str) -> String {
    let lowered = text.to_lowercase();
    let dashed = JOINERS.replace_all(lowered.trim_matches(' '), "-");
    let folded = fold_accents(&dashed);
    let legal = ILLEGAL_IN_PATH.replace_all(&folded, "").replace("..", "");
    if legal.is_empty() {
        return legal;
    }
    clean_path(&legal).replace("--", "-")
}

/// Turn arbitrary text into a lowercase ASCII file name.
///
/// Only the last path segment is kept. Unlike [`normalize_path`], accented
/// letters are dropped rather than folded.
///
/// ```
/// assert_eq!(scour::normalize_name("ReAd ME.md"), "read-me.md");
/// assert_eq!(scour::normalize_name("/var/src/pkg/foo/bar.go"), "bar.go");
/// ```
#[must_use]
pub fn normalize_name(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = clean_path(base_name(&lowered));
    let dashed = JOINERS.replace_all(cleaned.trim_matches(' '), "-");
    ILLEGAL_IN_NAME.replace_all(&dashed, "").replace("--", "-")
}

//! Title normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Anything that is neither a word character nor whitespace.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));

/// Canonicalize a title for equality comparison.
///
/// Lower-cases the input, removes every character that is not a word
/// character or whitespace, and trims the ends. Inner whitespace is left
/// alone, so `"Mission: Impossible"` becomes `"mission impossible"` while
/// `"Mission - Impossible"` becomes `"mission  impossible"`.
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    PUNCTUATION.replace_all(&lowered, "").trim().to_string()
}

/// Two titles match when their normalized forms are identical.
pub fn is_title_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

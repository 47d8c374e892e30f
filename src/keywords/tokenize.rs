// Word tokenizer for keyword extraction.
//
// A token is an ASCII letter followed by one or more letters, hyphens or
// apostrophes. Everything else (digits, punctuation, whitespace, non-ASCII)
// separates tokens. Case is preserved because the classifier looks at
// capitalization.

use std::sync::LazyLock;

use regex_lite::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z'-]+").expect("token pattern is valid"));

/// Scan `text` left to right and yield raw tokens in order.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

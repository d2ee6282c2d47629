//! Token normalizer.
//!
//! Turns raw text into the canonical sequence of word tokens every later stage
//! works on: lowercase the text, pull out each maximal run of word characters
//! (letters, digits, underscore), then NFKC-normalize each run and split it on
//! any whitespace the normalization introduced.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A normalized, lowercase word token.
pub type Token = String;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("Word run regex pattern is valid and should compile"));

/// Tokenize text into normalized word tokens, in order of appearance.
///
/// Punctuation and whitespace only act as separators and never appear in the
/// output. Empty input yields an empty vector.
///
/// A run whose NFKC form contains interior whitespace (some Arabic ligatures
/// expand to a phrase) becomes several tokens rather than one token with
/// spaces, so no token ever contains whitespace.
///
/// # Examples
///
/// ```rust
/// use resumatch::text::tokenize;
///
/// let tokens = tokenize("Rust, Python & SQL!");
/// assert_eq!(tokens, vec!["rust", "python", "sql"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();

    WORD_PATTERN
        .find_iter(&lowered)
        .flat_map(|m| {
            let normalized: String = m.as_str().nfkc().collect();
            // Some compatibility ligatures expand to several words.
            normalized.split_whitespace().map(str::to_string).collect::<Vec<_>>()
        })
        .collect()
}

//! Terms a posting singles out with hiring phrases.
//!
//! "We are looking for engineers who..." emphasizes `engineer`. Only the
//! first occurrence of each phrase counts, and only when a word follows it
//! directly (whitespace allowed, punctuation not).

use crate::Result;
use crate::lemma::Lemmatizer;
use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases checked, in output order.
pub const HIRING_PHRASES: &[&str] = &["we are looking for", "company is looking for", "we need", "company needs"];

static LEADING_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)").expect("Leading word regex pattern is valid and should compile"));

/// Lemmas of the words directly following each hiring phrase.
///
/// Matching is case-insensitive. A phrase that does not occur, or is not
/// followed by a word, contributes nothing. The same lemma can appear twice
/// when two phrases point at it.
///
/// # Errors
///
/// Propagates tagger failures.
pub fn emphasized_terms(text: &str, lemmatizer: &Lemmatizer) -> Result<Vec<String>> {
    let lowered = text.to_lowercase();
    let mut terms = Vec::new();

    for phrase in HIRING_PHRASES {
        let Some(start) = lowered.find(phrase) else {
            continue;
        };
        let rest = &lowered[start + phrase.len()..];
        if let Some(word) = LEADING_WORD.captures(rest).and_then(|caps| caps.get(1)) {
            terms.push(lemmatizer.lemmatize(word.as_str())?);
        }
    }

    Ok(terms)
}

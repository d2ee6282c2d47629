//! Exclusion sets: words that are never counted as terms.
//!
//! An exclusion set has two layers:
//!
//! - a static [`ExclusionVocabulary`] of generic words (articles, pronouns,
//!   prepositions, auxiliary verbs, posting boilerplate). The default one is
//!   embedded in the binary (`resources/excluded_words.json`) and parsed once.
//! - company-name terms, added per analysis: the full lowercased name, each of
//!   its words, its initials, and its tokenized words.
//!
//! Job postings repeat the hiring company's name and abbreviation often enough
//! to dominate a frequency ranking; the company layer removes exactly that
//! noise.
//!
//! The vocabulary document may group words into categories and nest lists to
//! any depth. Every string leaf is a word; object keys are only labels.
//!
//! # Usage
//!
//! ```rust
//! use resumatch::exclusion::{build_exclusion_set, default_vocabulary};
//!
//! # fn main() -> resumatch::Result<()> {
//! let vocabulary = default_vocabulary()?;
//! let exclusions = build_exclusion_set(&vocabulary, Some("Acme Corp"));
//!
//! assert!(exclusions.contains("the"));
//! assert!(exclusions.contains("acme"));
//! assert!(exclusions.contains("ac"));
//! assert!(!exclusions.contains("python"));
//! # Ok(())
//! # }
//! ```

use crate::text::tokenize;
use crate::{Result, ResumatchError};
use ahash::AHashSet;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

const EMBEDDED_EXCLUDED_WORDS: &str = include_str!("../../resources/excluded_words.json");

/// Static, process-wide exclusion words.
#[derive(Debug, Clone, Default)]
pub struct ExclusionVocabulary {
    words: AHashSet<String>,
}

static DEFAULT_VOCABULARY: Lazy<std::result::Result<Arc<ExclusionVocabulary>, String>> = Lazy::new(|| {
    ExclusionVocabulary::from_json_str(EMBEDDED_EXCLUDED_WORDS)
        .map(|vocabulary| {
            tracing::info!("Loaded embedded exclusion vocabulary: {} words", vocabulary.len());
            Arc::new(vocabulary)
        })
        .map_err(|e| e.to_string())
});

/// Get the embedded exclusion vocabulary, parsing it on first call.
///
/// # Errors
///
/// Returns `ResumatchError::ConfigurationMissing` if the embedded resource
/// cannot be parsed.
pub fn default_vocabulary() -> Result<Arc<ExclusionVocabulary>> {
    DEFAULT_VOCABULARY.as_ref().map(Arc::clone).map_err(|e| {
        ResumatchError::configuration_missing(format!("Embedded exclusion vocabulary unavailable: {}", e))
    })
}

impl ExclusionVocabulary {
    /// Build a vocabulary from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().trim().to_lowercase()).collect(),
        }
    }

    /// Parse a vocabulary document, flattening every string leaf.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;

        let mut words = AHashSet::new();
        let skipped = flatten_words(&value, &mut words);
        if skipped > 0 {
            tracing::warn!("Ignored {} non-string entries in exclusion vocabulary", skipped);
        }

        Ok(Self { words })
    }

    /// Load a vocabulary document from disk.
    ///
    /// # Errors
    ///
    /// Returns `ResumatchError::ConfigurationMissing` if the file cannot be
    /// read or is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumatchError::configuration_missing_with_source(
                format!("Failed to read exclusion word list {}", path.display()),
                e,
            )
        })?;

        Self::from_json_str(&content).map_err(|e| {
            ResumatchError::configuration_missing_with_source(
                format!("Invalid exclusion word list {}", path.display()),
                e,
            )
        })
    }

    /// Add more words to the vocabulary.
    pub fn with_additional_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Collect string leaves into `words`, returning how many non-string leaves
/// were skipped.
fn flatten_words(value: &Value, words: &mut AHashSet<String>) -> usize {
    match value {
        Value::String(word) => {
            let word = word.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
            0
        }
        Value::Array(items) => items.iter().map(|item| flatten_words(item, words)).sum(),
        Value::Object(map) => map.values().map(|item| flatten_words(item, words)).sum(),
        Value::Null => 0,
        Value::Bool(_) | Value::Number(_) => 1,
    }
}

/// Terms derived from a company name.
///
/// Returns the full lowercased name, each whitespace-separated word, the
/// initials (first character of every word) and finally the name's
/// [`tokenize`] forms, deduplicated, in that order. The tokenized forms cover
/// punctuated names such as "Acme, Inc.", whose raw words never equal a token.
/// Blank names yield nothing.
///
/// ```rust
/// use resumatch::exclusion::company_name_variants;
///
/// assert_eq!(
///     company_name_variants("  Acme Corp "),
///     vec!["acme corp", "acme", "corp", "ac"]
/// );
/// assert!(company_name_variants("   ").is_empty());
/// ```
pub fn company_name_variants(company_name: &str) -> Vec<String> {
    let name = company_name.trim().to_lowercase();
    if name.is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    let initials: String = words.iter().filter_map(|word| word.chars().next()).collect();

    let mut variants = vec![name.clone()];
    for candidate in words
        .iter()
        .map(|w| w.to_string())
        .chain(std::iter::once(initials))
        .chain(tokenize(&name))
    {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// The words ignored for one analysis: the static vocabulary plus
/// company-derived terms.
///
/// Membership is exact string equality; all members are lowercase.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    vocabulary: Arc<ExclusionVocabulary>,
    company_terms: AHashSet<String>,
}

impl ExclusionSet {
    pub fn contains(&self, word: &str) -> bool {
        self.company_terms.contains(word) || self.vocabulary.contains(word)
    }

    /// Company-derived terms in this set.
    pub fn company_terms(&self) -> impl Iterator<Item = &str> {
        self.company_terms.iter().map(String::as_str)
    }

    /// Number of distinct words in the set.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
            + self
                .company_terms
                .iter()
                .filter(|term| !self.vocabulary.contains(term))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the exclusion set for one analysis.
///
/// The shared vocabulary is not copied or mutated; company terms are layered
/// on top.
pub fn build_exclusion_set(vocabulary: &Arc<ExclusionVocabulary>, company_name: Option<&str>) -> ExclusionSet {
    let company_terms: AHashSet<String> = company_name
        .map(company_name_variants)
        .unwrap_or_default()
        .into_iter()
        .collect();

    ExclusionSet {
        vocabulary: Arc::clone(vocabulary),
        company_terms,
    }
}

//! Shared types for term extraction.

use serde::{Deserialize, Serialize};

/// A ranked term with its statistics.
///
/// `term` is either a single lemma or two adjacent lemmas joined by one space.
/// Ranked output only ever holds terms with `count > 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermStat {
    /// The keyword or bigram.
    pub term: String,

    /// Occurrences in the document.
    pub count: usize,

    /// Importance on a 1-10 scale, relative to the most frequent term of the
    /// same document.
    pub score: u8,
}

impl TermStat {
    pub fn new(term: impl Into<String>, count: usize, score: u8) -> Self {
        Self {
            term: term.into(),
            count,
            score,
        }
    }
}

/// Which kind of term an extraction produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// Single lemmas.
    Keyword,

    /// Pairs of adjacent lemmas.
    Bigram,
}

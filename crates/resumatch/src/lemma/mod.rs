//! Lemmatization.
//!
//! Reduces a token to its dictionary base form:
//!
//! 1. A [`PosTagger`] tags the token in isolation (no sentence context).
//! 2. The Penn Treebank tag is mapped to a [`PosBucket`], defaulting to noun
//!    when the tag is not adjective/noun/verb/adverb.
//! 3. The [`Lemmatizer`] runs dictionary morphology for that part of speech
//!    against the embedded [`Lexicon`].
//! 4. A manual override table rewrites known domain mis-lemmatizations
//!    (e.g. `engineering` to `engineer`).
//!
//! # Example
//!
//! ```rust
//! use resumatch::lemma::{Lemmatizer, lexicon};
//!
//! # fn main() -> resumatch::Result<()> {
//! let lemmatizer = Lemmatizer::new(lexicon()?);
//! assert_eq!(lemmatizer.lemmatize("requirements")?, "requirement");
//! assert_eq!(lemmatizer.lemmatize("engineering")?, "engineer");
//! # Ok(())
//! # }
//! ```

pub mod lemmatizer;
pub mod lexicon;
pub mod tagger;

pub use lemmatizer::{DEFAULT_LEMMA_OVERRIDES, Lemmatizer};
pub use lexicon::{Lexicon, lexicon};
pub use tagger::{HeuristicTagger, PosTagger};

use serde::{Deserialize, Serialize};

/// The four part-of-speech buckets the lemmatizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosBucket {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosBucket {
    /// Map a Penn Treebank tag to a bucket by its first letter.
    ///
    /// Anything other than `J*`, `N*`, `V*` or `R*` (determiners, numbers,
    /// unknown tags) maps to [`PosBucket::Noun`].
    pub fn from_penn_tag(tag: &str) -> Self {
        match tag.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('J') => PosBucket::Adjective,
            Some('V') => PosBucket::Verb,
            Some('R') => PosBucket::Adverb,
            _ => PosBucket::Noun,
        }
    }
}

//! Keyword and bigram extraction.
//!
//! Text is tokenized, filtered against an exclusion set, lemmatized, counted
//! and ranked. Terms occurring once are never reported.
//!
//! # Examples
//!
//! ```rust
//! use resumatch::exclusion::default_vocabulary;
//! use resumatch::keywords::TermExtractor;
//! use resumatch::lemma::{Lemmatizer, lexicon};
//!
//! # fn main() -> resumatch::Result<()> {
//! let extractor = TermExtractor::new(Lemmatizer::new(lexicon()?), default_vocabulary()?);
//! let text = "Python engineers write Python. Engineering is fun.";
//!
//! let keywords = extractor.extract_keywords(text, Some(5), None)?;
//! assert_eq!(keywords[0].term, "python");
//! assert_eq!(keywords[0].score, 10);
//! # Ok(())
//! # }
//! ```

pub mod emphasis;
pub mod extractor;
pub mod scoring;
pub mod types;

pub use emphasis::{HIRING_PHRASES, emphasized_terms};
pub use extractor::{TermExtractor, rank};
pub use scoring::score;
pub use types::{TermKind, TermStat};

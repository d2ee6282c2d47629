//! Resumatch - Resume and Job Posting Term Matching
//!
//! Resumatch compares a free-text resume against a free-text job posting and
//! reports which important terms and two-word phrases of the posting the
//! resume covers, each weighted by a 1-10 importance score.
//!
//! # Quick Start
//!
//! ```rust
//! use resumatch::analyze_resume_against_job;
//!
//! # fn main() -> resumatch::Result<()> {
//! let job = "We need Python engineers. Python engineering at Acme: Python, SQL, SQL.";
//! let resume = "Python developer. Python and SQL every day.";
//!
//! let result = analyze_resume_against_job(resume, job, Some("Acme"))?;
//! for matched in &result.keyword_matches {
//!     println!("{} (job mentions: {})", matched.term, matched.job_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Text** (`text`): tokenization and Unicode normalization
//! - **Lemma** (`lemma`): part-of-speech tagging and dictionary lemmatization
//! - **Exclusion** (`exclusion`): static vocabulary plus per-call company terms
//! - **Keywords** (`keywords`): counting, scoring, and ranking of keywords and bigrams
//! - **Matcher** (`matcher`): reconciling job terms against the resume vocabulary
//! - **Core** (`core`): configuration and the [`Analyzer`] service
//!
//! Resources (lexicon, exclusion vocabulary) are embedded and parsed once per
//! process. Every analysis is a pure function of its inputs.

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod exclusion;
pub mod keywords;
pub mod lemma;
pub mod matcher;
pub mod text;
pub mod types;

pub use error::{Result, ResumatchError};
pub use types::*;

pub use core::analyzer::{Analyzer, analyze_resume_against_job, default_analyzer, ensure_resources_available};
pub use core::config::AnalysisConfig;

pub use exclusion::{ExclusionSet, ExclusionVocabulary, build_exclusion_set, company_name_variants};
pub use keywords::emphasized_terms;
pub use lemma::{Lemmatizer, PosBucket, PosTagger};
pub use matcher::count_term_occurrences;
pub use text::tokenize;

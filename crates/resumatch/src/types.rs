use serde::{Deserialize, Serialize};

pub use crate::keywords::types::{TermKind, TermStat};

/// A job-side term also present in the resume.
///
/// `job_count` is how often the posting used the term, not the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatch {
    pub term: String,
    pub job_count: usize,
}

impl TermMatch {
    pub fn new(term: impl Into<String>, job_count: usize) -> Self {
        Self {
            term: term.into(),
            job_count,
        }
    }
}

/// Outcome of comparing one resume against one job posting.
///
/// Every job-side term ends up in exactly one of the match or missing lists
/// of its kind. Resume lists are display slices; matching always consults the
/// resume's full vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub top_job_keywords: Vec<TermStat>,
    pub top_job_bigrams: Vec<TermStat>,
    pub top_resume_keywords: Vec<TermStat>,
    pub top_resume_bigrams: Vec<TermStat>,

    /// Job keywords found in the resume, in job rank order.
    pub keyword_matches: Vec<TermMatch>,

    /// Job bigrams found in the resume, in job rank order.
    pub bigram_matches: Vec<TermMatch>,

    /// Job keywords the resume never repeats.
    pub missing_keywords: Vec<String>,

    /// Job bigrams the resume never repeats.
    pub missing_bigrams: Vec<String>,
}

impl AnalysisResult {
    /// True when neither side produced any ranked term.
    pub fn is_empty(&self) -> bool {
        self.top_job_keywords.is_empty()
            && self.top_job_bigrams.is_empty()
            && self.top_resume_keywords.is_empty()
            && self.top_resume_bigrams.is_empty()
    }

    /// Share of job keywords present in the resume, in `[0, 1]`.
    ///
    /// `None` when the job produced no keywords.
    pub fn keyword_coverage(&self) -> Option<f64> {
        let total = self.keyword_matches.len() + self.missing_keywords.len();
        (total > 0).then(|| self.keyword_matches.len() as f64 / total as f64)
    }
}

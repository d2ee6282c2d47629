//! Reconciles job-side ranked terms against the resume's vocabulary.
//!
//! Matching is exact string equality on lemmas. The job side contributes its
//! top terms; the resume side always contributes its complete ranked
//! vocabulary, so a job term ranked sixth in the resume still matches.

use crate::types::{AnalysisResult, TermMatch, TermStat};
use crate::{Result, ResumatchError};
use ahash::AHashSet;
use indexmap::IndexMap;
use regex::Regex;

/// Job terms split by presence in the resume vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPartition {
    pub matches: Vec<TermMatch>,
    pub missing: Vec<String>,
}

/// Split `job_terms` into matches and missing terms, keeping job order.
///
/// Each job term lands in exactly one of the two lists.
pub fn partition_terms(job_terms: &[TermStat], resume_vocabulary: &[TermStat]) -> TermPartition {
    let resume_terms: AHashSet<&str> = resume_vocabulary.iter().map(|stat| stat.term.as_str()).collect();

    let mut partition = TermPartition::default();
    for stat in job_terms {
        if resume_terms.contains(stat.term.as_str()) {
            partition.matches.push(TermMatch::new(stat.term.clone(), stat.count));
        } else {
            partition.missing.push(stat.term.clone());
        }
    }
    partition
}

/// Extracted terms for both documents, ready to be reconciled.
#[derive(Debug, Clone, Default)]
pub struct ExtractedTerms {
    pub job_keywords: Vec<TermStat>,
    pub job_bigrams: Vec<TermStat>,

    /// Complete ranked resume keywords.
    pub resume_keywords: Vec<TermStat>,

    /// Complete ranked resume bigrams.
    pub resume_bigrams: Vec<TermStat>,
}

/// Build the final result.
///
/// Resume lists are cut to `resume_display_top_n` for display only, after
/// matching has consulted the complete vocabularies.
pub fn reconcile(terms: ExtractedTerms, resume_display_top_n: usize) -> AnalysisResult {
    let keywords = partition_terms(&terms.job_keywords, &terms.resume_keywords);
    let bigrams = partition_terms(&terms.job_bigrams, &terms.resume_bigrams);

    let mut top_resume_keywords = terms.resume_keywords;
    top_resume_keywords.truncate(resume_display_top_n);
    let mut top_resume_bigrams = terms.resume_bigrams;
    top_resume_bigrams.truncate(resume_display_top_n);

    AnalysisResult {
        top_job_keywords: terms.job_keywords,
        top_job_bigrams: terms.job_bigrams,
        top_resume_keywords,
        top_resume_bigrams,
        keyword_matches: keywords.matches,
        bigram_matches: bigrams.matches,
        missing_keywords: keywords.missing,
        missing_bigrams: bigrams.missing,
    }
}

/// Whole-word occurrences of each term in the raw text, case-insensitive.
///
/// Works for keywords and space-joined bigrams alike. Terms are matched
/// literally, not lemmatized, so "engineer" does not count "engineers".
/// Every requested term is present in the output, with 0 when absent.
///
/// ```rust
/// use resumatch::matcher::count_term_occurrences;
///
/// # fn main() -> resumatch::Result<()> {
/// let counts = count_term_occurrences("Python, python and C++.", &["python", "rust"])?;
/// assert_eq!(counts["python"], 2);
/// assert_eq!(counts["rust"], 0);
/// # Ok(())
/// # }
/// ```
pub fn count_term_occurrences<S: AsRef<str>>(text: &str, terms: &[S]) -> Result<IndexMap<String, usize>> {
    let lowered = text.to_lowercase();
    let mut counts = IndexMap::with_capacity(terms.len());

    for term in terms {
        let term = term.as_ref().to_lowercase();
        if counts.contains_key(&term) {
            continue;
        }
        if term.trim().is_empty() {
            counts.insert(term, 0);
            continue;
        }

        let pattern = format!(r"\b{}\b", regex::escape(&term));
        let regex = Regex::new(&pattern).map_err(|e| {
            ResumatchError::validation_with_source(format!("Cannot build occurrence pattern for '{}'", term), e)
        })?;
        let count = regex.find_iter(&lowered).count();
        counts.insert(term, count);
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(entries: &[(&str, usize)]) -> Vec<TermStat> {
        entries.iter().map(|(t, c)| TermStat::new(*t, *c, 5)).collect()
    }

    #[test]
    fn test_partition_reports_job_counts() {
        let job = stats(&[("python", 3), ("engineer", 2)]);
        let resume = stats(&[("python", 7), ("sql", 2)]);

        let partition = partition_terms(&job, &resume);
        assert_eq!(partition.matches, vec![TermMatch::new("python", 3)]);
        assert_eq!(partition.missing, vec!["engineer".to_string()]);
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let job = stats(&[("a", 5), ("b", 4), ("c", 3), ("d", 2)]);
        let resume = stats(&[("c", 2), ("a", 2), ("z", 2)]);

        let partition = partition_terms(&job, &resume);
        let matched: Vec<&str> = partition.matches.iter().map(|m| m.term.as_str()).collect();

        assert_eq!(matched, vec!["a", "c"]);
        assert_eq!(partition.missing, vec!["b".to_string(), "d".to_string()]);
        assert_eq!(partition.matches.len() + partition.missing.len(), job.len());
    }

    #[test]
    fn test_partition_empty_resume() {
        let job = stats(&[("python", 3)]);
        let partition = partition_terms(&job, &[]);
        assert!(partition.matches.is_empty());
        assert_eq!(partition.missing, vec!["python".to_string()]);
    }

    #[test]
    fn test_reconcile_matches_beyond_display_slice() {
        let resume = stats(&[("a", 9), ("b", 8), ("c", 7), ("d", 6), ("e", 5), ("rust", 2)]);
        let terms = ExtractedTerms {
            job_keywords: stats(&[("rust", 4)]),
            resume_keywords: resume,
            ..Default::default()
        };

        let result = reconcile(terms, 5);
        assert_eq!(result.top_resume_keywords.len(), 5);
        assert!(result.top_resume_keywords.iter().all(|s| s.term != "rust"));
        assert_eq!(result.keyword_matches, vec![TermMatch::new("rust", 4)]);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_reconcile_empty() {
        let result = reconcile(ExtractedTerms::default(), 5);
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_count_occurrences_whole_words() {
        let text = "Engineer, engineering and ENGINEER. Data pipelines; data pipeline.";
        let counts = count_term_occurrences(text, &["engineer", "data pipeline", "pipeline"]).unwrap();

        assert_eq!(counts["engineer"], 2);
        assert_eq!(counts["data pipeline"], 1);
        assert_eq!(counts["pipeline"], 1);
    }

    #[test]
    fn test_count_occurrences_escapes_metacharacters() {
        let counts = count_term_occurrences("node.js or nodexjs", &["node.js"]).unwrap();
        assert_eq!(counts["node.js"], 1);
    }

    #[test]
    fn test_count_occurrences_keeps_absent_terms() {
        let counts = count_term_occurrences("", &["kotlin", "swift"]).unwrap();
        let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["kotlin", "swift"]);
        assert!(counts.values().all(|&c| c == 0));
    }
}

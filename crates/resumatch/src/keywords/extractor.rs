//! Keyword and bigram extraction.
//!
//! Both extractions share one token stream: tokenize, drop tokens in the
//! exclusion set, lemmatize the survivors. Exclusion is checked on the token
//! before lemmatization, so an inflected form of an excluded word survives
//! when its own spelling is not excluded.

use super::scoring;
use super::types::{TermKind, TermStat};
use crate::Result;
use crate::exclusion::{ExclusionSet, ExclusionVocabulary, build_exclusion_set};
use crate::lemma::Lemmatizer;
use crate::text::tokenize;
use indexmap::IndexMap;
use std::sync::Arc;

/// Extracts ranked keywords and bigrams from free text.
///
/// Holds no per-call state; one extractor can serve any number of threads.
#[derive(Debug, Clone)]
pub struct TermExtractor {
    lemmatizer: Lemmatizer,
    vocabulary: Arc<ExclusionVocabulary>,
}

impl TermExtractor {
    pub fn new(lemmatizer: Lemmatizer, vocabulary: Arc<ExclusionVocabulary>) -> Self {
        Self { lemmatizer, vocabulary }
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    pub fn vocabulary(&self) -> &Arc<ExclusionVocabulary> {
        &self.vocabulary
    }

    /// Exclusion set for one call.
    pub fn exclusions(&self, company_name: Option<&str>) -> ExclusionSet {
        build_exclusion_set(&self.vocabulary, company_name)
    }

    /// Lemmas of every token that survives the exclusion set, in text order.
    ///
    /// Duplicates are kept. This is the stream keywords are counted over and
    /// bigrams are paired from.
    ///
    /// # Errors
    ///
    /// Propagates tagger failures.
    pub fn filtered_lemmas(&self, text: &str, exclusions: &ExclusionSet) -> Result<Vec<String>> {
        tokenize(text)
            .into_iter()
            .filter(|token| !exclusions.contains(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect()
    }

    /// Occurrence count of each lemma, in first-seen order.
    pub fn keyword_counts(&self, text: &str, exclusions: &ExclusionSet) -> Result<IndexMap<String, usize>> {
        let mut counts = IndexMap::new();
        for lemma in self.filtered_lemmas(text, exclusions)? {
            *counts.entry(lemma).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Occurrence count of each adjacent lemma pair, in first-seen order.
    ///
    /// Pairs are formed in the filtered stream, so two lemmas separated only
    /// by excluded tokens still pair up.
    pub fn bigram_counts(&self, text: &str, exclusions: &ExclusionSet) -> Result<IndexMap<String, usize>> {
        let lemmas = self.filtered_lemmas(text, exclusions)?;
        let mut counts = IndexMap::new();
        for pair in lemmas.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Ranked keywords.
    ///
    /// Sorted by count descending, ties in first-seen order. Terms seen once
    /// are dropped. `top_n` truncates after the drop; `None` keeps everything.
    ///
    /// # Errors
    ///
    /// Propagates tagger failures.
    pub fn extract_keywords(
        &self,
        text: &str,
        top_n: Option<usize>,
        company_name: Option<&str>,
    ) -> Result<Vec<TermStat>> {
        self.extract(TermKind::Keyword, text, top_n, company_name)
    }

    /// Ranked bigrams, ordered and filtered the same way as keywords.
    ///
    /// # Errors
    ///
    /// Propagates tagger failures.
    pub fn extract_bigrams(
        &self,
        text: &str,
        top_n: Option<usize>,
        company_name: Option<&str>,
    ) -> Result<Vec<TermStat>> {
        self.extract(TermKind::Bigram, text, top_n, company_name)
    }

    pub fn extract(
        &self,
        kind: TermKind,
        text: &str,
        top_n: Option<usize>,
        company_name: Option<&str>,
    ) -> Result<Vec<TermStat>> {
        let exclusions = self.exclusions(company_name);
        let counts = match kind {
            TermKind::Keyword => self.keyword_counts(text, &exclusions)?,
            TermKind::Bigram => self.bigram_counts(text, &exclusions)?,
        };
        let distinct = counts.len();
        let ranked = rank(counts, top_n);

        tracing::debug!(
            kind = ?kind,
            distinct,
            ranked = ranked.len(),
            excluded = exclusions.len(),
            "Extracted terms"
        );

        Ok(ranked)
    }
}

/// Score, sort by count descending (stable), drop singletons, truncate.
pub fn rank(counts: IndexMap<String, usize>, top_n: Option<usize>) -> Vec<TermStat> {
    let scores = scoring::score(&counts);

    let mut ranked: Vec<TermStat> = counts
        .into_iter()
        .zip(scores.into_values())
        .map(|((term, count), score)| TermStat { term, count, score })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.retain(|stat| stat.count > 1);

    if let Some(n) = top_n {
        ranked.truncate(n);
    }

    ranked
}

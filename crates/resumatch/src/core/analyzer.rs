//! Analysis service.
//!
//! An [`Analyzer`] is built once, with every resource loaded up front, and is
//! then immutable. It is `Send + Sync` and cheap to clone, so one instance can
//! serve concurrent analyses.

use super::config::AnalysisConfig;
use crate::{Result, ResumatchError};
use crate::exclusion::{ExclusionVocabulary, default_vocabulary};
use crate::keywords::{TermExtractor, TermStat, emphasized_terms};
use crate::lemma::{Lemmatizer, PosTagger, lexicon};
use crate::matcher::{ExtractedTerms, reconcile};
use crate::types::AnalysisResult;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::sync::Arc;

static DEFAULT_ANALYZER: Lazy<std::result::Result<Analyzer, String>> =
    Lazy::new(|| Analyzer::with_defaults().map_err(|e| e.to_string()));

/// Shared analyzer with the default configuration, built on first call.
///
/// # Errors
///
/// Returns `ResumatchError::ConfigurationMissing` if it could not be built.
pub fn default_analyzer() -> Result<Analyzer> {
    DEFAULT_ANALYZER
        .as_ref()
        .cloned()
        .map_err(|e| ResumatchError::configuration_missing(format!("Default analyzer unavailable: {}", e)))
}

/// Compare a resume against a job posting with the default configuration.
///
/// `company_name`, when given, is excluded from both documents along with
/// each of its words and its initials.
///
/// ```rust
/// use resumatch::analyze_resume_against_job;
///
/// # fn main() -> resumatch::Result<()> {
/// let result = analyze_resume_against_job("", "python python rust rust", None)?;
/// assert!(result.top_resume_keywords.is_empty());
/// assert_eq!(result.missing_keywords, vec!["python", "rust"]);
/// # Ok(())
/// # }
/// ```
pub fn analyze_resume_against_job(
    resume_text: &str,
    job_text: &str,
    company_name: Option<&str>,
) -> Result<AnalysisResult> {
    default_analyzer()?.analyze(resume_text, job_text, company_name)
}

/// Make sure the embedded lexicon and exclusion vocabulary load.
///
/// Both are parsed lazily on first use; calling this at startup moves any
/// failure there instead of into the first analysis.
///
/// # Errors
///
/// Returns `ResumatchError::ConfigurationMissing` if either resource is
/// unusable.
pub fn ensure_resources_available() -> Result<()> {
    lexicon()?;
    default_vocabulary()?;
    Ok(())
}

/// Compares resumes against job postings.
///
/// # Example
///
/// ```rust
/// use resumatch::{AnalysisConfig, Analyzer};
///
/// # fn main() -> resumatch::Result<()> {
/// let analyzer = Analyzer::new(AnalysisConfig::default())?;
/// let result = analyzer.analyze(
///     "python developer",
///     "python python python engineer engineer",
///     None,
/// )?;
///
/// assert_eq!(result.top_job_keywords[0].term, "python");
/// assert_eq!(result.missing_keywords, vec!["python", "engineer"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Arc<AnalysisConfig>,
    extractor: TermExtractor,
}

impl Analyzer {
    /// Validate `config` and load every resource it names.
    ///
    /// # Errors
    ///
    /// - `ResumatchError::Validation` if the configuration is unusable
    /// - `ResumatchError::ConfigurationMissing` if the exclusion vocabulary or
    ///   lexicon cannot be loaded
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        ensure_resources_available()?;

        let vocabulary = load_vocabulary(&config)?;
        let lemmatizer = Lemmatizer::new(lexicon()?).with_overrides(config.lemma_overrides.clone());

        tracing::info!(
            excluded_words = vocabulary.len(),
            tagger = lemmatizer.tagger_name(),
            job_top_n = config.job_top_n,
            "Analyzer initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            extractor: TermExtractor::new(lemmatizer, vocabulary),
        })
    }

    /// Analyzer with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(AnalysisConfig::default())
    }

    /// Replace the part-of-speech tagger.
    pub fn with_tagger(self, tagger: Arc<dyn PosTagger>) -> Self {
        let lemmatizer = self.extractor.lemmatizer().clone().with_tagger(tagger);
        let vocabulary = Arc::clone(self.extractor.vocabulary());

        Self {
            config: self.config,
            extractor: TermExtractor::new(lemmatizer, vocabulary),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn extractor(&self) -> &TermExtractor {
        &self.extractor
    }

    /// Ranked keywords of one document. `None` keeps every repeated term.
    pub fn extract_keywords(
        &self,
        text: &str,
        top_n: Option<usize>,
        company_name: Option<&str>,
    ) -> Result<Vec<TermStat>> {
        self.extractor.extract_keywords(text, top_n, company_name)
    }

    /// Ranked bigrams of one document. `None` keeps every repeated pair.
    pub fn extract_bigrams(
        &self,
        text: &str,
        top_n: Option<usize>,
        company_name: Option<&str>,
    ) -> Result<Vec<TermStat>> {
        self.extractor.extract_bigrams(text, top_n, company_name)
    }

    /// Lemmas a posting singles out with hiring phrases ("we need ...").
    pub fn emphasized_terms(&self, text: &str) -> Result<Vec<String>> {
        emphasized_terms(text, self.extractor.lemmatizer())
    }

    /// Compare one resume against one job posting.
    ///
    /// Job terms are cut to `job_top_n` before matching; the resume side is
    /// matched on its full ranked vocabulary and cut to
    /// `resume_display_top_n` only for display. Empty inputs produce empty
    /// lists, never an error.
    ///
    /// # Errors
    ///
    /// Propagates tagger failures.
    pub fn analyze(&self, resume_text: &str, job_text: &str, company_name: Option<&str>) -> Result<AnalysisResult> {
        let job_top_n = Some(self.config.job_top_n);

        let terms = ExtractedTerms {
            job_keywords: self.extractor.extract_keywords(job_text, job_top_n, company_name)?,
            job_bigrams: self.extractor.extract_bigrams(job_text, job_top_n, company_name)?,
            resume_keywords: self.extractor.extract_keywords(resume_text, None, company_name)?,
            resume_bigrams: self.extractor.extract_bigrams(resume_text, None, company_name)?,
        };

        let result = reconcile(terms, self.config.resume_display_top_n);

        tracing::debug!(
            keyword_matches = result.keyword_matches.len(),
            missing_keywords = result.missing_keywords.len(),
            bigram_matches = result.bigram_matches.len(),
            missing_bigrams = result.missing_bigrams.len(),
            "Analysis complete"
        );

        Ok(result)
    }

    /// Analyze many `(resume, job)` pairs in parallel.
    ///
    /// Results are in input order and identical to calling [`Self::analyze`]
    /// on each pair. The first failure is returned.
    pub fn analyze_batch(&self, pairs: &[(&str, &str)], company_name: Option<&str>) -> Result<Vec<AnalysisResult>> {
        if pairs.len() < 2 {
            return pairs
                .iter()
                .map(|(resume, job)| self.analyze(resume, job, company_name))
                .collect();
        }

        pairs
            .par_iter()
            .map(|(resume, job)| self.analyze(resume, job, company_name))
            .collect()
    }
}

fn load_vocabulary(config: &AnalysisConfig) -> Result<Arc<ExclusionVocabulary>> {
    let base = match &config.excluded_words_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading exclusion vocabulary from file");
            ExclusionVocabulary::from_json_file(path)?
        }
        None if config.additional_excluded_words.is_empty() => return default_vocabulary(),
        None => (*default_vocabulary()?).clone(),
    };

    Ok(Arc::new(
        base.with_additional_words(config.additional_excluded_words.iter().map(String::as_str)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_analyzer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }

    #[test]
    fn test_ensure_resources_available() {
        assert!(ensure_resources_available().is_ok());
    }

    #[test]
    fn test_default_analyzer_shared_resources() {
        let a = default_analyzer().unwrap();
        let b = default_analyzer().unwrap();
        assert!(Arc::ptr_eq(a.extractor().vocabulary(), b.extractor().vocabulary()));
        assert_eq!(a.config(), &AnalysisConfig::default());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Analyzer::new(AnalysisConfig::default().with_job_top_n(0)).unwrap_err();
        assert!(matches!(err, ResumatchError::Validation { .. }));
    }

    #[test]
    fn test_missing_vocabulary_file_is_fatal() {
        let config = AnalysisConfig::default().with_excluded_words_path("/nonexistent/excluded_words.json");
        let err = Analyzer::new(config).unwrap_err();
        assert!(matches!(err, ResumatchError::ConfigurationMissing { .. }));
    }

    #[test]
    fn test_custom_vocabulary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"{"excluded_words": {"mine": ["python"]}}"#).unwrap();

        let analyzer = Analyzer::new(AnalysisConfig::default().with_excluded_words_path(&path)).unwrap();
        let keywords = analyzer.extract_keywords("python python the the", None, None).unwrap();

        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].term, "the");
    }

    #[test]
    fn test_additional_excluded_words() {
        let analyzer = Analyzer::new(AnalysisConfig::default().with_additional_excluded_words(["python"])).unwrap();
        let keywords = analyzer.extract_keywords("python python rust rust", None, None).unwrap();

        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["rust"]);
    }

    #[test]
    fn test_lemma_overrides_from_config() {
        let config = AnalysisConfig::default().with_lemma_override("developer", "dev");
        let analyzer = Analyzer::new(config).unwrap();
        let keywords = analyzer.extract_keywords("developers developer", None, None).unwrap();

        assert_eq!(keywords[0].term, "dev");
        assert_eq!(keywords[0].count, 2);
    }

    #[test]
    fn test_job_top_n_limits_job_side_only() {
        let analyzer = Analyzer::new(AnalysisConfig::default().with_job_top_n(1)).unwrap();
        let text = "rust rust rust python python sql sql";
        let result = analyzer.analyze(text, text, None).unwrap();

        assert_eq!(result.top_job_keywords.len(), 1);
        assert_eq!(result.top_resume_keywords.len(), 3);
    }

    #[test]
    fn test_with_tagger_is_used() {
        #[derive(Debug)]
        struct NounTagger;

        impl PosTagger for NounTagger {
            fn name(&self) -> &str {
                "noun"
            }

            fn tag(&self, _token: &str) -> Result<String> {
                Ok("NN".to_string())
            }
        }

        let analyzer = Analyzer::with_defaults().unwrap().with_tagger(Arc::new(NounTagger));
        assert_eq!(analyzer.extractor().lemmatizer().tagger_name(), "noun");

        let keywords = analyzer.extract_keywords("deployed deployed", None, None).unwrap();
        assert_eq!(keywords[0].term, "deployed");
    }

    #[test]
    fn test_emphasized_terms() {
        let analyzer = Analyzer::with_defaults().unwrap();
        let terms = analyzer.emphasized_terms("We are looking for developers.").unwrap();
        assert_eq!(terms, vec!["developer"]);
    }
}

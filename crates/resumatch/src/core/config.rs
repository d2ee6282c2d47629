//! Configuration loading and management.
//!
//! Analysis settings can be loaded from TOML, YAML, or JSON files, or
//! discovered as `resumatch.toml` in the working directory hierarchy.

use crate::{Result, ResumatchError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for by [`AnalysisConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "resumatch.toml";

/// Analysis configuration.
///
/// # Example
///
/// ```rust
/// use resumatch::core::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.job_top_n, 5);
///
/// // let config = AnalysisConfig::from_toml_file("resumatch.toml")?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Ranked job keywords and bigrams kept for matching
    #[serde(default = "default_top_n")]
    pub job_top_n: usize,

    /// Resume keywords and bigrams shown in the result. Matching always uses
    /// the full resume vocabulary.
    #[serde(default = "default_top_n")]
    pub resume_display_top_n: usize,

    /// Replacement for the embedded exclusion vocabulary (None = embedded)
    #[serde(default)]
    pub excluded_words_path: Option<PathBuf>,

    /// Words excluded in addition to the vocabulary
    #[serde(default)]
    pub additional_excluded_words: Vec<String>,

    /// Lemma corrections merged over the built-in overrides
    #[serde(default)]
    pub lemma_overrides: IndexMap<String, String>,
}

fn default_top_n() -> usize {
    5
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            job_top_n: default_top_n(),
            resume_display_top_n: default_top_n(),
            excluded_words_path: None,
            additional_excluded_words: Vec::new(),
            lemma_overrides: IndexMap::new(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_job_top_n(mut self, job_top_n: usize) -> Self {
        self.job_top_n = job_top_n;
        self
    }

    pub fn with_resume_display_top_n(mut self, resume_display_top_n: usize) -> Self {
        self.resume_display_top_n = resume_display_top_n;
        self
    }

    pub fn with_excluded_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded_words_path = Some(path.into());
        self
    }

    pub fn with_additional_excluded_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_excluded_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_lemma_override(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.lemma_overrides.insert(from.into(), to.into());
        self
    }

    /// Check settings that deserialize fine but cannot produce an analysis.
    ///
    /// # Errors
    ///
    /// Returns `ResumatchError::Validation` if `job_top_n` is 0 or an override
    /// maps from or to a blank word.
    pub fn validate(&self) -> Result<()> {
        if self.job_top_n == 0 {
            return Err(ResumatchError::validation("job_top_n must be at least 1"));
        }
        if let Some((from, to)) = self
            .lemma_overrides
            .iter()
            .find(|(from, to)| from.trim().is_empty() || to.trim().is_empty())
        {
            return Err(ResumatchError::validation(format!(
                "Lemma override '{}' -> '{}' must not be blank",
                from, to
            )));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ResumatchError::Validation` if the file cannot be read or is
    /// invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ResumatchError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ResumatchError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ResumatchError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| ResumatchError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ResumatchError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| ResumatchError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration, picking the format from the file extension.
    ///
    /// Accepts `.toml`, `.yaml`, `.yml` and `.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml_file(path),
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            _ => Err(ResumatchError::validation(format!(
                "Unsupported config file extension for {}",
                path.display()
            ))),
        }
    }

    /// Discover configuration file in parent directories.
    ///
    /// Searches for `resumatch.toml` in current directory and parent directories.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(ResumatchError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.job_top_n, 5);
        assert_eq!(config.resume_display_top_n, 5);
        assert!(config.excluded_words_path.is_none());
        assert!(config.lemma_overrides.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("resumatch.toml");

        fs::write(
            &config_path,
            r#"
job_top_n = 10
additional_excluded_words = ["synergy", "rockstar"]

[lemma_overrides]
ml = "machine-learning"
        "#,
        )
        .unwrap();

        let config = AnalysisConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(config.job_top_n, 10);
        assert_eq!(config.resume_display_top_n, 5);
        assert_eq!(config.additional_excluded_words, vec!["synergy", "rockstar"]);
        assert_eq!(config.lemma_overrides["ml"], "machine-learning");
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");

        fs::write(&config_path, "resume_display_top_n: 3\nexcluded_words_path: /tmp/words.json\n").unwrap();

        let config = AnalysisConfig::from_yaml_file(&config_path).unwrap();
        assert_eq!(config.resume_display_top_n, 3);
        assert_eq!(config.excluded_words_path, Some(PathBuf::from("/tmp/words.json")));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        fs::write(&config_path, r#"{"job_top_n": 7}"#).unwrap();

        let config = AnalysisConfig::from_json_file(&config_path).unwrap();
        assert_eq!(config.job_top_n, 7);
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = tempdir().unwrap();
        let yml = dir.path().join("config.YML");
        fs::write(&yml, "job_top_n: 2\n").unwrap();
        assert_eq!(AnalysisConfig::from_file(&yml).unwrap().job_top_n, 2);

        let ini = dir.path().join("config.ini");
        fs::write(&ini, "job_top_n=2").unwrap();
        assert!(matches!(
            AnalysisConfig::from_file(&ini),
            Err(ResumatchError::Validation { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_validation_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("resumatch.toml");
        fs::write(&config_path, "job_top_n = \"five\"").unwrap();

        let err = AnalysisConfig::from_toml_file(&config_path).unwrap_err();
        assert!(matches!(err, ResumatchError::Validation { .. }));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let err = AnalysisConfig::from_json_file("/nonexistent/resumatch.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let config = AnalysisConfig::default().with_job_top_n(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_override() {
        let config = AnalysisConfig::default().with_lemma_override("data", "  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = AnalysisConfig::default()
            .with_job_top_n(3)
            .with_resume_display_top_n(8)
            .with_additional_excluded_words(["acme"])
            .with_excluded_words_path("words.json");

        assert_eq!(config.job_top_n, 3);
        assert_eq!(config.resume_display_top_n, 8);
        assert_eq!(config.additional_excluded_words, vec!["acme"]);
        assert_eq!(config.excluded_words_path, Some(PathBuf::from("words.json")));
    }

    #[test]
    #[serial]
    fn test_discover_resumatch_toml() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("resumatch.toml"), "job_top_n = 9\n").unwrap();

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();

        let result = std::panic::catch_unwind(|| {
            let config = AnalysisConfig::discover().unwrap();
            assert_eq!(config.unwrap().job_top_n, 9);
        });

        std::env::set_current_dir(&original_dir).unwrap();

        if let Err(e) = result {
            std::panic::resume_unwind(e);
        }
    }
}

//! Error types for resumatch.
//!
//! All fallible operations in the crate return [`ResumatchError`]:
//!
//! - `Io` errors bubble up unchanged via `?`.
//! - `ConfigurationMissing` means the exclusion vocabulary or the lemma
//!   dictionary could not be read or parsed. Analysis cannot proceed without
//!   them; there is no fallback to an empty vocabulary.
//! - `Tagger` means a token could not be part-of-speech tagged. Normalized word
//!   tokens are always taggable, so this indicates a bug upstream.
//!
//! Empty resume or job text is not an error; it yields empty results.
//!
//! # Example
//!
//! ```rust
//! use resumatch::{ResumatchError, Result};
//!
//! fn load_word_list(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)?;
//!
//!     if content.trim().is_empty() {
//!         return Err(ResumatchError::configuration_missing(format!(
//!             "Exclusion word list is empty: {}",
//!             path
//!         )));
//!     }
//!
//!     Ok(content)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `ResumatchError`.
pub type Result<T> = std::result::Result<T, ResumatchError>;

/// Main error type for all resumatch operations.
#[derive(Debug, Error)]
pub enum ResumatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration missing: {message}")]
    ConfigurationMissing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Tagger error on token '{token}': {message}")]
    Tagger { token: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ResumatchError {
    fn from(err: serde_json::Error) -> Self {
        ResumatchError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl ResumatchError {
    error_constructor!(configuration_missing, ConfigurationMissing);
    error_constructor!(validation, Validation);
    error_constructor!(serialization, Serialization);

    /// Create a Tagger error for the given token.
    pub fn tagger<T: Into<String>, S: Into<String>>(token: T, message: S) -> Self {
        Self::Tagger {
            token: token.into(),
            message: message.into(),
        }
    }
}

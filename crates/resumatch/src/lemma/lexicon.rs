//! Embedded lemma dictionary.
//!
//! The dictionary ships inside the binary (`resources/lexicon.json`) and is
//! parsed once on first use. It holds:
//!
//! - base forms per part of speech (`nouns`, `verbs`, `adjectives`, `adverbs`)
//! - irregular inflections per part of speech (`exceptions`), e.g. `led` to `lead`
//! - a small tag dictionary (`tags`) for words whose part of speech the
//!   suffix heuristics would get wrong

use super::PosBucket;
use crate::{Result, ResumatchError};
use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

const EMBEDDED_LEXICON: &str = include_str!("../../resources/lexicon.json");

#[derive(Debug, Deserialize)]
struct LexiconData {
    #[serde(default)]
    nouns: Vec<String>,
    #[serde(default)]
    verbs: Vec<String>,
    #[serde(default)]
    adjectives: Vec<String>,
    #[serde(default)]
    adverbs: Vec<String>,
    #[serde(default)]
    exceptions: ExceptionData,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExceptionData {
    #[serde(default)]
    noun: HashMap<String, String>,
    #[serde(default)]
    verb: HashMap<String, String>,
    #[serde(default)]
    adjective: HashMap<String, String>,
    #[serde(default)]
    adverb: HashMap<String, String>,
}

/// Lemma dictionary: base forms, irregular forms and known tags.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    base_forms: AHashMap<PosBucket, AHashSet<String>>,
    exceptions: AHashMap<PosBucket, AHashMap<String, String>>,
    tags: AHashMap<String, String>,
}

static LEXICON: Lazy<std::result::Result<Arc<Lexicon>, String>> = Lazy::new(|| {
    Lexicon::from_json_str(EMBEDDED_LEXICON)
        .map(|lexicon| {
            tracing::info!(
                "Loaded embedded lexicon: {} base forms, {} irregular forms",
                lexicon.base_form_count(),
                lexicon.exception_count()
            );
            Arc::new(lexicon)
        })
        .map_err(|e| e.to_string())
});

/// Get the embedded lexicon, parsing it on first call.
///
/// # Errors
///
/// Returns `ResumatchError::ConfigurationMissing` if the embedded dictionary
/// cannot be parsed.
pub fn lexicon() -> Result<Arc<Lexicon>> {
    LEXICON
        .as_ref()
        .map(Arc::clone)
        .map_err(|e| ResumatchError::configuration_missing(format!("Lemma dictionary unavailable: {}", e)))
}

impl Lexicon {
    /// Parse a lexicon from its JSON representation.
    ///
    /// All entries are lowercased.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: LexiconData = serde_json::from_str(json)?;

        let mut base_forms = AHashMap::new();
        for (pos, words) in [
            (PosBucket::Noun, data.nouns),
            (PosBucket::Verb, data.verbs),
            (PosBucket::Adjective, data.adjectives),
            (PosBucket::Adverb, data.adverbs),
        ] {
            let set: AHashSet<String> = words.into_iter().map(|w| w.to_lowercase()).collect();
            base_forms.insert(pos, set);
        }

        let mut exceptions = AHashMap::new();
        for (pos, forms) in [
            (PosBucket::Noun, data.exceptions.noun),
            (PosBucket::Verb, data.exceptions.verb),
            (PosBucket::Adjective, data.exceptions.adjective),
            (PosBucket::Adverb, data.exceptions.adverb),
        ] {
            let map: AHashMap<String, String> = forms
                .into_iter()
                .map(|(inflected, base)| (inflected.to_lowercase(), base.to_lowercase()))
                .collect();
            exceptions.insert(pos, map);
        }

        let tags = data
            .tags
            .into_iter()
            .map(|(word, tag)| (word.to_lowercase(), tag))
            .collect();

        Ok(Self {
            base_forms,
            exceptions,
            tags,
        })
    }

    /// Whether `word` is a known base form for `pos`.
    pub fn is_base_form(&self, pos: PosBucket, word: &str) -> bool {
        self.base_forms.get(&pos).is_some_and(|set| set.contains(word))
    }

    /// Base form of an irregular inflection, if `word` is one for `pos`.
    pub fn exception(&self, pos: PosBucket, word: &str) -> Option<&str> {
        self.exceptions
            .get(&pos)
            .and_then(|map| map.get(word))
            .map(String::as_str)
    }

    /// Dictionary tag for `word`, if one is recorded.
    pub fn tag_for(&self, word: &str) -> Option<&str> {
        self.tags.get(word).map(String::as_str)
    }

    pub fn base_form_count(&self) -> usize {
        self.base_forms.values().map(|set| set.len()).sum()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.values().map(|map| map.len()).sum()
    }
}

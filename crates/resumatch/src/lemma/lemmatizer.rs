//! Dictionary lemmatizer with part-of-speech hints and manual overrides.

use super::{HeuristicTagger, Lexicon, PosBucket, PosTagger};
use crate::Result;
use ahash::AHashMap;
use std::sync::Arc;

/// Manual corrections applied to the dictionary lemma.
///
/// Matched against the lemmatizer's output, not the raw token.
pub const DEFAULT_LEMMA_OVERRIDES: &[(&str, &str)] = &[
    ("engineering", "engineer"),
    ("programming", "program"),
    ("developing", "develop"),
    ("analyzing", "analyze"),
];

const NOUN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_SUBSTITUTIONS: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Upper bound on repeated substitution rounds. Every dictionary word is
/// reached in far fewer; the cap keeps pathological tokens linear.
const MAX_SUBSTITUTION_ROUNDS: usize = 4;

fn substitutions(pos: PosBucket) -> &'static [(&'static str, &'static str)] {
    match pos {
        PosBucket::Noun => NOUN_SUBSTITUTIONS,
        PosBucket::Verb => VERB_SUBSTITUTIONS,
        PosBucket::Adjective => ADJECTIVE_SUBSTITUTIONS,
        PosBucket::Adverb => &[],
    }
}

/// Maps tokens to their base form.
///
/// Cheap to clone; the lexicon and tagger are shared.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: Arc<Lexicon>,
    tagger: Arc<dyn PosTagger>,
    overrides: Arc<AHashMap<String, String>>,
}

impl Lemmatizer {
    /// Create a lemmatizer over `lexicon` using the [`HeuristicTagger`] and
    /// [`DEFAULT_LEMMA_OVERRIDES`].
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let overrides = DEFAULT_LEMMA_OVERRIDES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();

        Self {
            tagger: Arc::new(HeuristicTagger::new(Arc::clone(&lexicon))),
            lexicon,
            overrides: Arc::new(overrides),
        }
    }

    /// Replace the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Merge additional overrides over the current table.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut merged = (*self.overrides).clone();
        for (from, to) in overrides {
            merged.insert(from.into().to_lowercase(), to.into().to_lowercase());
        }
        self.overrides = Arc::new(merged);
        self
    }

    pub fn tagger_name(&self) -> &str {
        self.tagger.name()
    }

    /// Part-of-speech bucket for a token, via the tagger.
    pub fn pos_bucket(&self, token: &str) -> Result<PosBucket> {
        let tag = self.tagger.tag(token)?;
        Ok(PosBucket::from_penn_tag(&tag))
    }

    /// Full lemmatization: tag, dictionary lookup, then overrides.
    ///
    /// # Errors
    ///
    /// Propagates tagger failures.
    pub fn lemmatize(&self, token: &str) -> Result<String> {
        let word = token.to_lowercase();
        let pos = self.pos_bucket(&word)?;
        let lemma = self.base_form(&word, pos);

        Ok(match self.overrides.get(&lemma) {
            Some(corrected) => corrected.clone(),
            None => lemma,
        })
    }

    /// Dictionary base form of `word` as part of speech `pos`.
    ///
    /// Irregular forms are resolved first. Otherwise suffix substitution rules
    /// are applied repeatedly, at most [`MAX_SUBSTITUTION_ROUNDS`] times, until
    /// some candidate is a known base form; the shortest such candidate wins.
    /// Words with no known base form are returned unchanged.
    pub fn base_form(&self, word: &str, pos: PosBucket) -> String {
        if let Some(base) = self.lexicon.exception(pos, word) {
            return base.to_string();
        }

        let rules = substitutions(pos);
        let mut forms = apply_rules(&[word.to_string()], rules);

        let mut candidates: Vec<String> = std::iter::once(word.to_string())
            .chain(forms.iter().cloned())
            .filter(|form| self.lexicon.is_base_form(pos, form))
            .collect();

        let mut rounds = 1;
        while candidates.is_empty() && !forms.is_empty() && rounds < MAX_SUBSTITUTION_ROUNDS {
            rounds += 1;
            forms = apply_rules(&forms, rules);
            candidates = forms
                .iter()
                .filter(|form| self.lexicon.is_base_form(pos, form))
                .cloned()
                .collect();
        }

        candidates
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules {
            if let Some(stem) = form.strip_suffix(suffix) {
                let candidate = format!("{}{}", stem, replacement);
                if !candidate.is_empty() && candidate != *form && !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

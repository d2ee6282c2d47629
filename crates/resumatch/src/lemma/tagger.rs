//! Part-of-speech tagging.
//!
//! Tokens are tagged one at a time with no surrounding sentence, so the tag is
//! the token's most likely part of speech in isolation. That loses precision
//! on ambiguous words ("lead", "design") and is accepted as such.

use super::{Lexicon, PosBucket};
use crate::{Result, ResumatchError};
use std::sync::Arc;

/// Assigns a Penn Treebank tag to a single token.
///
/// Implementations must be `Send + Sync`; one tagger is shared by every
/// analysis running on the process.
///
/// # Example
///
/// ```rust
/// use resumatch::lemma::PosTagger;
/// use resumatch::Result;
///
/// #[derive(Debug)]
/// struct EverythingIsANoun;
///
/// impl PosTagger for EverythingIsANoun {
///     fn name(&self) -> &str {
///         "everything-is-a-noun"
///     }
///
///     fn tag(&self, _token: &str) -> Result<String> {
///         Ok("NN".to_string())
///     }
/// }
/// ```
pub trait PosTagger: Send + Sync + std::fmt::Debug {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Tag one token.
    ///
    /// # Errors
    ///
    /// Returns `ResumatchError::Tagger` if the token cannot be tagged. Callers
    /// treat this as fatal.
    fn tag(&self, token: &str) -> Result<String>;
}

const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ible", "ous", "ful", "ive", "less", "ical", "ic", "al", "ary"];

/// Dictionary-backed suffix tagger.
///
/// Resolution order:
/// 1. explicit tag recorded in the lexicon
/// 2. numbers are `CD`
/// 3. known base forms (`NN`, `VB`, `JJ`, `RB`, checked in that order)
/// 4. known irregular inflections (`NNS`, `VBD`, `JJR`, `RBR`)
/// 5. suffix rules (`-ly`, `-ing`, `-ed`, adjective suffixes, `-s`); an `-s`
///    word whose stem is a known verb and not a known noun is `VBZ`
/// 6. `NN`
#[derive(Debug, Clone)]
pub struct HeuristicTagger {
    lexicon: Arc<Lexicon>,
}

impl HeuristicTagger {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn tag_by_suffix(&self, token: &str) -> Option<&'static str> {
        let len = token.chars().count();

        if len > 3 && token.ends_with("ly") {
            return Some("RB");
        }
        if len > 4 && token.ends_with("ing") {
            return Some("VBG");
        }
        if len > 3 && token.ends_with("ed") {
            return Some("VBD");
        }
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|suffix| token.ends_with(suffix)) {
            return Some("JJ");
        }
        if len > 3 && token.ends_with('s') && !["ss", "us", "is"].iter().any(|suffix| token.ends_with(suffix)) {
            return Some(self.tag_plural_or_third_person(token));
        }

        None
    }

    /// `VBZ` when some stripped stem is a known verb but never a known noun,
    /// `NNS` otherwise.
    fn tag_plural_or_third_person(&self, token: &str) -> &'static str {
        let mut stems: Vec<String> = Vec::with_capacity(3);
        if let Some(stem) = token.strip_suffix('s') {
            stems.push(stem.to_string());
        }
        if let Some(stem) = token.strip_suffix("es") {
            stems.push(stem.to_string());
        }
        if let Some(stem) = token.strip_suffix("ies") {
            stems.push(format!("{}y", stem));
        }

        let known_noun = stems.iter().any(|stem| self.lexicon.is_base_form(PosBucket::Noun, stem));
        let known_verb = stems.iter().any(|stem| self.lexicon.is_base_form(PosBucket::Verb, stem));

        if known_verb && !known_noun { "VBZ" } else { "NNS" }
    }
}

impl PosTagger for HeuristicTagger {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn tag(&self, token: &str) -> Result<String> {
        if token.is_empty() {
            return Err(ResumatchError::tagger(token, "cannot tag an empty token"));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(ResumatchError::tagger(token, "token contains whitespace"));
        }

        if let Some(tag) = self.lexicon.tag_for(token) {
            return Ok(tag.to_string());
        }

        if token.chars().all(|c| c.is_numeric() || c == '_') {
            return Ok("CD".to_string());
        }

        for (pos, tag) in [
            (PosBucket::Noun, "NN"),
            (PosBucket::Verb, "VB"),
            (PosBucket::Adjective, "JJ"),
            (PosBucket::Adverb, "RB"),
        ] {
            if self.lexicon.is_base_form(pos, token) {
                return Ok(tag.to_string());
            }
        }
        for (pos, tag) in [
            (PosBucket::Noun, "NNS"),
            (PosBucket::Verb, "VBD"),
            (PosBucket::Adjective, "JJR"),
            (PosBucket::Adverb, "RBR"),
        ] {
            if self.lexicon.exception(pos, token).is_some() {
                return Ok(tag.to_string());
            }
        }

        Ok(self.tag_by_suffix(token).unwrap_or("NN").to_string())
    }
}

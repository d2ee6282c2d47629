//! Importance scoring.
//!
//! Maps raw occurrence counts to a 1-10 scale, linear against the most
//! frequent term of the same document. Scores from two different documents
//! are not comparable.

use indexmap::IndexMap;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Score given to every term when nothing repeats.
pub const UNIFORM_SCORE: u8 = 5;

/// Score one count against the document maximum.
///
/// `max(1, round(count / max_count * 10))`, rounding half to even.
pub fn importance(count: usize, max_count: usize) -> u8 {
    if max_count == 0 {
        return MIN_SCORE;
    }
    if max_count == 1 {
        return UNIFORM_SCORE;
    }

    let scaled = (count as f64 / max_count as f64 * f64::from(MAX_SCORE)).round_ties_even();
    (scaled as u8).clamp(MIN_SCORE, MAX_SCORE)
}

/// Score every term of a count table, keeping its order.
///
/// An empty table yields an empty table. The most frequent term always scores
/// [`MAX_SCORE`]; if every count is 1, every term scores [`UNIFORM_SCORE`].
///
/// ```rust
/// use indexmap::IndexMap;
/// use resumatch::keywords::scoring::score;
///
/// let counts: IndexMap<String, usize> =
///     [("python".to_string(), 3), ("engineer".to_string(), 2)].into_iter().collect();
/// let scores = score(&counts);
///
/// assert_eq!(scores["python"], 10);
/// assert_eq!(scores["engineer"], 7);
/// ```
pub fn score(counts: &IndexMap<String, usize>) -> IndexMap<String, u8> {
    let Some(max_count) = counts.values().copied().max() else {
        return IndexMap::new();
    };

    counts
        .iter()
        .map(|(term, &count)| (term.clone(), importance(count, max_count)))
        .collect()
}

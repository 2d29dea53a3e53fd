//! Ranked, cost-annotated wordlists.
//!
//! A [`Lexicon`] is built from a list of words sorted by descending frequency.
//! Each word is assigned a cost derived from its rank (Zipf's law), so that
//! frequent words are cheap and rare words are expensive:
//!
//! ```text
//! cost(word_i) = ln((i + 1) * ln(N))
//! ```
//!
//! where `i` is the zero-based rank and `N` the number of words.
//!
//! # Example
//!
//! ```rust
//! use wordsplit::Lexicon;
//!
//! let lexicon = Lexicon::new(["the", "cat", "sat"]).unwrap();
//! assert!(lexicon.cost("the").unwrap() < lexicon.cost("sat").unwrap());
//! assert!(lexicon.should_lowercase());
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Added to the largest word cost to obtain the per-character fallback cost.
pub const MAX_COST_EPSILON: f64 = 1e-3;

/// Errors that can occur when building a lexicon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLexicon {
    #[error("The wordlist is empty")]
    Empty,
    #[error("The wordlist contains duplicates: {0:?}")]
    Duplicates(Vec<String>),
}

/// An ordered list of unique words with rank-derived costs.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<String>,
    costs: Vec<f64>,
    ranks: FxHashMap<String, usize>,
    max_cost: f64,
    should_lowercase: bool,
}

impl Lexicon {
    /// Build a lexicon from words sorted in descending order of frequency.
    ///
    /// # Errors
    /// Returns [`InvalidLexicon::Empty`] for an empty list and
    /// [`InvalidLexicon::Duplicates`] if any word occurs more than once.
    pub fn new<I, S>(words: I) -> Result<Self, InvalidLexicon>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(InvalidLexicon::Empty);
        }

        let mut ranks = FxHashMap::with_capacity_and_hasher(words.len(), Default::default());
        let mut reported = FxHashSet::default();
        let mut duplicates = Vec::new();
        for (rank, word) in words.iter().enumerate() {
            if ranks.contains_key(word.as_str()) {
                if reported.insert(word.as_str()) {
                    duplicates.push(word.clone());
                }
            } else {
                ranks.insert(word.clone(), rank);
            }
        }
        if !duplicates.is_empty() {
            return Err(InvalidLexicon::Duplicates(duplicates));
        }

        let costs = rank_costs(words.len());
        let max_cost = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max) + MAX_COST_EPSILON;
        let should_lowercase = words.iter().all(|word| *word == word.to_lowercase());

        log::debug!(
            "built lexicon with {} words (max_cost={:.4}, lowercase={})",
            words.len(),
            max_cost,
            should_lowercase
        );

        Ok(Self {
            words,
            costs,
            ranks,
            max_cost,
            should_lowercase,
        })
    }

    /// Get the cost of a word, or `None` if it is not in the lexicon.
    pub fn cost(&self, word: &str) -> Option<f64> {
        self.ranks.get(word).map(|&rank| self.costs[rank])
    }

    /// Get the cost of the word at the given rank.
    pub fn cost_at(&self, rank: usize) -> Option<f64> {
        self.costs.get(rank).copied()
    }

    /// Get the zero-based rank of a word.
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Cost charged for a single character that no word covers.
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    /// Whether inputs are lowercased before matching.
    ///
    /// True iff no word in the lexicon changes under lowercasing.
    pub fn should_lowercase(&self) -> bool {
        self.should_lowercase
    }

    /// Words in rank order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Costs in rank order, parallel to [`Lexicon::words`].
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Iterate over `(word, cost)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.costs.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty lexicons are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Compute `ln((i + 1) * ln(n))` for every rank `i` in `0..n`.
///
/// A single-word lexicon has `ln(1) = 0`, which would make the formula
/// diverge; its only word gets cost `0.0`.
fn rank_costs(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let log_n = (n as f64).ln();
    (1..=n).map(|rank| (rank as f64 * log_n).ln()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_follow_rank_formula() {
        let lexicon = Lexicon::new(["a", "b", "c", "d"]).unwrap();
        let log_n = 4f64.ln();
        for (rank, (_, cost)) in lexicon.iter().enumerate() {
            let expected = ((rank + 1) as f64 * log_n).ln();
            assert!((cost - expected).abs() < 1e-12);
        }
        assert!((lexicon.max_cost() - (4.0 * log_n).ln() - MAX_COST_EPSILON).abs() < 1e-12);
    }

    #[test]
    fn test_costs_are_monotonic() {
        let words: Vec<String> = (0..500).map(|i| format!("w{}", i)).collect();
        let lexicon = Lexicon::new(words).unwrap();
        assert!(lexicon.costs().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty_rejected() {
        let result = Lexicon::new(Vec::<String>::new());
        assert_eq!(result.unwrap_err(), InvalidLexicon::Empty);
    }

    #[test]
    fn test_duplicates_reported_once() {
        let err = Lexicon::new(["cat", "dog", "cat", "dog", "cat", "eel"]).unwrap_err();
        assert_eq!(
            err,
            InvalidLexicon::Duplicates(vec!["cat".to_string(), "dog".to_string()])
        );
        assert!(err.to_string().contains("cat"));
    }

    #[test]
    fn test_single_word_cost_is_zero() {
        let lexicon = Lexicon::new(["only"]).unwrap();
        assert_eq!(lexicon.cost("only"), Some(0.0));
        assert_eq!(lexicon.max_cost(), MAX_COST_EPSILON);
    }

    #[test]
    fn test_lowercase_flag() {
        assert!(Lexicon::new(["cat", "dog"]).unwrap().should_lowercase());
        assert!(!Lexicon::new(["cat", "Dog"]).unwrap().should_lowercase());
        // Characters without case do not disable lowercasing
        assert!(Lexicon::new(["猫", "42"]).unwrap().should_lowercase());
    }

    #[test]
    fn test_lookup() {
        let lexicon = Lexicon::new(["cat", "dog"]).unwrap();
        assert_eq!(lexicon.rank("dog"), Some(1));
        assert_eq!(lexicon.cost("dog"), lexicon.cost_at(1));
        assert_eq!(lexicon.cost("eel"), None);
        assert_eq!(lexicon.cost_at(2), None);
        assert_eq!(lexicon.words().to_vec(), vec!["cat", "dog"]);
        assert_eq!(lexicon.len(), 2);
        assert!(!lexicon.is_empty());
    }
}

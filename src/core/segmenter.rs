use rayon::prelude::*;
use std::borrow::Cow;
use thiserror::Error;

use super::lexicon::{InvalidLexicon, Lexicon};
use super::matcher::{MatchSpan, Matcher};
use super::resolve::ResolutionError;

#[derive(Error, Debug)]
pub enum SegmenterError {
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(#[from] InvalidLexicon),
    #[error("Aho-Corasick build error: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
    #[error("Cannot build a combiner without lexicons")]
    EmptyCombiner,
    #[error("Wordlist resolution error: {0}")]
    Resolution(#[from] ResolutionError),
}

/// A split of a text into tokens, with the total cost of that split.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Tokens in left-to-right order. Not all tokens are lexicon words.
    pub tokens: Vec<String>,
    /// Total cost; lower is better.
    pub score: f64,
}

impl Segmentation {
    /// Concatenation of all tokens: the text that was actually searched.
    pub fn joined(&self) -> String {
        self.tokens.concat()
    }
}

impl From<Segmentation> for (Vec<String>, f64) {
    fn from(segmentation: Segmentation) -> Self {
        (segmentation.tokens, segmentation.score)
    }
}

/// Splits text without spaces into the cheapest sequence of lexicon words.
///
/// The split is a shortest path over character offsets: every lexicon word
/// found in the text is an edge weighted by the word's cost, and characters
/// not covered by any word are charged [`Lexicon::max_cost`] each.
///
/// # Thread Safety
///
/// `Segmenter` holds no mutable state. Each call allocates its own cost and
/// backpointer arrays, so a single instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use wordsplit::{Lexicon, Segmenter};
///
/// let segmenter = Segmenter::new(Lexicon::new(["cat", "dog"]).unwrap()).unwrap();
/// assert_eq!(segmenter.split("catdog"), vec!["cat", "dog"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    lexicon: Lexicon,
    matcher: Matcher,
}

impl Segmenter {
    /// Create a segmenter, building a matcher over the lexicon's words.
    pub fn new(lexicon: Lexicon) -> Result<Self, SegmenterError> {
        let matcher = Matcher::new(lexicon.words())?;
        Ok(Self { lexicon, matcher })
    }

    /// Create a segmenter directly from words sorted by descending frequency.
    pub fn from_words<I, S>(words: I) -> Result<Self, SegmenterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Lexicon::new(words)?)
    }

    /// Get the lexicon this segmenter was built from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Split a string into a list of words.
    ///
    /// Characters not covered by any word come out as single-character tokens.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with_cost(text).tokens
    }

    /// Split a string and return the cost of the split alongside the tokens.
    ///
    /// If every lexicon word is lowercase, the text is lowercased before
    /// matching and the returned tokens are lowercase too.
    pub fn split_with_cost(&self, text: &str) -> Segmentation {
        let text: Cow<str> = if self.lexicon.should_lowercase() {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };
        let text = text.as_ref();

        // char_starts[p] is the byte offset of character p; the last entry is text.len()
        let mut char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        char_starts.push(text.len());
        let n = char_starts.len() - 1;

        let mut byte_to_char = vec![0usize; text.len() + 1];
        for (p, &b) in char_starts.iter().enumerate() {
            byte_to_char[b] = p;
        }

        // Worst case: every character is its own unknown token
        let max_cost = self.lexicon.max_cost();
        let mut costs: Vec<f64> = (0..=n).map(|p| p as f64 * max_cost).collect();
        let mut backpointers = vec![1usize; n + 1];

        let mut spans: Vec<MatchSpan> = self.matcher.find_all(text).collect();
        spans.sort_unstable_by_key(|m| (m.end, m.start));
        log::trace!("{} matches over {} characters", spans.len(), n);

        for span in spans {
            let start = byte_to_char[span.start];
            let end = byte_to_char[span.end];
            let Some(word_cost) = self.lexicon.cost_at(span.pattern) else {
                continue;
            };

            let new_cost = word_cost + costs[start];
            if new_cost < costs[end] {
                costs[end] = new_cost;
                backpointers[end] = end - start;
            }
        }

        let mut tokens = Vec::new();
        let mut i = n;
        while i > 0 {
            let j = i - backpointers[i];
            tokens.push(text[char_starts[j]..char_starts[i]].to_string());
            i = j;
        }
        tokens.reverse();

        Segmentation {
            tokens,
            score: costs[n],
        }
    }

    /// Split multiple strings in parallel. Results keep the input order.
    pub fn split_batch(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.par_iter().map(|text| self.split(text)).collect()
    }

    /// Split multiple strings in parallel, keeping costs.
    pub fn split_batch_with_cost(&self, texts: &[String]) -> Vec<Segmentation> {
        texts
            .par_iter()
            .map(|text| self.split_with_cost(text))
            .collect()
    }
}

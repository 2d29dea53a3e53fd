use rayon::prelude::*;

use super::lexicon::Lexicon;
use super::resolve::Resolver;
use super::segmenter::{Segmentation, Segmenter, SegmenterError};

/// Splits text with several independent segmenters and keeps the cheapest split.
///
/// Useful when the language of the input is unknown: build one lexicon per
/// language and let the costs decide. When two segmenters produce the same
/// lowest score, the one that was added first wins.
///
/// # Parallelism
///
/// By default the segmenters run in parallel with Rayon. All results are
/// collected before the reduction, so the outcome does not depend on which
/// segmenter finishes first. For very short inputs the thread pool overhead
/// can dominate; use [`Combiner::parallel`] to switch to sequential runs.
///
/// # Example
///
/// ```rust
/// use wordsplit::Combiner;
///
/// let combiner = Combiner::from_wordlists(vec![
///     vec!["cat", "DOG"],
///     vec!["CAT", "DOG"],
/// ])
/// .unwrap();
/// assert_eq!(combiner.split("CATDOG"), vec!["CAT", "DOG"]);
/// ```
#[derive(Debug, Clone)]
pub struct Combiner {
    segmenters: Vec<Segmenter>,
    parallel: bool,
}

impl Combiner {
    /// Build one segmenter per lexicon.
    ///
    /// # Errors
    /// Returns [`SegmenterError::EmptyCombiner`] if `lexicons` is empty, or the
    /// first segmenter construction error.
    pub fn new(lexicons: Vec<Lexicon>) -> Result<Self, SegmenterError> {
        let segmenters = lexicons
            .into_iter()
            .map(Segmenter::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_segmenters(segmenters)
    }

    /// Build from raw wordlists, each sorted in descending order of frequency.
    pub fn from_wordlists<I, W, S>(wordlists: I) -> Result<Self, SegmenterError>
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segmenters = wordlists
            .into_iter()
            .map(Segmenter::from_words)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_segmenters(segmenters)
    }

    /// Resolve every tag to a wordlist and build one segmenter per tag.
    ///
    /// Resolution failures are passed through as [`SegmenterError::Resolution`].
    pub fn from_tags<R, I, T>(resolver: &R, tags: I) -> Result<Self, SegmenterError>
    where
        R: Resolver + ?Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let segmenters = tags
            .into_iter()
            .map(|tag| {
                let words = resolver.resolve(tag.as_ref())?;
                Segmenter::from_words(words)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_segmenters(segmenters)
    }

    /// Combine already-built segmenters.
    pub fn from_segmenters(segmenters: Vec<Segmenter>) -> Result<Self, SegmenterError> {
        if segmenters.is_empty() {
            return Err(SegmenterError::EmptyCombiner);
        }
        log::debug!("built combiner over {} segmenters", segmenters.len());
        Ok(Self {
            segmenters,
            parallel: true,
        })
    }

    /// Enable or disable running the segmenters in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether segmenters run in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The segmenters, in the order they were added.
    pub fn segmenters(&self) -> &[Segmenter] {
        &self.segmenters
    }

    /// Split a string into a list of words using the cheapest segmenter.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with_cost(text).tokens
    }

    /// Split a string with every segmenter and return the lowest-cost result.
    pub fn split_with_cost(&self, text: &str) -> Segmentation {
        let candidates: Vec<Segmentation> = if self.parallel {
            self.segmenters
                .par_iter()
                .map(|segmenter| segmenter.split_with_cost(text))
                .collect()
        } else {
            self.segmenters
                .iter()
                .map(|segmenter| segmenter.split_with_cost(text))
                .collect()
        };

        let mut candidates = candidates.into_iter();
        let mut best = match candidates.next() {
            Some(first) => first,
            // Unreachable through the constructors, which reject zero segmenters
            None => {
                return Segmentation {
                    tokens: Vec::new(),
                    score: 0.0,
                }
            }
        };
        for candidate in candidates {
            if candidate.score < best.score {
                best = candidate;
            }
        }
        best
    }

    /// Split multiple strings in parallel. Results keep the input order.
    pub fn split_batch(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.par_iter().map(|text| self.split(text)).collect()
    }
}

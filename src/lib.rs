//! Wordsplit - Fast Rust word segmentation for text without spaces
//!
//! Splits strings such as `"thisisatest"` into `["this", "is", "a", "test"]`
//! using a wordlist sorted by frequency:
//! - Zipf's-law word costs derived from each word's rank
//! - Aho-Corasick for finding every (overlapping) word occurrence in one pass
//! - Shortest-path dynamic programming over the occurrences
//! - Rayon parallelism for batch splitting and multi-wordlist combination
//!
//! # Example
//!
//! ```rust
//! use wordsplit::{Lexicon, Segmenter};
//!
//! let lexicon = Lexicon::new(["this", "is", "a", "test"]).unwrap();
//! let segmenter = Segmenter::new(lexicon).unwrap();
//!
//! assert_eq!(segmenter.split("thisisatest"), vec!["this", "is", "a", "test"]);
//! ```

pub mod core;

pub use crate::core::{
    Combiner, InvalidLexicon, Lexicon, MatchSpan, Matcher, ResolutionError, Resolver,
    Segmentation, Segmenter, SegmenterError, SharedSegmenter, WordlistCatalog,
};

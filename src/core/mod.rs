//! Core segmentation engine for wordsplit.
//!
//! This module splits text without spaces into the most probable sequence of
//! words, given a wordlist sorted by frequency:
//! - Rank-based word costs (Zipf's law), so frequent words are preferred
//! - Aho-Corasick matching that reports every overlapping word occurrence
//! - A shortest-path dynamic program over the matches, with single-character
//!   fallback for text no word covers
//!
//! # Architecture
//!
//! The core is organized into the following components:
//!
//! - [`Lexicon`]: Validated, ranked wordlist with per-word costs
//! - [`Matcher`]: Multi-pattern matcher over the lexicon's words
//! - [`Segmenter`]: Minimum-cost split of a string, built on a lexicon and matcher
//! - [`Combiner`]: Runs several segmenters and keeps the cheapest split
//! - [`Resolver`] / [`WordlistCatalog`]: Wordlist lookup by language tag
//! - [`SharedSegmenter`]: Lazily-built segmenter shared between callers
//!
//! # Performance
//!
//! - **Aho-Corasick**: one pass over the input finds all word occurrences
//! - **Rayon parallelism**: batch splitting and combiner fan-out
//! - **FxHashMap**: faster hashing than standard HashMap for word lookups

mod combiner;
mod lexicon;
mod matcher;
mod resolve;
mod segmenter;
mod shared;

pub use combiner::Combiner;
pub use lexicon::{InvalidLexicon, Lexicon, MAX_COST_EPSILON};
pub use matcher::{FindAll, MatchSpan, Matcher};
pub use resolve::{ResolutionError, Resolver, WordlistCatalog};
pub use segmenter::{Segmentation, Segmenter, SegmenterError};
pub use shared::SharedSegmenter;

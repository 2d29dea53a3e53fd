//! Wordlist resolution by language tag.
//!
//! A [`Resolver`] maps a tag such as `"en"` or `"nl"` to a ranked wordlist.
//! Where the wordlists come from (bundled files, a frequency service, a
//! database) is up to the implementor; the segmentation engine only consumes
//! the resulting lists and passes resolution failures through unchanged.
//!
//! [`WordlistCatalog`] is an in-memory resolver with alias support.
//!
//! # Example
//!
//! ```rust
//! use wordsplit::{Combiner, WordlistCatalog};
//!
//! let mut catalog = WordlistCatalog::new();
//! catalog.insert("en", ["cat", "dog"]);
//! catalog.insert("nl", ["kat", "hond"]);
//! catalog.alias("english", "en");
//!
//! let combiner = Combiner::from_tags(&catalog, ["english", "nl"]).unwrap();
//! assert_eq!(combiner.split("kathond"), vec!["kat", "hond"]);
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by wordlist resolvers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Unknown wordlist tag: {tag}. Supported: {}", .supported.join(", "))]
    UnknownTag { tag: String, supported: Vec<String> },
    #[error("Wordlist for {tag} is unavailable: {reason}")]
    Unavailable { tag: String, reason: String },
}

/// Source of ranked wordlists, keyed by tag.
pub trait Resolver {
    /// Get the wordlist for `tag`, sorted in descending order of frequency.
    fn resolve(&self, tag: &str) -> Result<Vec<String>, ResolutionError>;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> Result<Vec<String>, ResolutionError>,
{
    fn resolve(&self, tag: &str) -> Result<Vec<String>, ResolutionError> {
        self(tag)
    }
}

/// In-memory registry of wordlists. Tags and aliases are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordlistCatalog {
    wordlists: FxHashMap<String, Vec<String>>,
    aliases: FxHashMap<String, String>,
}

impl WordlistCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wordlist under `tag`, replacing any previous list.
    pub fn insert<I, S>(&mut self, tag: &str, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect();
        self.wordlists.insert(tag.to_lowercase(), words);
        self
    }

    /// Make `alias` resolve to the wordlist registered under `tag`.
    pub fn alias(&mut self, alias: &str, tag: &str) -> &mut Self {
        self.aliases.insert(alias.to_lowercase(), tag.to_lowercase());
        self
    }

    /// Whether `tag` (or an alias) resolves to a wordlist.
    pub fn contains(&self, tag: &str) -> bool {
        self.canonical(tag).is_some()
    }

    /// All registered tags and aliases, sorted.
    pub fn supported_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .wordlists
            .keys()
            .chain(self.aliases.keys())
            .cloned()
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    fn canonical(&self, tag: &str) -> Option<&str> {
        let tag = tag.to_lowercase();
        let tag = self.aliases.get(&tag).cloned().unwrap_or(tag);
        self.wordlists.get_key_value(&tag).map(|(k, _)| k.as_str())
    }
}

impl Resolver for WordlistCatalog {
    fn resolve(&self, tag: &str) -> Result<Vec<String>, ResolutionError> {
        self.canonical(tag)
            .and_then(|key| self.wordlists.get(key))
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownTag {
                tag: tag.to_string(),
                supported: self.supported_tags(),
            })
    }
}

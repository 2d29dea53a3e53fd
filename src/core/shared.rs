//! Lazily-built, shareable segmenter handle.
//!
//! Building a segmenter over a large wordlist (hundreds of thousands of words)
//! takes noticeable time, so applications usually build one and reuse it.
//! [`SharedSegmenter`] is an explicit cell for that: the caller owns it (often
//! in a `static`) and decides where the wordlist comes from.
//!
//! ```rust
//! use wordsplit::SharedSegmenter;
//!
//! static DEFAULT: SharedSegmenter = SharedSegmenter::new();
//!
//! let segmenter = DEFAULT
//!     .get_or_try_init(|| Ok(vec!["cat".to_string(), "dog".to_string()]))
//!     .unwrap();
//! assert_eq!(segmenter.split("catdog"), vec!["cat", "dog"]);
//! ```

use std::sync::{Arc, OnceLock};

use super::resolve::ResolutionError;
use super::segmenter::{Segmenter, SegmenterError};

/// A segmenter that is built on first use and shared afterwards.
#[derive(Debug, Default)]
pub struct SharedSegmenter {
    cell: OnceLock<Arc<Segmenter>>,
}

impl SharedSegmenter {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Get the segmenter, building it from `source` if this is the first call.
    ///
    /// `source` must return words sorted in descending order of frequency. If
    /// it fails, or the words do not form a valid lexicon, nothing is stored and
    /// a later call may try again. When several threads race to initialise,
    /// all of them receive the handle that was stored first.
    pub fn get_or_try_init<F>(&self, source: F) -> Result<Arc<Segmenter>, SegmenterError>
    where
        F: FnOnce() -> Result<Vec<String>, ResolutionError>,
    {
        if let Some(segmenter) = self.cell.get() {
            return Ok(Arc::clone(segmenter));
        }

        let segmenter = Arc::new(Segmenter::from_words(source()?)?);
        // Losing a race drops our instance in favour of the stored one
        let stored = self.cell.get_or_init(|| {
            log::debug!("initialised shared segmenter");
            segmenter
        });
        Ok(Arc::clone(stored))
    }

    /// Get the segmenter if it has been built.
    pub fn get(&self) -> Option<Arc<Segmenter>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn words() -> Result<Vec<String>, ResolutionError> {
        Ok(vec!["cat".to_string(), "dog".to_string()])
    }

    #[test]
    fn test_initialises_once() {
        let shared = SharedSegmenter::new();
        assert!(shared.get().is_none());

        let calls = AtomicUsize::new(0);
        let first = shared
            .get_or_try_init(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                words()
            })
            .unwrap();
        let second = shared
            .get_or_try_init(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                words()
            })
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(shared.is_initialized());
        assert_eq!(first.split("dogcat"), vec!["dog", "cat"]);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let shared = SharedSegmenter::new();
        let err = shared
            .get_or_try_init(|| {
                Err(ResolutionError::Unavailable {
                    tag: "default".to_string(),
                    reason: "missing".to_string(),
                })
            })
            .unwrap_err();
        assert!(matches!(err, SegmenterError::Resolution(_)));
        assert!(!shared.is_initialized());

        let err = shared.get_or_try_init(|| Ok(Vec::new())).unwrap_err();
        assert!(matches!(err, SegmenterError::InvalidLexicon(_)));

        assert!(shared.get_or_try_init(words).is_ok());
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = SharedSegmenter::new();
        let handles: Vec<Arc<Segmenter>> = std::thread::scope(|scope| {
            let joins: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| shared.get_or_try_init(words).unwrap()))
                .collect();
            joins.into_iter().map(|j| j.join().unwrap()).collect()
        });
        let stored = shared.get().unwrap();
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &stored)));
    }
}

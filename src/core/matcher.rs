//! Multi-pattern substring matching over a lexicon.
//!
//! The [`Matcher`] wraps an Aho-Corasick automaton built once from the
//! lexicon's words. Searching reports *every* occurrence of every word,
//! including overlapping ones: inside `"cats"`, the words `"cat"`, `"at"`,
//! `"cats"` and `"s"` are all reported. The segmentation pass depends on this
//! completeness; leftmost-longest matching would hide alternatives.
//!
//! Offsets are byte offsets into the searched text. Since both the words and
//! the text are valid UTF-8, every reported offset lies on a char boundary.

use aho_corasick::{AhoCorasick, AhoCorasickKind, FindOverlappingIter, MatchKind};

/// An occurrence of a lexicon word inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchSpan {
    /// Rank of the matched word in the lexicon.
    pub pattern: usize,
    /// Byte offset of the first byte of the match.
    pub start: usize,
    /// Byte offset one past the last byte of the match.
    pub end: usize,
}

impl MatchSpan {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Exact multi-pattern matcher reporting overlapping occurrences.
#[derive(Debug, Clone)]
pub struct Matcher {
    automaton: AhoCorasick,
}

impl Matcher {
    /// Build a matcher over `words`. Pattern indices follow the order of `words`.
    ///
    /// # Errors
    /// Fails if the automaton exceeds the size limits of the underlying
    /// Aho-Corasick implementation.
    pub fn new<I, P>(words: I) -> Result<Self, aho_corasick::BuildError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        // Overlapping search is only supported with standard match semantics.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(words)?;

        log::debug!(
            "built {:?} matcher over {} patterns ({} bytes)",
            automaton.kind(),
            automaton.patterns_len(),
            automaton.memory_usage()
        );

        Ok(Self { automaton })
    }

    /// Find every occurrence of every pattern in `text`, overlapping included.
    ///
    /// Spans are yielded in order of increasing end offset. Zero-length
    /// matches (an empty word) are skipped.
    pub fn find_all<'a, 'h>(&'a self, text: &'h str) -> FindAll<'a, 'h> {
        FindAll {
            inner: self.automaton.find_overlapping_iter(text),
        }
    }

    /// Number of patterns in the matcher.
    pub fn patterns_len(&self) -> usize {
        self.automaton.patterns_len()
    }

    /// Automaton implementation chosen at build time.
    pub fn kind(&self) -> AhoCorasickKind {
        self.automaton.kind()
    }
}

/// Iterator returned by [`Matcher::find_all`].
pub struct FindAll<'a, 'h> {
    inner: FindOverlappingIter<'a, 'h>,
}

impl Iterator for FindAll<'_, '_> {
    type Item = MatchSpan;

    #[inline]
    fn next(&mut self) -> Option<MatchSpan> {
        self.inner.by_ref().find(|m| !m.is_empty()).map(|m| MatchSpan {
            pattern: m.pattern().as_usize(),
            start: m.start(),
            end: m.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(matcher: &Matcher, text: &str) -> Vec<(usize, usize, usize)> {
        let mut spans: Vec<_> = matcher
            .find_all(text)
            .map(|m| (m.pattern, m.start, m.end))
            .collect();
        spans.sort();
        spans
    }

    #[test]
    fn test_reports_overlapping_matches() {
        let matcher = Matcher::new(["cat", "at", "cats", "s"]).unwrap();
        assert_eq!(
            spans(&matcher, "cats"),
            vec![(0, 0, 3), (1, 1, 3), (2, 0, 4), (3, 3, 4)]
        );
    }

    #[test]
    fn test_reports_repeated_matches() {
        let matcher = Matcher::new(["aa"]).unwrap();
        assert_eq!(spans(&matcher, "aaaa"), vec![(0, 0, 2), (0, 1, 3), (0, 2, 4)]);
    }

    #[test]
    fn test_ordered_by_end() {
        let matcher = Matcher::new(["dog", "catdog", "cat", "at"]).unwrap();
        let ends: Vec<usize> = matcher.find_all("catdogcat").map(|m| m.end).collect();
        assert!(ends.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ends.len(), 6);
    }

    #[test]
    fn test_byte_offsets_on_multibyte_text() {
        let matcher = Matcher::new(["über", "ß"]).unwrap();
        assert_eq!(spans(&matcher, "überß"), vec![(0, 0, 5), (1, 5, 7)]);
    }

    #[test]
    fn test_skips_empty_pattern() {
        let matcher = Matcher::new(["", "a"]).unwrap();
        assert_eq!(spans(&matcher, "aa"), vec![(1, 0, 1), (1, 1, 2)]);
        assert_eq!(matcher.patterns_len(), 2);
    }

    #[test]
    fn test_no_matches() {
        let matcher = Matcher::new(["cat"]).unwrap();
        assert_eq!(matcher.find_all("dog").count(), 0);
        assert_eq!(matcher.find_all("").count(), 0);
    }

    #[test]
    fn test_span_len() {
        let span = MatchSpan {
            pattern: 0,
            start: 2,
            end: 5,
        };
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }
}

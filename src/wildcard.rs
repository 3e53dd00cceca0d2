//! Wildcard pattern matching
//!
//! A pattern containing a designated wildcard symbol ("any character"
//! positions) is located by decomposing it into its maximal literal
//! segments, matching all segments with a single automaton scan, and
//! verifying that the segments of each candidate occurrence line up at
//! their exact offsets inside the pattern.
//!
//! # Example
//!
//! ```
//! use scour::{MatchMode, WildcardPattern};
//!
//! let pattern = WildcardPattern::new("a?c", '?', MatchMode::CaseSensitive)?;
//! assert_eq!(pattern.find_starts("xabcz"), vec![2]); // 1-based
//! # Ok::<(), scour::ScanError>(())
//! ```

use crate::ac::{normalize, AcAutomaton, MatchMode};
use crate::error::{Result, ScanError};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A maximal run of non-wildcard characters within a wildcard pattern,
/// tagged with its byte offset inside the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The literal text of the segment
    pub text: String,
    /// 0-based byte offset of the segment within the pattern
    pub offset: usize,
}

/// A single pattern with wildcard positions, decomposed for matching.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    pattern: String,
    wildcard: char,
    mode: MatchMode,
    segments: Vec<Segment>,
}

impl WildcardPattern {
    /// Decompose `pattern` around `wildcard`.
    ///
    /// The wildcard symbol must be ASCII: matching is byte-positional,
    /// so one wildcard position has to stand for exactly one byte of
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] for a non-ASCII wildcard
    /// symbol.
    pub fn new(pattern: &str, wildcard: char, mode: MatchMode) -> Result<Self> {
        if !wildcard.is_ascii() {
            return Err(ScanError::InvalidPattern(format!(
                "wildcard symbol {:?} is not ASCII",
                wildcard
            )));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            wildcard,
            mode,
            segments: decompose(pattern, wildcard),
        })
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the wildcard symbol.
    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Returns the match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the literal segments, in left-to-right order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Find every start position of the pattern in `text`.
    ///
    /// Positions are 1-based byte offsets, sorted ascending, each
    /// reported once. Candidate positions are anchored on occurrences of
    /// the first segment and every segment (the first included) is then
    /// re-validated at its expected offset; the gaps between segments
    /// are wildcard-only regions and need no content check beyond the
    /// window staying inside the text.
    pub fn find_starts(&self, text: &str) -> Vec<usize> {
        let n = text.len();
        let m = self.pattern.len();

        if m > n {
            return Vec::new();
        }

        // A pattern that is entirely wildcards matches every window of
        // its length.
        if self.segments.is_empty() {
            return (1..=n - m + 1).collect();
        }

        let automaton =
            AcAutomaton::build(self.segments.iter().map(|s| s.text.as_str()), self.mode);
        let occurrences = automaton.find_matches(text);

        let haystack = normalize(text, self.mode);
        let needles: Vec<Vec<u8>> = self
            .segments
            .iter()
            .map(|s| normalize(&s.text, self.mode).into_owned())
            .collect();

        let first_offset = self.segments[0].offset;
        let mut starts = FxHashSet::default();

        for occurrence in occurrences.iter().filter(|o| o.pattern_id == 0) {
            let Some(candidate) = occurrence.start.checked_sub(first_offset) else {
                continue;
            };
            if candidate + m > n {
                continue;
            }
            if self.segments_align(&haystack, &needles, candidate) {
                starts.insert(candidate + 1);
            }
        }

        let mut sorted: Vec<usize> = starts.into_iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Check that every segment occurs at its expected offset for a
    /// hypothesized pattern start.
    fn segments_align(&self, haystack: &[u8], needles: &[Vec<u8>], start: usize) -> bool {
        for (segment, needle) in self.segments.iter().zip(needles) {
            let lo = start + segment.offset;
            let hi = lo + needle.len();
            if hi > haystack.len() || &haystack[lo..hi] != needle.as_slice() {
                return false;
            }
        }
        true
    }
}

/// Split a pattern into maximal non-wildcard runs.
///
/// Consecutive wildcards collapse into a single gap; no empty segments
/// are produced.
fn decompose(pattern: &str, wildcard: char) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (i, ch) in pattern.char_indices() {
        if ch == wildcard {
            if !current.is_empty() {
                segments.push(Segment {
                    text: std::mem::take(&mut current),
                    offset: start,
                });
            }
        } else {
            if current.is_empty() {
                start = i;
            }
            current.push(ch);
        }
    }

    if !current.is_empty() {
        segments.push(Segment {
            text: current,
            offset: start,
        });
    }

    segments
}

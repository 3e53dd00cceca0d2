//! Match excision
//!
//! Given a text and a set of reported occurrences, this module computes
//! two independent views of the same match set: the remainder of the
//! text with every matched span excised, and the sorted list of display
//! ranges. Overlapping ranges are merged by the coverage mask for the
//! remainder but preserved verbatim in the range listing.

use crate::ac::PatternMatch;
use serde::Serialize;

/// One matched span projected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRange {
    /// Byte offset where the span starts
    pub start: usize,
    /// Byte offset one past the end of the span
    pub end: usize,
    /// Text of the matched pattern
    pub pattern: String,
}

/// Result of excising a match set from a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// The text with every covered position removed, order preserved
    pub remainder: String,
    /// All matched spans, sorted by start then end, overlaps preserved
    pub ranges: Vec<MatchRange>,
}

/// Excise all matched spans from `text`.
///
/// `patterns` must be the pattern list the matches were produced
/// against; each match's `pattern_id` indexes into it. Match spans are
/// clamped to the text bounds before they mark the coverage mask, and a
/// character survives into the remainder only if none of its bytes is
/// covered. An empty match set returns the text unchanged.
pub fn reduce(text: &str, matches: &[PatternMatch], patterns: &[String]) -> Reduction {
    let mut covered = vec![false; text.len()];
    for m in matches {
        let start = m.start.min(text.len());
        let end = (m.start + m.len).min(text.len());
        for slot in &mut covered[start..end] {
            *slot = true;
        }
    }

    let mut remainder = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if !covered[i..i + ch.len_utf8()].iter().any(|&c| c) {
            remainder.push(ch);
        }
    }

    let mut ranges: Vec<MatchRange> = matches
        .iter()
        .map(|m| MatchRange {
            start: m.start,
            end: m.start + m.len,
            pattern: patterns[m.pattern_id as usize].clone(),
        })
        .collect();
    ranges.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));

    Reduction { remainder, ranges }
}

//! In-memory Aho-Corasick automaton
//!
//! This module implements multi-pattern matching with a trie, failure
//! links, and output links. The automaton is built once from an ordered
//! pattern list and is immutable afterwards; scanning streams a text
//! through it in a single pass and reports every occurrence, including
//! patterns that are proper suffixes of longer matches ending at the
//! same position.
//!
//! # Design
//!
//! Nodes live in an arena (`Vec<Node>`) indexed by their monotonically
//! assigned id. Child edges are byte-keyed maps of arena indices, and
//! failure/output links are plain indices as well, so the link graph is
//! cyclic-reference-free by construction. All matching is byte-oriented:
//! reported positions are byte offsets into the scanned text.

use crate::reduce::{self, Reduction};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt::Write;

/// Matching mode for the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-sensitive matching
    CaseSensitive,
    /// Case-insensitive matching (ASCII folding)
    CaseInsensitive,
}

/// Arena index of the root node.
const ROOT: u32 = 0;

/// Normalize text for matching under the given mode.
///
/// Folding is ASCII-only so the byte length never changes and reported
/// offsets stay valid for the original text.
pub(crate) fn normalize(text: &str, mode: MatchMode) -> Cow<'_, [u8]> {
    match mode {
        MatchMode::CaseSensitive => Cow::Borrowed(text.as_bytes()),
        MatchMode::CaseInsensitive => {
            Cow::Owned(text.bytes().map(|b| b.to_ascii_lowercase()).collect())
        }
    }
}

/// A single trie node in the arena.
#[derive(Debug, Clone)]
struct Node {
    id: u32,
    /// Byte-keyed child edges (arena indices). These are the only owning
    /// edges in the structure.
    transitions: FxHashMap<u8, u32>,
    /// Longest proper suffix of this node's path that is also a trie
    /// path. The root points to itself.
    failure: u32,
    /// Nearest ancestor-by-failure-chain that terminates a pattern.
    output: Option<u32>,
    /// Indices of the patterns ending exactly here. Duplicate patterns
    /// keep their distinct indices.
    pattern_ids: Vec<u32>,
    /// Length in bytes of the pattern(s) ending here. All patterns that
    /// share a terminal node share one root path, hence one length.
    pattern_len: usize,
}

impl Node {
    fn new(id: u32) -> Self {
        Self {
            id,
            transitions: FxHashMap::default(),
            failure: ROOT,
            output: None,
            pattern_ids: Vec::new(),
            pattern_len: 0,
        }
    }

    fn is_terminal(&self) -> bool {
        !self.pattern_ids.is_empty()
    }
}

/// A single reported occurrence: a pattern ending somewhere in the text.
///
/// The derived ordering is `(start, pattern_id, len)`, which is exactly
/// the order scan results are returned in: start position ascending with
/// ties broken by pattern index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PatternMatch {
    /// Byte offset in the text where the occurrence starts
    pub start: usize,
    /// Index of the matched pattern in the automaton's pattern list
    pub pattern_id: u32,
    /// Length of the occurrence in bytes
    pub len: usize,
}

/// Automaton statistics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    /// Number of patterns the automaton was built from
    pub pattern_count: usize,
    /// Number of trie nodes, including the root
    pub node_count: usize,
    /// Number of trie edges (always `node_count - 1`)
    pub edge_count: usize,
    /// Number of terminal nodes
    pub terminal_count: usize,
    /// Maximum number of child edges observed at any single node
    pub max_fanout: usize,
}

/// Builder used during construction.
///
/// Construction runs in two strictly ordered phases: every pattern is
/// inserted into the trie, then failure and output links are computed in
/// one breadth-first pass. Only the finished automaton is handed out, so
/// a partially linked structure is never visible to a search.
struct AcBuilder {
    nodes: Vec<Node>,
    patterns: Vec<String>,
    mode: MatchMode,
    max_fanout: usize,
}

impl AcBuilder {
    fn new(mode: MatchMode) -> Self {
        Self {
            nodes: vec![Node::new(ROOT)],
            patterns: Vec::new(),
            mode,
            max_fanout: 0,
        }
    }

    /// Insert one pattern, extending the trie as needed.
    fn add_pattern(&mut self, pattern: &str) {
        let pattern_id = self.patterns.len() as u32;
        self.patterns.push(pattern.to_string());

        let normalized = normalize(pattern, self.mode);

        let mut current = ROOT;
        for &ch in normalized.iter() {
            if let Some(&next) = self.nodes[current as usize].transitions.get(&ch) {
                current = next;
            } else {
                let new_id = self.nodes.len() as u32;
                self.nodes.push(Node::new(new_id));
                self.nodes[current as usize].transitions.insert(ch, new_id);
                // Fanout statistic is evaluated after the insertion.
                self.max_fanout = self
                    .max_fanout
                    .max(self.nodes[current as usize].transitions.len());
                current = new_id;
            }
        }

        // An empty pattern lands here with `current` still at the root,
        // making the root itself terminal.
        let node = &mut self.nodes[current as usize];
        node.pattern_ids.push(pattern_id);
        node.pattern_len = normalized.len();
    }

    /// Compute failure and output links breadth-first from the root.
    ///
    /// Processing strictly increases depth level by level, so a node's
    /// failure target and its output link are always fully resolved
    /// before any deeper node reads them.
    fn build_links(&mut self) {
        let mut queue = VecDeque::new();
        queue.push_back(ROOT);

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(u8, u32)> = self.nodes[current as usize]
                .transitions
                .iter()
                .map(|(&ch, &child)| (ch, child))
                .collect();

            for (ch, child) in edges {
                queue.push_back(child);

                let failure = if current == ROOT {
                    ROOT
                } else {
                    // Walk failure links upward until a node is found
                    // that has a child on the same symbol or is the root.
                    let mut probe = self.nodes[current as usize].failure;
                    while probe != ROOT
                        && !self.nodes[probe as usize].transitions.contains_key(&ch)
                    {
                        probe = self.nodes[probe as usize].failure;
                    }
                    self.nodes[probe as usize]
                        .transitions
                        .get(&ch)
                        .copied()
                        .unwrap_or(ROOT)
                };
                self.nodes[child as usize].failure = failure;

                let output = if self.nodes[failure as usize].is_terminal() {
                    Some(failure)
                } else {
                    self.nodes[failure as usize].output
                };
                self.nodes[child as usize].output = output;
            }
        }
    }
}

/// Multi-pattern matching automaton.
///
/// Built once from an ordered pattern list, then read-only: searches
/// never mutate node state, so a single automaton may serve any number
/// of concurrent searches without coordination.
///
/// # Example
///
/// ```
/// use scour::{AcAutomaton, MatchMode};
///
/// let automaton = AcAutomaton::build(["he", "she", "his", "hers"], MatchMode::CaseSensitive);
/// let matches = automaton.find_matches("ahishers");
///
/// // "he" is found nested inside "hers"
/// assert!(matches.iter().any(|m| m.start == 4 && m.len == 2));
/// assert!(matches.iter().any(|m| m.start == 4 && m.len == 4));
/// ```
#[derive(Debug, Clone)]
pub struct AcAutomaton {
    nodes: Vec<Node>,
    patterns: Vec<String>,
    mode: MatchMode,
    max_fanout: usize,
}

impl AcAutomaton {
    /// Build the automaton from an ordered sequence of patterns.
    ///
    /// Empty pattern strings are permitted and terminate at the root;
    /// an empty pattern set yields a single-node automaton that matches
    /// nothing.
    pub fn build<I, S>(patterns: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AcBuilder::new(mode);
        for pattern in patterns {
            builder.add_pattern(pattern.as_ref());
        }
        builder.build_links();

        Self {
            nodes: builder.nodes,
            patterns: builder.patterns,
            mode,
            max_fanout: builder.max_fanout,
        }
    }

    /// Find every occurrence of every pattern in `text`.
    ///
    /// The text is streamed through the automaton once. At each position
    /// the cursor's own terminal state and its entire output-link chain
    /// are reported, which is what surfaces nested matches (patterns
    /// that are suffixes of longer patterns matched at the same
    /// position). Overlapping occurrences are all reported, and
    /// duplicate patterns are reported once per index, never collapsed.
    ///
    /// The result is sorted by start position, ties broken by pattern
    /// index.
    pub fn find_matches(&self, text: &str) -> Vec<PatternMatch> {
        let normalized = normalize(text, self.mode);

        let mut matches = Vec::new();
        let mut current = ROOT;

        for (pos, &ch) in normalized.iter().enumerate() {
            // On mismatch fall back along failure links; the cursor only
            // ever advances on a symbol it has a path for.
            while current != ROOT && !self.nodes[current as usize].transitions.contains_key(&ch) {
                current = self.nodes[current as usize].failure;
            }
            if let Some(&next) = self.nodes[current as usize].transitions.get(&ch) {
                current = next;
            }

            let node = &self.nodes[current as usize];
            if node.is_terminal() {
                for &pattern_id in &node.pattern_ids {
                    matches.push(PatternMatch {
                        start: pos + 1 - node.pattern_len,
                        pattern_id,
                        len: node.pattern_len,
                    });
                }
            }

            // Each node on the output-link chain reports against its own
            // pattern length, not the cursor's.
            let mut link = node.output;
            while let Some(idx) = link {
                let out = &self.nodes[idx as usize];
                for &pattern_id in &out.pattern_ids {
                    matches.push(PatternMatch {
                        start: pos + 1 - out.pattern_len,
                        pattern_id,
                        len: out.pattern_len,
                    });
                }
                link = out.output;
            }
        }

        matches.sort_unstable();
        matches
    }

    /// Excise all matched spans from `text`.
    ///
    /// Convenience wrapper around [`crate::reduce::reduce`] using this
    /// automaton's pattern list.
    pub fn reduce(&self, text: &str, matches: &[PatternMatch]) -> Reduction {
        reduce::reduce(text, matches, &self.patterns)
    }

    /// The original pattern list, in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of patterns the automaton was built from.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Total number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Maximum number of child edges observed at any single node.
    pub fn max_fanout(&self) -> usize {
        self.max_fanout
    }

    /// Number of nodes at which at least one pattern terminates.
    pub fn terminal_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    /// The match mode the automaton was built with.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Aggregate statistics for the automaton.
    pub fn stats(&self) -> Stats {
        Stats {
            pattern_count: self.patterns.len(),
            node_count: self.nodes.len(),
            edge_count: self.nodes.iter().map(|n| n.transitions.len()).sum(),
            terminal_count: self.terminal_count(),
            max_fanout: self.max_fanout,
        }
    }

    /// Render the trie as a Graphviz digraph.
    ///
    /// Nodes are labeled with their id; terminal nodes additionally list
    /// the 1-based numbers of the patterns ending there and are drawn
    /// filled. Edges are labeled with their symbol. The root is emitted
    /// first and the rest follow in breadth-first order.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph trie {\n");
        dot.push_str("    node [shape=circle];\n");

        let mut queue = VecDeque::new();
        queue.push_back(ROOT);

        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id as usize];

            let mut label = node.id.to_string();
            if node.is_terminal() {
                let numbers: Vec<String> = node
                    .pattern_ids
                    .iter()
                    .map(|&i| (i + 1).to_string())
                    .collect();
                label.push_str("\\n");
                label.push_str(&numbers.join(","));
            }
            if node.is_terminal() || id == ROOT {
                let _ = writeln!(
                    dot,
                    "    {} [label=\"{}\", style=filled, fillcolor=lightblue];",
                    node.id, label
                );
            } else {
                let _ = writeln!(dot, "    {} [label=\"{}\"];", node.id, label);
            }

            let mut edges: Vec<(u8, u32)> = node
                .transitions
                .iter()
                .map(|(&ch, &child)| (ch, child))
                .collect();
            edges.sort_unstable_by_key(|(ch, _)| *ch);

            for (ch, child) in edges {
                let _ = writeln!(
                    dot,
                    "    {} -> {} [label=\"{}\"];",
                    node.id,
                    child,
                    dot_escape(ch)
                );
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Escape a symbol byte for use inside a quoted DOT label.
fn dot_escape(byte: u8) -> String {
    match byte {
        b'"' => "\\\"".to_string(),
        b'\\' => "\\\\".to_string(),
        0x20..=0x7e => (byte as char).to_string(),
        _ => format!("0x{:02x}", byte),
    }
}

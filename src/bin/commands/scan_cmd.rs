use anyhow::Result;
use scour::AcAutomaton;
use serde_json::json;
use std::path::PathBuf;

use crate::cli_utils::{match_mode, read_patterns, read_text};

pub fn cmd_scan(
    patterns_file: PathBuf,
    input: Option<PathBuf>,
    json_output: bool,
    stats: bool,
    ignore_case: bool,
    keep_empty: bool,
) -> Result<()> {
    let patterns = read_patterns(&patterns_file, keep_empty)?;
    let text = read_text(input.as_deref())?;

    let automaton = AcAutomaton::build(&patterns, match_mode(ignore_case));
    let matches = automaton.find_matches(&text);
    let reduction = automaton.reduce(&text, &matches);

    if stats {
        let s = automaton.stats();
        eprintln!("Patterns:       {}", s.pattern_count);
        eprintln!("Nodes:          {}", s.node_count);
        eprintln!("Edges:          {}", s.edge_count);
        eprintln!("Terminal nodes: {}", s.terminal_count);
        eprintln!("Max fanout:     {}", s.max_fanout);
    }

    let found = !matches.is_empty();

    if json_output {
        let output = json!({
            "matches": matches,
            "ranges": reduction.ranges,
            "remainder": reduction.remainder,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if found {
        println!("Found {} occurrence(s):", matches.len());
        for range in &reduction.ranges {
            println!("  {}..{}: '{}'", range.start, range.end, range.pattern);
        }
        println!("Remainder: '{}'", reduction.remainder);
        let removed = text.len() - reduction.remainder.len();
        println!("Removed {} of {} bytes", removed, text.len());
    } else {
        println!("No occurrences");
        println!("Remainder: '{}'", reduction.remainder);
    }

    std::process::exit(if found { 0 } else { 1 });
}

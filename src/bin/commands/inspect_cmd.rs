use anyhow::{Context, Result};
use scour::AcAutomaton;
use std::fs;
use std::path::PathBuf;

use crate::cli_utils::{match_mode, read_patterns};

pub fn cmd_inspect(
    patterns_file: PathBuf,
    json_output: bool,
    dot: Option<PathBuf>,
    ignore_case: bool,
    keep_empty: bool,
) -> Result<()> {
    let patterns = read_patterns(&patterns_file, keep_empty)?;
    let automaton = AcAutomaton::build(&patterns, match_mode(ignore_case));
    let stats = automaton.stats();

    if let Some(path) = dot {
        fs::write(&path, automaton.to_dot())
            .with_context(|| format!("Failed to write DOT file: {}", path.display()))?;
        eprintln!("Trie rendering written to: {}", path.display());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Patterns:       {}", stats.pattern_count);
        println!("Nodes:          {}", stats.node_count);
        println!("Edges:          {}", stats.edge_count);
        println!("Terminal nodes: {}", stats.terminal_count);
        println!("Max fanout:     {}", stats.max_fanout);
    }

    Ok(())
}

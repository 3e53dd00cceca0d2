use anyhow::Result;
use scour::WildcardPattern;
use serde_json::json;
use std::path::PathBuf;

use crate::cli_utils::{match_mode, read_text};

pub fn cmd_wildcard(
    pattern: String,
    input: Option<PathBuf>,
    wildcard: char,
    json_output: bool,
    ignore_case: bool,
) -> Result<()> {
    let text = read_text(input.as_deref())?;

    let wildcard_pattern = WildcardPattern::new(&pattern, wildcard, match_mode(ignore_case))?;
    let starts = wildcard_pattern.find_starts(&text);

    let found = !starts.is_empty();

    if json_output {
        let output = json!({
            "pattern": pattern,
            "wildcard": wildcard.to_string(),
            "starts": starts,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if found {
        let positions: Vec<String> = starts.iter().map(|s| s.to_string()).collect();
        println!(
            "Found {} occurrence(s) at position(s): {}",
            starts.len(),
            positions.join(", ")
        );
    } else {
        println!("No occurrences");
    }

    std::process::exit(if found { 0 } else { 1 });
}

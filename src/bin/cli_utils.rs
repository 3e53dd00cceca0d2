use anyhow::{Context, Result};
use scour::MatchMode;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a pattern file: one pattern per line.
///
/// Line scanning uses memchr; a trailing `\r` is stripped so CRLF files
/// behave. Blank lines are skipped unless `keep_empty` is set (empty
/// patterns are legal but rarely intended).
pub fn read_patterns(path: &Path, keep_empty: bool) -> Result<Vec<String>> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;
    split_lines(&data, keep_empty)
        .with_context(|| format!("Invalid pattern file: {}", path.display()))
}

fn split_lines(data: &[u8], keep_empty: bool) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    let mut start = 0;

    for newline in memchr::memchr_iter(b'\n', data) {
        push_line(&data[start..newline], keep_empty, &mut patterns)?;
        start = newline + 1;
    }
    // Final line without a trailing newline.
    if start < data.len() {
        push_line(&data[start..], keep_empty, &mut patterns)?;
    }

    Ok(patterns)
}

fn push_line(line: &[u8], keep_empty: bool, patterns: &mut Vec<String>) -> Result<()> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.is_empty() && !keep_empty {
        return Ok(());
    }
    let line = std::str::from_utf8(line).context("pattern file is not valid UTF-8")?;
    patterns.push(line.to_string());
    Ok(())
}

/// Read the text to scan from a file, or from stdin for `-`/no path.
///
/// One trailing newline is stripped; everything else is scanned as-is.
pub fn read_text(input: Option<&Path>) -> Result<String> {
    let mut text = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

pub fn match_mode(ignore_case: bool) -> MatchMode {
    if ignore_case {
        MatchMode::CaseInsensitive
    } else {
        MatchMode::CaseSensitive
    }
}

mod cli_utils;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_inspect, cmd_scan, cmd_wildcard};

#[derive(Parser)]
#[command(name = "scour")]
#[command(
    about = "Multi-pattern text scanner with wildcard matching and match excision",
    long_about = "scour - Multi-pattern text scanner with wildcard matching and match excision\n\n\
    Scan a text for every occurrence of a set of literal patterns in a single pass \n\
    (nested and overlapping occurrences included), locate a pattern containing \n\
    wildcard positions, and excise matched spans from the text.\n\n\
    Examples:\n\
      scour scan patterns.txt input.txt\n\
      echo 'ahishers' | scour scan patterns.txt --stats\n\
      echo 'xabcz' | scour wildcard 'a?c'\n\
      scour inspect patterns.txt --dot trie.dot"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for all patterns and excise the matched spans
    Scan {
        /// File with one pattern per line
        #[arg(value_name = "PATTERNS")]
        patterns: PathBuf,

        /// Text file to scan, or "-" for stdin (default)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output matches, ranges, and remainder as JSON
        #[arg(long)]
        json: bool,

        /// Print automaton statistics to stderr
        #[arg(short, long)]
        stats: bool,

        /// Case-insensitive matching (ASCII folding)
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Keep blank lines in the pattern file as empty patterns
        #[arg(long)]
        keep_empty: bool,
    },

    /// Locate a single pattern containing wildcard positions
    Wildcard {
        /// The pattern; wildcard positions match any single character
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Text file to scan, or "-" for stdin (default)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Wildcard symbol (a single ASCII character)
        #[arg(short, long, default_value = "?")]
        wildcard: char,

        /// Output start positions as JSON
        #[arg(long)]
        json: bool,

        /// Case-insensitive matching (ASCII folding)
        #[arg(short = 'i', long)]
        ignore_case: bool,
    },

    /// Print automaton statistics for a pattern set
    Inspect {
        /// File with one pattern per line
        #[arg(value_name = "PATTERNS")]
        patterns: PathBuf,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,

        /// Write a Graphviz rendering of the trie to PATH
        #[arg(long, value_name = "PATH")]
        dot: Option<PathBuf>,

        /// Case-insensitive matching (ASCII folding)
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Keep blank lines in the pattern file as empty patterns
        #[arg(long)]
        keep_empty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            patterns,
            input,
            json,
            stats,
            ignore_case,
            keep_empty,
        } => cmd_scan(patterns, input, json, stats, ignore_case, keep_empty),
        Commands::Wildcard {
            pattern,
            input,
            wildcard,
            json,
            ignore_case,
        } => cmd_wildcard(pattern, input, wildcard, json, ignore_case),
        Commands::Inspect {
            patterns,
            json,
            dot,
            ignore_case,
            keep_empty,
        } => cmd_inspect(patterns, json, dot, ignore_case, keep_empty),
    }
}

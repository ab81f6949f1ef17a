use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "code-tally")]
#[command(
    author,
    version,
    about = "Tally lines and functions in JavaScript/TypeScript sources"
)]
#[command(long_about = "Walks a directory tree and reports, per source file, the line count and a \
    heuristic function count, followed by project totals.\n\n\
    Function counts come from a fixed set of textual patterns and may count a single \
    declaration more than once.\n\n\
    Exit codes:\n  \
    0 - Report completed (unreadable files are reported but do not fail the run)\n  \
    2 - Configuration error or unusable scan root")]
pub struct Cli {
    /// Directory to scan
    #[arg(env = "CODE_TALLY_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// File extensions to count (comma-separated, e.g., ts,tsx,js); replaces the configured set
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Directory name to skip wherever it appears (can be specified multiple times)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Exclude patterns relative to ROOT (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase output verbosity (-v shows per-pattern counts and traversal warnings)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print only the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

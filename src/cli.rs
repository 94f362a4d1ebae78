use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

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

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "quality-timeline")]
#[command(
    author,
    version,
    about = "Render per-version code quality snapshots as a timeline report"
)]
#[command(long_about = "Reads per-version snapshot, commit metadata and release list files \
    from one folder and writes a six-page HTML timeline report.\n\n\
    Exit codes:\n  \
    0 - Report written\n  \
    2 - Configuration, input or render error")]
pub struct Cli {
    /// Folder holding snapshots, metadata files and the release list
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file (default: .quality-timeline.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Files whose latest reference count is at or below this are not plotted
    #[arg(long)]
    pub exclusion_threshold: Option<u64>,

    /// Number of most recent commits shown in the history table
    #[arg(long)]
    pub commit_window: Option<usize>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

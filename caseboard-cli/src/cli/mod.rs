//! Command-line interface definitions

pub mod commands;
pub mod table;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Operating-room minor case board from schedule exports
#[derive(Parser)]
#[command(name = "caseboard-cli", version, about)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the daily shift × category summary
    Summary(SummaryArgs),
    /// Show procedure texts the rule table could not place
    Review(ReviewArgs),
    /// Show the sanitized case list in schedule order
    List(ListArgs),
    /// Maintain the done/not-done case tracker
    Track(TrackArgs),
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Schedule export (.xlsx, .xls or .csv)
    pub file: PathBuf,

    /// Retry "Other" cases with fuzzy matching
    #[arg(long)]
    pub fuzzy: bool,

    /// Fuzzy similarity threshold (60-95)
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<u8>,

    /// Also export the summary workbook to this path
    #[arg(long, value_name = "XLSX")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReviewArgs {
    /// Schedule export (.xlsx, .xls or .csv)
    pub file: PathBuf,

    /// Maximum number of texts to list
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Schedule export (.xlsx, .xls or .csv)
    pub file: PathBuf,
}

#[derive(Args)]
pub struct TrackArgs {
    #[command(subcommand)]
    pub command: TrackCommands,
}

#[derive(Subcommand)]
pub enum TrackCommands {
    /// Mark a schedule row as done
    Done {
        /// Schedule export the row belongs to
        file: PathBuf,
        /// Row position as shown by `list`
        row: usize,
    },
    /// Clear all completion state for a schedule file
    Reset {
        /// Schedule export to reset
        file: PathBuf,
    },
    /// Show remaining cases per category
    Ongoing {
        /// Schedule export to report on
        file: PathBuf,
    },
}

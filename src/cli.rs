//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::SortOrder;
use strictly_rewind::ReplayFormat;

/// Strictly Rewind - tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe you can rewind and branch", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "strictly_rewind.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the newest move at the top of the history
        #[arg(long)]
        descending: bool,
    },

    /// Replay a move list and print the result
    Replay {
        /// Cell indices (0-8, row-major), comma separated
        #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(0..=8))]
        moves: Vec<u8>,

        /// History step to show instead of the latest
        #[arg(short, long)]
        jump: Option<usize>,

        /// List the history newest first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,
    },
}

/// Resolves a `--descending` flag against the configured order.
pub fn sort_order(descending: bool, configured: SortOrder) -> SortOrder {
    if descending {
        SortOrder::Descending
    } else {
        configured
    }
}

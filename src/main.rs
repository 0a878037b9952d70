//! Strictly Rewind - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, sort_order};
use strictly_rewind::{RewindConfig, run_replay, tui};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { descending } => {
            let order = sort_order(descending, *config.sort_order());
            tui::run_tui(&config.with_sort_order(order))
        }
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => {
            initialize_stderr_tracing(&config);
            let moves: Vec<usize> = moves.into_iter().map(usize::from).collect();
            let order = sort_order(descending, *config.sort_order());
            replay(&moves, jump, order, format)
        }
    }
}

/// Run a headless replay, writing to stdout
#[instrument]
fn replay(
    moves: &[usize],
    jump: Option<usize>,
    order: rewind_tictactoe::SortOrder,
    format: strictly_rewind::ReplayFormat,
) -> Result<()> {
    info!("Starting replay");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_replay(moves, jump, order, format, &mut out)
}

fn initialize_stderr_tracing(config: &RewindConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

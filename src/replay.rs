//! Headless replay of a scripted move sequence.

use crate::presenter::{MoveEntry, move_entries, status_line};
use anyhow::{Context, Result};
use rewind_tictactoe::{BoardState, GameStateMachine, SortOrder};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// Output format for the replay report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReplayFormat {
    /// Board, status line and move list as plain text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// What a replay reports.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Step under the cursor.
    pub cursor: usize,
    /// Status line for the current state.
    pub status: String,
    /// State under the cursor.
    pub current: &'a BoardState,
    /// Move list in the requested order.
    pub moves: Vec<MoveEntry>,
    /// Every recorded state, oldest first.
    pub history: &'a [BoardState],
}

impl<'a> ReplayReport<'a> {
    /// Collects the report for a machine.
    pub fn new(machine: &'a GameStateMachine, order: SortOrder) -> Self {
        Self {
            cursor: machine.cursor(),
            status: status_line(machine.current_state()),
            current: machine.current_state(),
            moves: move_entries(machine, order),
            history: machine.history(),
        }
    }
}

/// Plays `moves`, optionally jumps to a step, and writes the report.
///
/// Moves that are not legal at their turn are skipped, as a player's
/// click on a taken square would be.
///
/// # Errors
///
/// Fails if `jump` is not a recorded step or the output cannot be written.
#[instrument(skip(out))]
pub fn run_replay(
    moves: &[usize],
    jump: Option<usize>,
    order: SortOrder,
    format: ReplayFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut machine = GameStateMachine::replay(moves);
    info!(len = machine.len(), "Replayed moves");

    if let Some(step) = jump {
        machine
            .jump_to(step)
            .with_context(|| format!("Failed to jump to step {}", step))?;
    }

    let report = ReplayReport::new(&machine, order);
    match format {
        ReplayFormat::Text => write_text(&report, out)?,
        ReplayFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("Failed to serialize replay report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text(report: &ReplayReport<'_>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", report.current.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", report.status)?;
    writeln!(out)?;
    for entry in &report.moves {
        let marker = if *entry.is_current() { ">" } else { " " };
        match entry.description() {
            Some(description) => {
                writeln!(out, "{} {} {}", marker, entry.label(), description)?
            }
            None => writeln!(out, "{} {}", marker, entry.label())?,
        }
    }
    Ok(())
}

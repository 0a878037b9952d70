//! Text derived from game state for display.
//!
//! Every front end renders the same status line and move list, so the
//! wording lives here rather than in the widgets.

use derive_getters::Getters;
use derive_new::new;
use rewind_tictactoe::{BoardState, GameStateMachine, SortOrder};
use serde::Serialize;
use tracing::instrument;

/// Status text for a state: whose turn it is, or how the game ended.
#[instrument(skip(state))]
pub fn status_line(state: &BoardState) -> String {
    let outcome = state.outcome();
    if let Some(winner) = outcome.winner() {
        format!("Player {} won the game!", winner)
    } else if outcome.is_draw() {
        "The game is a draw! No more moves available.".to_string()
    } else {
        format!("Next player: {}", state.next_player())
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Who played where; `None` for game start.
    description: Option<String>,
    /// Whether the cursor is on this step.
    is_current: bool,
}

impl MoveEntry {
    /// Builds the entry for `state` recorded at `step`.
    pub fn describe(step: usize, state: &BoardState, cursor: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        let description = state
            .mover()
            .zip(state.last_move_location())
            .map(|(mover, (row, col))| {
                format!("Player {} selected (row:{}, col:{})", mover, row + 1, col + 1)
            });
        Self::new(step, label, description, step == cursor)
    }
}

/// Move list entries for the whole history, in `order`.
#[instrument(skip(machine), fields(len = machine.len(), cursor = machine.cursor()))]
pub fn move_entries(machine: &GameStateMachine, order: SortOrder) -> Vec<MoveEntry> {
    machine
        .move_list(order)
        .map(|(step, state)| MoveEntry::describe(step, state, machine.cursor()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_variants() {
        let fresh = GameStateMachine::new();
        assert_eq!(status_line(fresh.current_state()), "Next player: X");

        let won = GameStateMachine::replay(&[3, 0, 4, 1, 6, 2]);
        assert_eq!(status_line(won.current_state()), "Player O won the game!");

        let drawn = GameStateMachine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(
            status_line(drawn.current_state()),
            "The game is a draw! No more moves available."
        );
    }

    #[test]
    fn test_game_start_entry_has_no_description() {
        let machine = GameStateMachine::new();
        let entry = MoveEntry::describe(0, machine.current_state(), 0);
        assert_eq!(entry.label(), "Go to game start");
        assert_eq!(entry.description(), &None);
        assert!(*entry.is_current());
    }
}

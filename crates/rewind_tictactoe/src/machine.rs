//! Rewindable game state machine.
//!
//! The machine owns every snapshot played so far plus a cursor naming the
//! one on display. Jumping moves only the cursor; playing from a rewound
//! cursor discards the abandoned branch before appending.

use super::error::{GameError, IgnoredMove, MoveDisposition};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::state::BoardState;
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Direction in which to list history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Most recent move first.
    Descending,
}

impl SortOrder {
    /// Flips the direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Oldest first",
            Self::Descending => "Newest first",
        }
    }
}

/// History of board states with a movable cursor.
///
/// Deserializing checks every history invariant, so a restored machine is
/// as sound as one built by playing moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMachine")]
pub struct GameStateMachine {
    pub(crate) history: Vec<BoardState>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of [`GameStateMachine`].
#[derive(Deserialize)]
struct RawMachine {
    history: Vec<BoardState>,
    cursor: usize,
}

impl TryFrom<RawMachine> for GameStateMachine {
    type Error = GameError;

    #[instrument(skip(raw), fields(len = raw.history.len(), cursor = raw.cursor))]
    fn try_from(raw: RawMachine) -> Result<Self, Self::Error> {
        let machine = Self {
            history: raw.history,
            cursor: raw.cursor,
        };
        HistoryInvariants::check_all(&machine).map_err(|violations| {
            let reason = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reason, "Rejecting restored history");
            GameError::InvalidHistory { reason }
        })?;
        Ok(machine)
    }
}

impl GameStateMachine {
    /// Creates a machine holding only the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![BoardState::initial()],
            cursor: 0,
        }
    }

    /// Builds a machine by playing cell indices in order.
    ///
    /// Ignored moves are skipped.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut machine = Self::new();
        for &index in indices {
            if let MoveDisposition::Ignored(reason) = machine.apply_index(index) {
                warn!(index, %reason, "Skipping move during replay");
            }
        }
        machine
    }

    /// Plays the square at `pos` for the player to move at the cursor.
    ///
    /// Future entries past the cursor are discarded first. Moves on a
    /// finished board or an occupied square are ignored and leave the
    /// machine untouched.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveDisposition {
        let current = self.current_state();
        if current.outcome().is_terminal() {
            debug!("Ignoring move on finished board");
            return MoveDisposition::Ignored(IgnoredMove::GameOver);
        }
        let Some(next) = current.successor(pos) else {
            debug!("Ignoring move on occupied square");
            return MoveDisposition::Ignored(IgnoredMove::SquareOccupied(pos));
        };

        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            info!(discarded, "Discarding future history");
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after move"
        );
        debug!(
            outcome = ?self.current_state().outcome(),
            step = self.cursor,
            "Move applied"
        );
        MoveDisposition::Applied
    }

    /// Plays the square at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveDisposition {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!("Ignoring out-of-bounds index");
                MoveDisposition::Ignored(IgnoredMove::OutOfBounds(index))
            }
        }
    }

    /// Moves the cursor to `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::JumpOutOfRange`] if `index` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.history.len() {
            warn!("Rejecting out-of-range jump");
            return Err(GameError::JumpOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.cursor = index;
        debug!(cursor = self.cursor, "Cursor moved");
        Ok(())
    }

    /// Returns the state under the cursor.
    pub fn current_state(&self) -> &BoardState {
        &self.history[self.cursor]
    }

    /// Returns every recorded state, oldest first.
    pub fn history(&self) -> &[BoardState] {
        &self.history
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded states (never zero).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; history starts with the initial state.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Checks if the cursor is on the newest state.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// Squares that can be played from the cursor.
    pub fn valid_moves(&self) -> Vec<Position> {
        let current = self.current_state();
        if current.outcome().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(current.board())
        }
    }

    /// Lists `(step, state)` pairs in the requested order.
    pub fn move_list(
        &self,
        order: SortOrder,
    ) -> impl Iterator<Item = (usize, &BoardState)> + '_ {
        let len = self.history.len();
        (0..len)
            .map(move |row| match order {
                SortOrder::Ascending => row,
                SortOrder::Descending => len - 1 - row,
            })
            .map(move |step| (step, &self.history[step]))
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;
    use crate::invariants::{CursorInRangeInvariant, Invariant, InitialStateInvariant};

    #[test]
    fn test_new_machine() {
        let machine = GameStateMachine::new();
        assert_eq!(machine.len(), 1);
        assert_eq!(machine.cursor(), 0);
        assert!(machine.is_at_latest());
        assert!(!machine.is_empty());
        assert_eq!(machine.valid_moves().len(), 9);
    }

    #[test]
    fn test_out_of_bounds_index_ignored() {
        let mut machine = GameStateMachine::new();
        assert_eq!(
            machine.apply_index(9),
            MoveDisposition::Ignored(IgnoredMove::OutOfBounds(9))
        );
        assert_eq!(machine, GameStateMachine::new());
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut machine = GameStateMachine::replay(&[0, 4, 8]);
        let before = machine.history().to_vec();

        machine.jump_to(1).expect("step 1 exists");
        assert_eq!(machine.cursor(), 1);
        assert!(!machine.is_at_latest());
        assert_eq!(machine.history(), before.as_slice());

        machine.jump_to(3).expect("forward jump");
        assert_eq!(machine.cursor(), 3);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut machine = GameStateMachine::replay(&[0]);
        let err = machine.jump_to(2).expect_err("only two entries");
        assert_eq!(err, GameError::JumpOutOfRange { index: 2, len: 2 });
        assert_eq!(machine.cursor(), 1);
    }

    #[test]
    fn test_replay_skips_ignored_moves() {
        let machine = GameStateMachine::replay(&[4, 4, 12, 0]);
        assert_eq!(machine.len(), 3);
        assert_eq!(machine.current_state().last_move(), Some(Position::TopLeft));
    }

    #[test]
    fn test_move_list_orders() {
        let machine = GameStateMachine::replay(&[0, 1]);
        let ascending: Vec<usize> = machine.move_list(SortOrder::Ascending).map(|(i, _)| i).collect();
        let descending: Vec<usize> = machine.move_list(SortOrder::Descending).map(|(i, _)| i).collect();
        assert_eq!(ascending, [0, 1, 2]);
        assert_eq!(descending, [2, 1, 0]);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let result = serde_json::from_str::<GameStateMachine>(r#"{"history":[],"cursor":0}"#);
        let err = result.expect_err("empty history has no initial state");
        assert!(err.to_string().contains(InitialStateInvariant::description()));
    }

    #[test]
    fn test_deserialize_rejects_cursor_past_end() {
        let initial = serde_json::to_value(BoardState::initial()).expect("serializable");
        let json = serde_json::json!({ "history": [initial], "cursor": 5 });
        let err = serde_json::from_value::<GameStateMachine>(json).expect_err("cursor out of range");
        assert!(err.to_string().contains(CursorInRangeInvariant::description()));
    }

    #[test]
    fn test_deserialize_accepts_rewound_machine() {
        let mut machine = GameStateMachine::replay(&[0, 4, 8]);
        machine.jump_to(1).expect("step 1 exists");
        let json = serde_json::to_string(&machine).expect("serializable");
        let restored: GameStateMachine = serde_json::from_str(&json).expect("valid history");
        assert_eq!(restored, machine);
        assert_eq!(restored.current_state().last_move(), Some(Position::TopLeft));
    }

    #[test]
    fn test_no_valid_moves_after_win() {
        let machine = GameStateMachine::replay(&[0, 3, 1, 4, 2]);
        assert_eq!(machine.current_state().outcome(), Outcome::XWon);
        assert!(machine.valid_moves().is_empty());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }
}

//! Errors and rejection reasons for game operations.

use super::Position;
use serde::{Deserialize, Serialize};

/// Error returned by fallible [`GameStateMachine`](crate::GameStateMachine) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A jump targeted a step outside the recorded history.
    #[display("Cannot jump to step {index}: history has {len} entries")]
    JumpOutOfRange {
        /// Requested step.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// Restored history breaks one or more history invariants.
    #[display("Invalid history: {reason}")]
    InvalidHistory {
        /// Descriptions of the violated invariants.
        reason: String,
    },
}

/// Why a move was ignored.
///
/// Illegal moves are not errors: the board simply does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The current state is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The square is already taken.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The index does not name a square.
    #[display("No square at index {_0}")]
    OutOfBounds(usize),
}

/// Result of asking the machine to play a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDisposition {
    /// A new state was appended and the cursor moved onto it.
    Applied,
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveDisposition {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveDisposition::Applied)
    }
}

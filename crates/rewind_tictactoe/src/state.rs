//! Immutable per-ply snapshots of the game.

use super::outcome::Outcome;
use super::rules::detect_win;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display tag attached to each square of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellAnnotation {
    /// Nothing to highlight.
    #[default]
    Unselected,
    /// The square filled by the move that produced the snapshot.
    JustSelected,
    /// Part of the completed line.
    WinningLine,
}

/// The game as it stood after one ply.
///
/// Created only by [`BoardState::initial`] and [`BoardState::successor`];
/// fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    annotations: [CellAnnotation; 9],
    last_move: Option<Position>,
    next_player: Player,
    outcome: Outcome,
}

impl BoardState {
    /// The fixed game-start snapshot: empty board, X to move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            annotations: [CellAnnotation::Unselected; 9],
            last_move: None,
            next_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Computes the snapshot that follows `next_player` marking `pos`.
    ///
    /// Returns `None` if the game is over or the square is taken.
    #[instrument(skip(self), fields(player = %self.next_player))]
    pub fn successor(&self, pos: Position) -> Option<Self> {
        if self.outcome.is_terminal() || !self.board.is_empty(pos) {
            return None;
        }

        let mover = self.next_player;
        let mut board = self.board;
        board.set(pos, Square::Occupied(mover));

        let mut annotations = [CellAnnotation::Unselected; 9];
        let winning_line = detect_win(&board);
        let outcome = match winning_line {
            Some(line) => {
                for index in line.indices() {
                    annotations[index] = CellAnnotation::WinningLine;
                }
                Outcome::won_by(mover)
            }
            None => {
                annotations[pos.to_index()] = CellAnnotation::JustSelected;
                Outcome::evaluate(&board)
            }
        };
        debug!(?outcome, "Computed successor state");

        Some(Self {
            board,
            annotations,
            last_move: Some(pos),
            next_player: mover.opponent(),
            outcome,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the display tags, one per square.
    pub fn annotations(&self) -> &[CellAnnotation; 9] {
        &self.annotations
    }

    /// Returns the display tag for one square.
    pub fn annotation(&self, pos: Position) -> CellAnnotation {
        self.annotations[pos.to_index()]
    }

    /// Position played to reach this state; `None` for the initial state.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Zero-based `(row, col)` of the last move.
    pub fn last_move_location(&self) -> Option<(usize, usize)> {
        self.last_move.map(|pos| (pos.row(), pos.col()))
    }

    /// Player who made the move that produced this state.
    pub fn mover(&self) -> Option<Player> {
        self.last_move.map(|_| self.next_player.opponent())
    }

    /// Player whose turn follows this state.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks if this is the game-start snapshot.
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

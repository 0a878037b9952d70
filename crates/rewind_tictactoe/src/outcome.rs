//! Classification of a board as ongoing or finished.

use super::rules::{check_winner, is_draw};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board state.
///
/// Always derived from the squares via [`Outcome::evaluate`], never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    #[default]
    InProgress,
    /// X completed a line.
    XWon,
    /// O completed a line.
    OWon,
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// Classifies a board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(player) = check_winner(board) {
            Self::won_by(player)
        } else if is_draw(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// The winning outcome for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWon,
            Player::O => Outcome::OWon,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::XWon => Some(Player::X),
            Outcome::OWon => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves may follow.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::XWon => write!(f, "Player X wins"),
            Outcome::OWon => write!(f, "Player O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(Outcome::evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_line_wins_for_its_mark() {
        let mut board = Board::new();
        for pos in [Position::TopCenter, Position::Center, Position::BottomCenter] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let outcome = Outcome::evaluate(&board);
        assert_eq!(outcome, Outcome::OWon);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_full_board_draw_or_last_move_win() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip("XOXXOOOXX".chars()) {
            let player = if mark == 'X' { Player::X } else { Player::O };
            board.set(*pos, Square::Occupied(player));
        }
        assert_eq!(Outcome::evaluate(&board), Outcome::Draw);

        // Flipping the middle-right square completes the right column.
        board.set(Position::MiddleRight, Square::Occupied(Player::X));
        assert_eq!(Outcome::evaluate(&board), Outcome::XWon);
    }

    #[test]
    fn test_only_in_progress_is_open() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
    }
}

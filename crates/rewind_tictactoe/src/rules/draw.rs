//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::detect_win;
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && detect_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip(marks.chars()) {
            match mark {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

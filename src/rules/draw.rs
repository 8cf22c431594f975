//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a draw: full with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::MiddleRight, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        board.set(Position::BottomCenter, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}

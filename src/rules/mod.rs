//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine, the solver, and embedders all derive status
//! from the same place.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_players};

use crate::types::{Board, GameStatus};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// A board snapshot that no legal sequence of moves can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Both players hold a completed line at once.
    #[display("both players hold a completed line")]
    ConflictingWinners,
}

/// Evaluates a board snapshot into a game status.
///
/// Scans the eight win lines in their fixed order. A single winning
/// player yields `Won`; a full board with no winner yields `Draw`;
/// otherwise the game is `InProgress`.
///
/// # Errors
///
/// Returns [`BoardError::ConflictingWinners`] when both players hold a
/// completed line, rather than silently reporting whichever line scans
/// first.
#[instrument]
pub fn evaluate(board: &Board) -> Result<GameStatus, BoardError> {
    let winners = win::winning_players(board);
    match winners.as_slice() {
        [] => {
            if draw::is_full(board) {
                Ok(GameStatus::Draw)
            } else {
                Ok(GameStatus::InProgress)
            }
        }
        [winner] => Ok(GameStatus::Won(*winner)),
        _ => {
            warn!("rejecting board with completed lines for both players");
            Err(BoardError::ConflictingWinners)
        }
    }
}

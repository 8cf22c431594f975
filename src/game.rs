//! Game engine: turn alternation, move validation, status upkeep.

use crate::position::Position;
use crate::rules::{self, BoardError};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tic-tac-toe game engine.
///
/// Owns its board; every mutation goes through [`Game::make_move`], and
/// the status is re-derived from the board after each move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    board: Board,
    /// Player whose turn it is.
    to_move: Player,
    /// Game status, derived from the board.
    status: GameStatus,
    /// Move history (positions played, in order).
    history: Vec<Position>,
}

/// Errors that can occur when making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("game is already over")]
    GameOver,
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The board reached an inconsistent state.
    #[display("{}", _0)]
    Board(BoardError),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Makes a move at the given position for the player to move.
    ///
    /// On success the mark is placed, the status is recomputed from the
    /// board, and the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is decided and
    /// [`MoveError::SquareOccupied`] for a non-empty square.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.status = rules::evaluate(&self.board)?;
        self.to_move = self.to_move.opponent();

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

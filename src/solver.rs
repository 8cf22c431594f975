//! Heuristic move selection for the computer opponent.
//!
//! The selector runs a three-tier cascade over the shared win-line
//! table: complete a line of its own, else deny the opponent's
//! completion, else take the first empty square of the best-weighted
//! open line. The first tier that produces a move wins.

use crate::position::{Line, LINES, Position};
use crate::rules::{self, BoardError};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move chosen by the selector.
///
/// `board` is a fresh snapshot; the board handed to [`select_move`] is
/// never touched. `status` is derived from the new board, not assumed
/// from the tier that produced the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The square the moving player filled.
    pub position: Position,
    /// Board snapshot after the move.
    pub board: Board,
    /// Status of the new board.
    pub status: GameStatus,
}

/// Errors that can occur when selecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board is already won or drawn.
    #[display("game is already over: {:?}", _0)]
    GameOver(GameStatus),
    /// No empty square remains to fill.
    #[display("no empty square remains on the board")]
    BoardExhausted,
    /// The board snapshot is inconsistent.
    #[display("{}", _0)]
    Board(BoardError),
}

impl std::error::Error for SelectError {}

impl From<BoardError> for SelectError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// Chooses a move for `player` on the given board.
///
/// Tiers, in order:
/// 1. **Win now** - a line where `player` holds two squares and the
///    third is empty.
/// 2. **Block** - the same test for the opponent; `player` takes the
///    empty square.
/// 3. **Best weighted line** - each open line scores +1 per square held
///    by `player` and -2 per opponent square; the first maximum in scan
///    order wins, and its first empty square is filled.
///
/// The returned status comes from re-evaluating the new board.
///
/// # Errors
///
/// Fails with [`SelectError::BoardExhausted`] on a full board and
/// [`SelectError::GameOver`] on a decided one; callers are expected to
/// stop asking for moves once the game is over.
#[instrument(skip(board))]
pub fn select_move(board: &Board, player: Player) -> Result<Selection, SelectError> {
    if board.is_full() {
        return Err(SelectError::BoardExhausted);
    }
    match rules::evaluate(board)? {
        GameStatus::InProgress => {}
        decided => return Err(SelectError::GameOver(decided)),
    }

    let lines = open_lines(board);
    let opponent = player.opponent();

    let (line, tier) = if let Some(line) = completable_line(board, &lines, player) {
        (line, "win")
    } else if let Some(line) = completable_line(board, &lines, opponent) {
        (line, "block")
    } else {
        // An in-progress board always has an open line, so the weighted
        // tier cannot come up empty here.
        match best_weighted_line(board, &lines, player) {
            Some(line) => (line, "weighted"),
            None => return Err(SelectError::BoardExhausted),
        }
    };
    let position = match first_empty(board, line) {
        Some(position) => position,
        None => return Err(SelectError::BoardExhausted),
    };
    debug!(?player, %position, tier, "selected move");

    let mut next = board.clone();
    next.set(position, Square::Occupied(player));
    let status = rules::evaluate(&next)?;

    Ok(Selection {
        position,
        board: next,
        status,
    })
}

/// Lines that still contain at least one empty square, in scan order.
fn open_lines(board: &Board) -> Vec<Line> {
    LINES
        .iter()
        .copied()
        .filter(|line| line.iter().any(|pos| board.is_empty(*pos)))
        .collect()
}

/// First open line where `player` holds two squares and the third is
/// empty.
///
/// The count test mirrors the line length: held squares plus a single
/// empty slot must account for all three, which rules out any line the
/// opponent has reached.
fn completable_line(board: &Board, lines: &[Line], player: Player) -> Option<Line> {
    lines.iter().copied().find(|line| {
        let mut held = 0;
        let mut any_empty = false;
        for pos in *line {
            match board.get(pos) {
                Square::Occupied(p) if p == player => held += 1,
                Square::Empty => any_empty = true,
                Square::Occupied(_) => {}
            }
        }
        held + usize::from(any_empty) == line.len()
    })
}

/// Weights a line for `player`: +1 per own square, -2 per opponent
/// square, 0 per empty square.
fn line_weight(board: &Board, line: Line, player: Player) -> i32 {
    line.into_iter()
        .map(|pos| match board.get(pos) {
            Square::Occupied(p) if p == player => 1,
            Square::Occupied(_) => -2,
            Square::Empty => 0,
        })
        .sum()
}

/// The first line with the maximum weight, in scan order.
fn best_weighted_line(board: &Board, lines: &[Line], player: Player) -> Option<Line> {
    let mut best: Option<(i32, Line)> = None;
    for line in lines.iter().copied() {
        let weight = line_weight(board, line, player);
        if best.is_none_or(|(top, _)| weight > top) {
            best = Some((weight, line));
        }
    }
    best.map(|(_, line)| line)
}

/// First empty square of a line, in scan order.
fn first_empty(board: &Board, line: Line) -> Option<Position> {
    line.into_iter().find(|pos| board.is_empty(*pos))
}

//! Tic-tac-toe game logic with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure outcome evaluation over a board snapshot
//! - **Solver**: three-tier heuristic move selection (win, block, best
//!   weighted line)
//! - **Game**: the engine - turn alternation, validation, history
//! - **Session**: what an embedding UI drives - seats, lifecycle, and
//!   the automatic computer reply
//!
//! The whole crate is synchronous and single-threaded; a full turn
//! (human move, status check, optional computer reply) completes within
//! one call.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Position, Session, SessionStatus};
//!
//! let mut session = Session::new();
//! session.start()?;
//!
//! let turn = session.play(Position::Center)?;
//! assert_eq!(turn.status, SessionStatus::Playing);
//! assert!(turn.reply.is_some()); // the computer answered
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod invariants;
mod position;
mod rules;
mod session;
mod solver;
mod types;

// Crate-level exports - Core domain types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Positions and the shared win-line table
pub use position::{Line, LINES, Position};

// Crate-level exports - Outcome evaluation
pub use rules::{BoardError, check_winner, evaluate, is_draw, is_full, winning_players};

// Crate-level exports - Move selection
pub use solver::{SelectError, Selection, select_move};

// Crate-level exports - Game engine
pub use game::{Game, MoveError};

// Crate-level exports - Session management
pub use session::{Opponent, Seat, Session, SessionError, SessionStatus, Turn};

// Crate-level exports - Invariants
pub use invariants::{BalancedMarks, Invariant, SingleWinner};

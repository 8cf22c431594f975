//! Session control flow: seats, lifecycle, and the computer reply.
//!
//! A [`Session`] is what an embedding UI talks to. It owns the engine,
//! assigns marks to the two seats, and - when the computer opponent is
//! enabled - answers each human move with a solver move in the same
//! synchronous step.

use crate::game::{Game, MoveError};
use crate::position::Position;
use crate::solver::{self, SelectError};
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// One of the two seats at the table. Seat one always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// The first seat; moves first in every game.
    One,
    /// The second seat.
    Two,
}

/// Who controls seat two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// A second human drives seat two through [`Session::play`].
    Human,
    /// The heuristic solver answers each move from seat one.
    Computer,
}

/// Session status shown to the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No game has been started yet; settings may still change.
    NotStarted,
    /// A game is in progress.
    Playing,
    /// The game ended in a draw.
    Draw,
    /// Seat one completed a line.
    PlayerOneWins,
    /// Seat two completed a line.
    PlayerTwoWins,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionStatus::NotStarted => "Game not started",
            SessionStatus::Playing => "Currently Playing",
            SessionStatus::Draw => "It's a Draw!",
            SessionStatus::PlayerOneWins => "Hurray- Player One made it!",
            SessionStatus::PlayerTwoWins => "Bummer- Player Two made it!",
        };
        write!(f, "{label}")
    }
}

/// What happened during one call to [`Session::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The caller's move.
    pub moved: Position,
    /// The computer's reply, when the opponent is enabled and the game
    /// was still open after the caller's move.
    pub reply: Option<Position>,
    /// Session status once the whole turn settled.
    pub status: SessionStatus,
}

/// Errors that can occur when driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No game has been started yet.
    #[display("game has not been started")]
    NotStarted,
    /// A game is already running.
    #[display("game has already been started")]
    AlreadyStarted,
    /// Marks and opponent mode are fixed once a game starts.
    #[display("settings can only change before the game starts")]
    SettingsLocked,
    /// The move itself was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// The solver could not produce a reply.
    #[display("{}", _0)]
    Select(SelectError),
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        Self::Select(err)
    }
}

/// A game session with two seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The engine for the current game.
    game: Game,
    /// Marks by seat: `marks[0]` belongs to seat one.
    marks: [Player; 2],
    /// Who controls seat two.
    opponent: Opponent,
    /// Whether a game has been started.
    started: bool,
}

impl Session {
    /// Creates a session with the default settings: seat one plays X,
    /// seat two is the computer, no game started.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            marks: [Player::X, Player::O],
            opponent: Opponent::Computer,
            started: false,
        }
    }

    /// Returns the engine for the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns who controls seat two.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Returns the mark assigned to a seat.
    pub fn mark_of(&self, seat: Seat) -> Player {
        match seat {
            Seat::One => self.marks[0],
            Seat::Two => self.marks[1],
        }
    }

    /// Returns the seat holding a mark.
    pub fn seat_of(&self, mark: Player) -> Seat {
        if self.marks[0] == mark {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// Returns the seat whose turn it is.
    pub fn seat_to_move(&self) -> Seat {
        self.seat_of(self.game.to_move())
    }

    /// Returns the session status.
    pub fn status(&self) -> SessionStatus {
        if !self.started {
            return SessionStatus::NotStarted;
        }
        match self.game.status() {
            GameStatus::InProgress => SessionStatus::Playing,
            GameStatus::Draw => SessionStatus::Draw,
            GameStatus::Won(mark) => match self.seat_of(mark) {
                Seat::One => SessionStatus::PlayerOneWins,
                Seat::Two => SessionStatus::PlayerTwoWins,
            },
        }
    }

    /// Swaps the marks between the seats.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::SettingsLocked`] once a game has
    /// started.
    #[instrument(skip(self))]
    pub fn toggle_player_one_mark(&mut self) -> Result<(), SessionError> {
        if self.started {
            warn!("rejecting mark toggle mid-game");
            return Err(SessionError::SettingsLocked);
        }
        self.marks.swap(0, 1);
        self.game = Game::starting_with(self.marks[0]);
        info!(player_one = %self.marks[0], "swapped seat marks");
        Ok(())
    }

    /// Switches seat two between a human and the computer.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::SettingsLocked`] once a game has
    /// started.
    #[instrument(skip(self))]
    pub fn toggle_computer_opponent(&mut self) -> Result<(), SessionError> {
        if self.started {
            warn!("rejecting opponent toggle mid-game");
            return Err(SessionError::SettingsLocked);
        }
        self.opponent = match self.opponent {
            Opponent::Human => Opponent::Computer,
            Opponent::Computer => Opponent::Human,
        };
        info!(opponent = ?self.opponent, "switched opponent mode");
        Ok(())
    }

    /// Starts the first game of the session.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::AlreadyStarted`] if a game is already
    /// running; use [`Session::restart`] to begin a fresh one.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.started {
            return Err(SessionError::AlreadyStarted);
        }
        self.started = true;
        info!(opponent = ?self.opponent, "session started");
        Ok(())
    }

    /// Begins a fresh game, keeping the current marks and opponent mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game = Game::starting_with(self.marks[0]);
        self.started = true;
        info!("session restarted");
    }

    /// Returns the session to factory defaults.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("session reset");
    }

    /// Plays one full turn: the caller's move, then the computer reply
    /// when seat two is the computer and the game is still open.
    ///
    /// Both moves happen in this single synchronous call, so by the
    /// time it returns the turn is back with the caller (or the game is
    /// over).
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::NotStarted`] before [`Session::start`],
    /// and propagates engine and solver rejections.
    #[instrument(skip(self), fields(seat = ?self.seat_to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<Turn, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }

        self.game.make_move(pos)?;

        let mut reply = None;
        if self.opponent == Opponent::Computer && self.game.status() == GameStatus::InProgress {
            let selection = solver::select_move(self.game.board(), self.game.to_move())?;
            self.game.make_move(selection.position)?;
            reply = Some(selection.position);
        }

        Ok(Turn {
            moved: pos,
            reply,
            status: self.status(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

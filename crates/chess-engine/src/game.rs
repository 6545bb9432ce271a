//! Game session record: a board plus the side to move.
//!
//! Hosts own a [`Game`] per player session and drive it with notation
//! strings or parsed [`Move`]s. The engine functions underneath stay pure.

use crate::apply::{apply_move, MoveError};
use crate::board::Board;
use chess_core::{Color, Move, NotationError};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move string could not be parsed.
    #[error(transparent)]
    Notation(#[from] NotationError),
    /// The move was refused by the rules.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            turn: Color::White,
        }
    }

    /// Creates a game from an arbitrary board and side to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Plays a move for the side to move.
    ///
    /// On success the board is replaced and the turn passes to the other
    /// side. On error nothing changes.
    pub fn make_move(&mut self, m: Move) -> Result<(), MoveError> {
        self.board = apply_move(&self.board, m.from(), m.to(), self.turn)?;
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Parses and plays a move given in four-character notation, e.g. `"e2e4"`.
    pub fn play(&mut self, notation: &str) -> Result<(), GameError> {
        let m = Move::parse(notation)?;
        self.make_move(m)?;
        Ok(())
    }

    /// Resets to the starting position with White to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

//! Move application.

use crate::board::Board;
use crate::rules::is_move_valid;
use chess_core::{Color, Square};
use thiserror::Error;

/// Reasons a move can be refused by [`apply_move`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the starting square is empty")]
    EmptySource,

    #[error("it is {turn}'s turn, but you tried to move a {mover} piece")]
    WrongTurn { turn: Color, mover: Color },

    #[error("illegal move according to chess rules")]
    IllegalMove,
}

/// Moves the piece on `from` to `to` for the side `turn`.
///
/// Returns a new board; `board` itself is left as it was. Every check runs
/// before any square is written, so an error never leaves a half-applied move.
/// A piece already on `to` is captured by being overwritten.
///
/// # Errors
///
/// - [`MoveError::EmptySource`] if `from` holds no piece.
/// - [`MoveError::WrongTurn`] if the piece on `from` belongs to the other side.
/// - [`MoveError::IllegalMove`] if [`is_move_valid`] rejects the move.
pub fn apply_move(board: &Board, from: Square, to: Square, turn: Color) -> Result<Board, MoveError> {
    let mover = board.piece_at(from).ok_or(MoveError::EmptySource)?;

    if mover.color != turn {
        return Err(MoveError::WrongTurn {
            turn,
            mover: mover.color,
        });
    }

    if !is_move_valid(board, from, to) {
        return Err(MoveError::IllegalMove);
    }

    Ok(board.with_piece(to, Some(mover)).with_piece(from, None))
}

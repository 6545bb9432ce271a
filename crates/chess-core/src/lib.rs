//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the engine and its hosts:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates in (row, col) form
//! - [`Move`] and the four-character move notation (`"e2e4"`)
//! - FEN piece-placement parsing and serialization

mod color;
pub mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, Placement};
pub use mov::{Move, NotationError};
pub use piece::{ColoredPiece, Piece};
pub use square::Square;

//! Chess move legality checker.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid of optional colored pieces with value semantics
//! - [`is_move_valid`] - per-piece movement geometry and friendly-fire checks
//! - [`apply_move`] - turn enforcement and move application
//! - [`Game`] - a board plus side to move, as kept by a hosting application
//!
//! Only basic piece movement is modelled. Check, checkmate, castling, en
//! passant, promotion and draws are out of scope; a move that leaves the
//! mover's king attacked is still accepted.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::{apply_move, is_move_valid, Board, Game};
//!
//! let board = Board::initial();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(is_move_valid(&board, e2, e4));
//!
//! let after = apply_move(&board, e2, e4, Color::White).unwrap();
//! assert!(after.is_empty(e2));
//!
//! let mut game = Game::new();
//! game.play("e2e4").unwrap();
//! game.play("e7e5").unwrap();
//! println!("{}", game.board());
//! ```

mod apply;
pub mod board;
mod game;
pub mod rules;

pub use apply::{apply_move, MoveError};
pub use board::{is_friendly, Board};
pub use game::{Game, GameError};
pub use rules::is_move_valid;

//! Move legality rules.
//!
//! [`is_move_valid`] checks a single move against basic piece geometry:
//! the destination must not hold a friendly piece, and the moving piece's own
//! rule must accept the displacement. Check, castling, en passant and
//! promotion are not modelled, so a move that exposes the mover's king is
//! still valid here.

mod pieces;

pub use pieces::{
    bishop_move_valid, king_move_valid, knight_move_valid, pawn_move_valid, queen_move_valid,
    rook_move_valid,
};

use crate::board::{is_friendly, Board};
use chess_core::{Piece, Square};

/// Returns true if the piece on `from` may move to `to`.
///
/// Returns false when `from` is empty. The board is never modified, so the
/// result depends only on the arguments.
///
/// A piece can never "move" onto its own square through this function: the
/// destination then holds the mover itself, which counts as a friendly piece.
pub fn is_move_valid(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };

    if is_friendly(Some(mover), board.piece_at(to)) {
        return false;
    }

    match mover.piece {
        Piece::Pawn => pawn_move_valid(board, from, to),
        Piece::Rook => rook_move_valid(board, from, to),
        Piece::Knight => knight_move_valid(board, from, to),
        Piece::Bishop => bishop_move_valid(board, from, to),
        Piece::Queen => queen_move_valid(board, from, to),
        Piece::King => king_move_valid(board, from, to),
    }
}

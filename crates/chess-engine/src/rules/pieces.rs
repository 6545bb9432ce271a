//! Per-piece movement rules.
//!
//! Each predicate looks only at geometry and, for sliders and pawns, at the
//! occupancy of the squares involved. None of them checks the color of the
//! destination piece; [`is_move_valid`](super::is_move_valid) does that first.

use crate::board::Board;
use chess_core::Square;

/// Signed (row, col) displacement from `from` to `to`.
#[inline]
fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must be distinct and lie on a common rank, file or diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }
    false
}

/// Pawn rule: single push, double push from the home row, or diagonal capture.
///
/// Pawns never move diagonally onto an empty square. There is no en passant
/// and no promotion.
pub fn pawn_move_valid(board: &Board, from: Square, to: Square) -> bool {
    let Some(pawn) = board.piece_at(from) else {
        return false;
    };
    let direction = pawn.color.pawn_direction();
    let (d_row, d_col) = delta(from, to);
    let target_empty = board.is_empty(to);

    let single_push = d_col == 0 && d_row == direction && target_empty;

    let double_push = d_col == 0
        && d_row == 2 * direction
        && from.row() == pawn.color.pawn_home_row()
        && target_empty
        && from
            .offset(direction, 0)
            .is_some_and(|between| board.is_empty(between));

    let capture = d_col.abs() == 1 && d_row == direction && !target_empty;

    single_push || double_push || capture
}

/// Rook rule: a purely horizontal or vertical move with nothing in between.
pub fn rook_move_valid(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    if (d_row == 0) == (d_col == 0) {
        return false;
    }
    path_is_clear(board, from, to)
}

/// Knight rule: an L-shaped jump. Knights ignore obstructions.
pub fn knight_move_valid(_board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

/// Bishop rule: a diagonal move with nothing in between.
pub fn bishop_move_valid(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }
    path_is_clear(board, from, to)
}

/// Queen rule: anything a rook or a bishop could do from the same square.
pub fn queen_move_valid(board: &Board, from: Square, to: Square) -> bool {
    rook_move_valid(board, from, to) || bishop_move_valid(board, from, to)
}

/// King rule: at most one square in any direction.
///
/// Zero displacement is accepted here.
pub fn king_move_valid(_board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

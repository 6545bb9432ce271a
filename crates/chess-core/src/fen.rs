//! FEN piece-placement parsing and serialization.
//!
//! Only the first FEN field is supported: castling rights, en passant and
//! move counters have no meaning for this engine.

use crate::ColoredPiece;
use thiserror::Error;

/// Grid of squares indexed `[row][col]`, row 0 being rank 8.
pub type Placement = [[Option<ColoredPiece>; 8]; 8];

/// Errors that can occur when parsing a piece-placement string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid piece placement: invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: usize },

    #[error("invalid piece placement: rank {rank} has {squares} squares, expected 8")]
    InvalidSquareCount { rank: usize, squares: usize },
}

/// The standard starting placement.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parses a piece-placement field such as `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
///
/// A full FEN string is accepted too; everything after the first space is ignored.
pub fn parse_placement(fen: &str) -> Result<Placement, FenError> {
    let field = fen.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount(ranks.len()));
    }

    let mut grid: Placement = [[None; 8]; 8];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += skip as usize;
            } else if let Some(piece) = ColoredPiece::from_fen_char(c) {
                if col < 8 {
                    grid[row][col] = Some(piece);
                }
                col += 1;
            } else {
                return Err(FenError::InvalidCharacter {
                    character: c,
                    rank: 8 - row,
                });
            }
        }
        if col != 8 {
            return Err(FenError::InvalidSquareCount {
                rank: 8 - row,
                squares: col,
            });
        }
    }

    Ok(grid)
}

/// Serializes a grid back into a piece-placement field.
pub fn placement_to_string(grid: &Placement) -> String {
    let mut out = String::with_capacity(71);
    for (row, squares) in grid.iter().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for square in squares {
            match square {
                Some(piece) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

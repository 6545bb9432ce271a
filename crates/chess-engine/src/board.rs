//! Board model: an 8x8 grid of optional colored pieces.

use chess_core::fen::{self, FenError, Placement};
use chess_core::{Color, ColoredPiece, Piece, Square};
use std::fmt;

/// Back rank order shared by both colors, from file a to file h.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 chess board.
///
/// Boards are plain values: operations that change the board return a new
/// `Board` and leave the receiver untouched. Piece counts are not validated,
/// so a board without kings is perfectly acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Placement,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board in the standard starting arrangement.
    pub fn initial() -> Self {
        let mut squares: Placement = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_home_row() as usize;
            for (col, piece) in BACK_RANK.iter().enumerate() {
                squares[back][col] = Some(ColoredPiece::new(*piece, color));
                squares[pawns][col] = Some(ColoredPiece::new(Piece::Pawn, color));
            }
        }
        Board { squares }
    }

    /// Creates a board from a FEN piece-placement field.
    pub fn from_placement(fen: &str) -> Result<Self, FenError> {
        Ok(Board {
            squares: fen::parse_placement(fen)?,
        })
    }

    /// Returns the FEN piece-placement field for this board.
    pub fn to_placement(&self) -> String {
        fen::placement_to_string(&self.squares)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub const fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Returns true if no piece stands on the given square.
    #[inline]
    pub const fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns a copy of this board with one square replaced.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Option<ColoredPiece>) -> Self {
        self.squares[square.row() as usize][square.col() as usize] = piece;
        self
    }

    /// Returns the rows of the board, row 0 being rank 8.
    pub const fn rows(&self) -> &Placement {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Returns true iff both squares hold pieces of the same color.
pub fn is_friendly(a: Option<ColoredPiece>, b: Option<ColoredPiece>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.is_friendly_with(b))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, " +-----------------+")?;
        for (row, squares) in self.squares.iter().enumerate() {
            let rank = 8 - row;
            write!(f, "{}|", rank)?;
            for square in squares {
                let c = square.map_or(' ', ColoredPiece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f, " |{}", rank)?;
        }
        writeln!(f, " +-----------------+")?;
        write!(f, "  a b c d e f g h")
    }
}

//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by (row, col).
///
/// Rows run top to bottom from White's point of view:
/// - row 0 is rank 8, row 7 is rank 1
/// - col 0 is file a, col 7 is file h
///
/// Both coordinates are always in 0-7; squares off the board cannot be built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column, or `None` if either is outside 0-7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match Self::col_from_file(bytes[0]) {
            Some(c) => c,
            None => return None,
        };
        match bytes[1] {
            b'1'..=b'8' => Some(Square {
                row: b'8' - bytes[1],
                col,
            }),
            _ => None,
        }
    }

    /// Maps a file letter ('a'-'h') to its column.
    #[inline]
    pub const fn col_from_file(file: u8) -> Option<u8> {
        match file {
            b'a'..=b'h' => Some(file - b'a'),
            _ => None,
        }
    }

    /// Returns the row (0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the file letter.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the square shifted by the given deltas, if it stays on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let (Some(row), Some(col)) = (
            (self.row as i8).checked_add(d_row),
            (self.col as i8).checked_add(d_col),
        ) else {
            return None;
        };
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row, self.col, self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

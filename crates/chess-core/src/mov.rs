//! Move representation and four-character move notation.

use crate::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a move string such as `"e2e4"`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("move string must be 4 characters long (e.g., 'e2e4')")]
    InvalidLength,

    #[error("invalid column character, use 'a' through 'h'")]
    InvalidColumn,

    #[error("invalid row character, use '1' through '8'")]
    InvalidRank,

    #[error("row is out of bounds, use '1' through '8'")]
    RowOutOfBounds,
}

/// A move from one square to another.
///
/// Carries no flags: castling, en passant and promotion are not modelled.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parses `<file><rank><file><rank>` notation, e.g. `"e2e4"`.
    ///
    /// Checks run in a fixed order: length, then both files, then both rank
    /// characters, then the resulting rows.
    pub fn parse(s: &str) -> Result<Self, NotationError> {
        let chars: Vec<char> = s.chars().collect();
        let &[from_file, from_rank, to_file, to_rank] = chars.as_slice() else {
            return Err(NotationError::InvalidLength);
        };

        let from_col = file_to_col(from_file).ok_or(NotationError::InvalidColumn)?;
        let to_col = file_to_col(to_file).ok_or(NotationError::InvalidColumn)?;

        let (Some(from_digit), Some(to_digit)) = (rank_digit(from_rank), rank_digit(to_rank))
        else {
            return Err(NotationError::InvalidRank);
        };

        let from = row_for_digit(from_digit).and_then(|row| Square::new(row, from_col));
        let to = row_for_digit(to_digit).and_then(|row| Square::new(row, to_col));
        match (from, to) {
            (Some(from), Some(to)) => Ok(Move { from, to }),
            _ => Err(NotationError::RowOutOfBounds),
        }
    }

    /// Returns the move in four-character notation.
    pub fn to_notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

fn file_to_col(c: char) -> Option<u8> {
    if c.is_ascii() {
        Square::col_from_file(c as u8)
    } else {
        None
    }
}

fn rank_digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

// Rank digit `d` lives on row `8 - d`; digits 0 and 9 fall off the board.
fn row_for_digit(digit: u8) -> Option<u8> {
    match digit {
        1..=8 => Some(8 - digit),
        _ => None,
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn squares(m: Move) -> ((u8, u8), (u8, u8)) {
        (
            (m.from().row(), m.from().col()),
            (m.to().row(), m.to().col()),
        )
    }

    #[test]
    fn parse_valid_moves() {
        assert_eq!(squares(Move::parse("e2e4").unwrap()), ((6, 4), (4, 4)));
        assert_eq!(squares(Move::parse("a1h8").unwrap()), ((7, 0), (0, 7)));
        assert_eq!(squares(Move::parse("g8f6").unwrap()), ((0, 6), (2, 5)));
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(Move::parse("e2e"), Err(NotationError::InvalidLength));
        assert_eq!(Move::parse("e2e4e"), Err(NotationError::InvalidLength));
        assert_eq!(Move::parse(""), Err(NotationError::InvalidLength));
    }

    #[test]
    fn parse_invalid_column() {
        assert_eq!(Move::parse("j2e4"), Err(NotationError::InvalidColumn));
        assert_eq!(Move::parse("a1j8"), Err(NotationError::InvalidColumn));
        assert_eq!(Move::parse("E2E4"), Err(NotationError::InvalidColumn));
    }

    #[test]
    fn parse_invalid_rank() {
        assert_eq!(Move::parse("eaea"), Err(NotationError::InvalidRank));
        assert_eq!(Move::parse("e2e-"), Err(NotationError::InvalidRank));
    }

    #[test]
    fn parse_row_out_of_bounds() {
        assert_eq!(Move::parse("e9e4"), Err(NotationError::RowOutOfBounds));
        assert_eq!(Move::parse("e0e4"), Err(NotationError::RowOutOfBounds));
        assert_eq!(Move::parse("a1h9"), Err(NotationError::RowOutOfBounds));
    }

    #[test]
    fn column_is_checked_before_rank() {
        // Both the file and the rank are bad; the file error wins.
        assert_eq!(Move::parse("z9e4"), Err(NotationError::InvalidColumn));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(Move::parse("é2e4"), Err(NotationError::InvalidColumn));
    }

    #[test]
    fn from_str_and_display() {
        let m: Move = "g1f3".parse().unwrap();
        assert_eq!(m.to_string(), "g1f3");
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
    }

    #[test]
    fn error_messages() {
        assert!(NotationError::InvalidLength.to_string().contains("4 characters"));
        assert!(NotationError::InvalidColumn.to_string().contains("'a' through 'h'"));
        assert!(NotationError::InvalidRank.to_string().contains("row character"));
        assert!(NotationError::RowOutOfBounds.to_string().contains("out of bounds"));
    }

    proptest! {
        #[test]
        fn well_formed_notation_parses_and_formats_back(s in "[a-h][1-8][a-h][1-8]") {
            let m = Move::parse(&s).unwrap();
            prop_assert!(m.from().row() < 8 && m.to().col() < 8);
            prop_assert_eq!(m.to_notation(), s);
        }

        #[test]
        fn arbitrary_input_never_panics(s in "\\PC{0,6}") {
            let _ = Move::parse(&s);
        }
    }
}

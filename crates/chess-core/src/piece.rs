//! Chess piece representation.

use crate::Color;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Returns the lowercase letter used for this piece in FEN and board printouts.
    pub const fn letter(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece together with the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub piece: Piece,
    pub color: Color,
}

impl ColoredPiece {
    /// Creates a colored piece.
    #[inline]
    pub const fn new(piece: Piece, color: Color) -> Self {
        ColoredPiece { piece, color }
    }

    /// Returns true if both pieces belong to the same side.
    #[inline]
    pub fn is_friendly_with(self, other: ColoredPiece) -> bool {
        self.color == other.color
    }

    /// Returns the FEN character: uppercase for White, lowercase for Black.
    pub const fn to_fen_char(self) -> char {
        let c = self.piece.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a colored piece.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some(ColoredPiece { piece, color })
    }

    /// Returns the Unicode chess glyph for this piece.
    ///
    /// White uses the outlined glyphs (U+2654..U+2659), Black the filled ones
    /// (U+265A..U+265F).
    pub const fn glyph(self) -> char {
        match (self.color, self.piece) {
            (Color::White, Piece::King) => '\u{2654}',
            (Color::White, Piece::Queen) => '\u{2655}',
            (Color::White, Piece::Rook) => '\u{2656}',
            (Color::White, Piece::Bishop) => '\u{2657}',
            (Color::White, Piece::Knight) => '\u{2658}',
            (Color::White, Piece::Pawn) => '\u{2659}',
            (Color::Black, Piece::King) => '\u{265A}',
            (Color::Black, Piece::Queen) => '\u{265B}',
            (Color::Black, Piece::Rook) => '\u{265C}',
            (Color::Black, Piece::Bishop) => '\u{265D}',
            (Color::Black, Piece::Knight) => '\u{265E}',
            (Color::Black, Piece::Pawn) => '\u{265F}',
        }
    }
}

impl std::fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_fen() {
        assert_eq!(ColoredPiece::new(Piece::Pawn, Color::White).to_fen_char(), 'P');
        assert_eq!(ColoredPiece::new(Piece::Pawn, Color::Black).to_fen_char(), 'p');
        assert_eq!(ColoredPiece::new(Piece::King, Color::White).to_fen_char(), 'K');
        assert_eq!(ColoredPiece::new(Piece::Knight, Color::Black).to_fen_char(), 'n');
    }

    #[test]
    fn piece_from_fen() {
        assert_eq!(
            ColoredPiece::from_fen_char('P'),
            Some(ColoredPiece::new(Piece::Pawn, Color::White))
        );
        assert_eq!(
            ColoredPiece::from_fen_char('q'),
            Some(ColoredPiece::new(Piece::Queen, Color::Black))
        );
        assert_eq!(ColoredPiece::from_fen_char('x'), None);
        assert_eq!(ColoredPiece::from_fen_char(' '), None);
    }

    #[test]
    fn friendliness_is_by_color() {
        let white_rook = ColoredPiece::new(Piece::Rook, Color::White);
        let white_pawn = ColoredPiece::new(Piece::Pawn, Color::White);
        let black_pawn = ColoredPiece::new(Piece::Pawn, Color::Black);

        assert!(white_rook.is_friendly_with(white_pawn));
        assert!(!white_pawn.is_friendly_with(black_pawn));
    }

    #[test]
    fn glyph_table() {
        let expected = [
            ('K', '♔'),
            ('Q', '♕'),
            ('R', '♖'),
            ('B', '♗'),
            ('N', '♘'),
            ('P', '♙'),
            ('k', '♚'),
            ('q', '♛'),
            ('r', '♜'),
            ('b', '♝'),
            ('n', '♞'),
            ('p', '♟'),
        ];
        for (fen, glyph) in expected {
            let piece = ColoredPiece::from_fen_char(fen).unwrap();
            assert_eq!(piece.glyph(), glyph, "glyph for {}", fen);
        }
    }

    #[test]
    fn every_piece_has_a_letter() {
        let letters: String = Piece::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, "pnbrqk");
    }
}

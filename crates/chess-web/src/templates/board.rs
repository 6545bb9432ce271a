//! HTML table rendering of a board.

use askama::Template;
use chess_core::ColoredPiece;
use chess_engine::Board;

/// One square of the rendered board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// CSS class: `"white"` for light squares, `"black"` for dark ones.
    pub shade: &'static str,
    /// Unicode glyph of the piece, or a space for an empty square.
    pub glyph: char,
}

/// 8x8 `<table>` of piece glyphs, row 0 (rank 8) first.
#[derive(Template)]
#[template(path = "components/board.html")]
pub struct BoardTemplate {
    pub rows: Vec<Vec<CellView>>,
}

impl BoardTemplate {
    /// Builds the table view of a board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_engine::Board;
    /// use chess_web::templates::BoardTemplate;
    ///
    /// let table = BoardTemplate::from_board(&Board::initial());
    /// assert_eq!(table.rows.len(), 8);
    /// assert_eq!(table.rows[7][4].glyph, '\u{2654}');
    /// ```
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let rows = board
            .rows()
            .iter()
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, square)| CellView {
                        shade: if (row + col) % 2 == 0 { "white" } else { "black" },
                        glyph: square.map_or(' ', ColoredPiece::glyph),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

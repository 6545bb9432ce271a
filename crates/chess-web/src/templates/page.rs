//! The game page.

use askama::Template;

/// Full page: board table, side to move, and the pending error message.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Pre-rendered [`BoardTemplate`](super::BoardTemplate) markup.
    pub board_table: String,
    /// Side to move, lowercase.
    pub turn: &'static str,
    pub error: Option<String>,
}

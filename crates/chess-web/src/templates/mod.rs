//! HTML templates for the game page.
//!
//! This module contains Askama templates for the board table and the page
//! that embeds it.

pub mod board;
pub mod page;

pub use board::{BoardTemplate, CellView};
pub use page::IndexTemplate;

//! HTTP handlers.

pub mod game;
pub mod state;

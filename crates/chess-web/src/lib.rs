//! Browser front end for the chess move checker.
//!
//! An Axum server that keeps one [`Game`](chess_engine::Game) per browser
//! session and serves:
//! - `GET /` - the board as an HTML table, the side to move and the last error
//! - `POST /move` - play a move from the `from_square`/`to_square` form
//! - `POST /new` - start over
//! - `GET /api/state` - the same state as JSON
//! - `GET /health` - liveness check

pub mod api;
pub mod config;
pub mod middleware;
pub mod session;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;

use config::ServerConfig;
use middleware::{timing_layer, SlowRequestThreshold};
use session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Game sessions keyed by cookie id.
    pub sessions: SessionStore,
    /// Name of the session cookie.
    pub cookie_name: Arc<str>,
}

impl AppState {
    /// Creates empty state using the configured cookie name and session TTL.
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            sessions: SessionStore::new(Duration::from_secs(config.session_ttl_secs)),
            cookie_name: Arc::from(config.session_cookie.as_str()),
        }
    }
}

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Builds the application router.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(api::game::index))
        .route("/move", post(api::game::make_move))
        .route("/new", post(api::game::new_game))
        .route("/api/state", get(api::state::get_state))
        .route("/health", get(health))
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            SlowRequestThreshold::from_millis(config.slow_request_ms),
            timing_layer,
        ))
}

//! JSON view of a session's game.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::session::{cookie_value, Session};
use crate::AppState;

/// Current game state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StateResponse {
    /// FEN piece-placement field of the board.
    pub placement: String,
    /// Side to move, `"white"` or `"black"`.
    pub turn: &'static str,
    /// Pending error message, if the last move was rejected.
    pub error: Option<String>,
}

/// Get the session's game state.
///
/// # Endpoint
///
/// `GET /api/state`
///
/// # Response
///
/// - `200 OK`: JSON [`StateResponse`]; the pending error is left in place.
///   Without a known session cookie this is a fresh game and no session is
///   created.
/// - `500 Internal Server Error`: session store failure
pub async fn get_state(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, StatusCode> {
    let id = cookie_value(&headers, &state.cookie_name);
    let body = state
        .sessions
        .read_session(id.as_deref(), StateResponse::from_session)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .unwrap_or_else(|| StateResponse::from_session(&Session::default()));

    Ok(Json(body).into_response())
}

impl StateResponse {
    fn from_session(session: &Session) -> Self {
        StateResponse {
            placement: session.game.board().to_placement(),
            turn: session.game.turn().as_str(),
            error: session.error.clone(),
        }
    }
}

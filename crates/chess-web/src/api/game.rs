//! Page and form handlers for playing a game.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use askama::Template;
use serde::Deserialize;

use crate::session::{cookie_value, session_cookie, Session, SessionAccess};
use crate::templates::{BoardTemplate, IndexTemplate};
use crate::AppState;

/// Message stored when the move form is submitted with a blank field.
pub const MISSING_FIELDS: &str = "Both 'From' and 'To' fields are required.";

/// Form body posted to `/move`.
#[derive(Debug, Default, Deserialize)]
pub struct MoveForm {
    #[serde(default)]
    pub from_square: String,
    #[serde(default)]
    pub to_square: String,
}

/// Render the game page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// - `200 OK`: HTML page with the board, the side to move and the pending
///   error message, which is cleared once shown
/// - `500 Internal Server Error`: session store or template failure
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, StatusCode> {
    let id = cookie_value(&headers, &state.cookie_name);
    let access = state
        .sessions
        .with_session(id.as_deref(), |session| {
            (*session.game.board(), session.game.turn(), session.error.take())
        })
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let SessionAccess {
        id,
        created,
        value: (board, turn, error),
    } = access;

    let board_table = BoardTemplate::from_board(&board)
        .render()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let page = IndexTemplate {
        board_table,
        turn: turn.as_str(),
        error,
    };
    let html = page.render().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(with_cookie(Html(html).into_response(), &state, created, &id))
}

/// Play a move submitted from the page form.
///
/// # Endpoint
///
/// `POST /move` with form fields `from_square` and `to_square`
///
/// # Response
///
/// - `303 See Other` to `/`; a rejected move leaves its message in the session
/// - `500 Internal Server Error`: session store failure
pub async fn make_move(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<MoveForm>,
) -> Result<Response, StatusCode> {
    let from = form.from_square.trim().to_lowercase();
    let to = form.to_square.trim().to_lowercase();
    let id = cookie_value(&headers, &state.cookie_name);

    let access = state
        .sessions
        .with_session(id.as_deref(), |session| play(session, &from, &to))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(with_cookie(
        Redirect::to("/").into_response(),
        &state,
        access.created,
        &access.id,
    ))
}

fn play(session: &mut Session, from: &str, to: &str) {
    if from.is_empty() || to.is_empty() {
        session.error = Some(MISSING_FIELDS.to_string());
        return;
    }

    let notation = format!("{}{}", from, to);
    match session.game.play(&notation) {
        Ok(()) => {
            tracing::debug!(mv = %notation, next = %session.game.turn(), "Move accepted");
            session.error = None;
        }
        Err(e) => {
            tracing::warn!(mv = %notation, error = %e, "Move rejected");
            session.error = Some(e.to_string());
        }
    }
}

/// Start the session's game over.
///
/// # Endpoint
///
/// `POST /new`
///
/// # Response
///
/// - `303 See Other` to `/`
/// - `500 Internal Server Error`: session store failure
pub async fn new_game(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, StatusCode> {
    let id = cookie_value(&headers, &state.cookie_name);
    let access = state
        .sessions
        .with_session(id.as_deref(), |session| {
            session.game.reset();
            session.error = None;
        })
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(with_cookie(
        Redirect::to("/").into_response(),
        &state,
        access.created,
        &access.id,
    ))
}

/// Attach the session cookie when the request started a new session.
fn with_cookie(mut response: Response, state: &AppState, created: bool, id: &str) -> Response {
    if created {
        if let Ok(value) = HeaderValue::from_str(&session_cookie(&state.cookie_name, id)) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

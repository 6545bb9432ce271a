//! End-to-end HTTP tests against the router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chess_web::api::game::MISSING_FIELDS;
use chess_web::config::ServerConfig;
use chess_web::{app, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn router() -> Router {
    let config = ServerConfig::default();
    app(AppState::new(&config), &config)
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn cookie_from(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("new session sets a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, cookie: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn state(app: &Router, cookie: &str) -> Value {
    let response = get(app, "/api/state", Some(cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = get(&router(), "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn first_visit_starts_a_session() {
    let app = router();
    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = cookie_from(&response);
    assert!(cookie.starts_with("chess_session="));

    let html = body_string(response).await;
    assert!(html.contains("<table class=\"board\">"));
    assert!(html.contains("Turn: white"));
    assert!(html.contains('\u{2654}'));

    // The same cookie keeps the same session and no new cookie is issued.
    let again = get(&app, "/", Some(&cookie)).await;
    assert!(again.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn playing_moves_updates_state() {
    let app = router();
    let cookie = cookie_from(&get(&app, "/", None).await);

    let response = post_form(&app, "/move", &cookie, "from_square=E2&to_square=+e4+").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let json = state(&app, &cookie).await;
    assert_eq!(json["turn"], "black");
    assert_eq!(json["placement"], "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
    assert!(json["error"].is_null());

    let html = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(html.contains("Turn: black"));
}

#[tokio::test]
async fn rejected_move_is_reported_once() {
    let app = router();
    let cookie = cookie_from(&get(&app, "/", None).await);

    post_form(&app, "/move", &cookie, "from_square=e7&to_square=e5").await;

    let json = state(&app, &cookie).await;
    assert_eq!(json["turn"], "white");
    assert_eq!(
        json["error"],
        "it is White's turn, but you tried to move a Black piece"
    );

    let html = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(html.contains("class=\"error\""));

    // Shown once: the next page view has no error.
    let html = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(!html.contains("class=\"error\""));
}

#[tokio::test]
async fn blank_field_is_an_error() {
    let app = router();
    let cookie = cookie_from(&get(&app, "/", None).await);

    post_form(&app, "/move", &cookie, "from_square=e2").await;

    let json = state(&app, &cookie).await;
    assert_eq!(json["error"], MISSING_FIELDS);
}

#[tokio::test]
async fn new_game_resets_the_board() {
    let app = router();
    let cookie = cookie_from(&get(&app, "/", None).await);

    post_form(&app, "/move", &cookie, "from_square=g1&to_square=f3").await;
    let response = post_form(&app, "/new", &cookie, "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = state(&app, &cookie).await;
    assert_eq!(json["turn"], "white");
    assert_eq!(json["placement"], "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
}

#[tokio::test]
async fn sessions_do_not_share_games() {
    let app = router();
    let alice = cookie_from(&get(&app, "/", None).await);
    let bob = cookie_from(&get(&app, "/", None).await);
    assert_ne!(alice, bob);

    post_form(&app, "/move", &alice, "from_square=d2&to_square=d4").await;

    assert_eq!(state(&app, &alice).await["turn"], "black");
    assert_eq!(state(&app, &bob).await["turn"], "white");
}

#[tokio::test]
async fn state_without_cookie_creates_no_session() {
    let config = ServerConfig::default();
    let state = AppState::new(&config);
    let sessions = state.sessions.clone();
    let app = app(state, &config);

    for _ in 0..20 {
        let response = get(&app, "/api/state", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["turn"], "white");
        assert_eq!(json["error"], Value::Null);
    }
    let response = get(&app, "/api/state", Some("chess_session=unknown")).await;
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    assert!(sessions.is_empty());
}

//! Per-browser game sessions.
//!
//! Each browser gets its own [`Game`], keyed by a random id stored in a
//! cookie. All access goes through one mutex, so moves on a session are
//! applied one at a time. Sessions idle for longer than the store's TTL are
//! dropped whenever a new session is created.

use axum::http::{header, HeaderMap};
use chess_engine::Game;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

/// Errors from the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A handler panicked while holding the store lock.
    #[error("session store lock poisoned")]
    Poisoned,
}

/// State kept for one browser.
#[derive(Debug, Clone)]
pub struct Session {
    pub game: Game,
    /// Message from the last rejected move, shown once on the next page view.
    pub error: Option<String>,
    /// When the session was last used.
    pub last_seen: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            game: Game::new(),
            error: None,
            last_seen: Instant::now(),
        }
    }
}

/// Result of running a closure against a session.
#[derive(Debug)]
pub struct SessionAccess<R> {
    /// Id of the session that was used.
    pub id: String,
    /// True if the session did not exist and was created for this request.
    pub created: bool,
    pub value: R,
}

/// Shared map from session id to [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(3600))
    }
}

impl SessionStore {
    /// Creates an empty store whose sessions expire after `ttl` without use.
    pub fn new(ttl: Duration) -> Self {
        SessionStore {
            inner: Arc::default(),
            ttl,
        }
    }

    /// Runs `f` on the session with the given id, creating a fresh session
    /// when the id is missing or unknown.
    pub fn with_session<R>(
        &self,
        id: Option<&str>,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<SessionAccess<R>, SessionError> {
        let mut sessions = self.inner.lock().map_err(|_| SessionError::Poisoned)?;
        let now = Instant::now();

        let (id, created) = match id {
            Some(id) if sessions.contains_key(id) => (id.to_string(), false),
            _ => {
                let before = sessions.len();
                sessions.retain(|_, s| now.duration_since(s.last_seen) < self.ttl);
                if sessions.len() < before {
                    tracing::debug!(evicted = before - sessions.len(), "Dropped idle sessions");
                }
                let id = Uuid::new_v4().to_string();
                tracing::info!(session = %id, "New game session");
                (id, true)
            }
        };

        let session = sessions.entry(id.clone()).or_default();
        session.last_seen = now;
        let value = f(session);
        Ok(SessionAccess { id, created, value })
    }

    /// Runs `f` on an existing session without creating one.
    ///
    /// Returns `Ok(None)` when the id is missing or unknown.
    pub fn read_session<R>(
        &self,
        id: Option<&str>,
        f: impl FnOnce(&Session) -> R,
    ) -> Result<Option<R>, SessionError> {
        let sessions = self.inner.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(id.and_then(|id| sessions.get(id)).map(f))
    }

    /// Returns the number of live sessions.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns true if no session has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extracts the value of the named cookie from the request headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Builds the `Set-Cookie` value for a session id.
pub fn session_cookie(name: &str, id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, id)
}

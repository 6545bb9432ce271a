//! Request timing middleware.
//!
//! Logs the duration of each HTTP request. Requests slower than the configured
//! threshold are logged as warnings, the rest at debug level.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};

/// Duration above which a request counts as slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowRequestThreshold(pub Duration);

impl SlowRequestThreshold {
    /// Creates a threshold from milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

/// Middleware that logs request timing.
///
/// Install with `axum::middleware::from_fn_with_state(threshold, timing_layer)`.
pub async fn timing_layer(
    State(threshold): State<SlowRequestThreshold>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    if elapsed > threshold.0 {
        tracing::warn!(
            method = %method,
            path = %path,
            status,
            duration_ms = elapsed.as_millis(),
            "Slow request"
        );
    } else {
        tracing::debug!(
            method = %method,
            path = %path,
            status,
            duration_ms = elapsed.as_millis(),
            "Request completed"
        );
    }

    response
}

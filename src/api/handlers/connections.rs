//! `GET /connections` — number of registered event streams.

use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONNECTION, CONTENT_LENGTH, CONTENT_TYPE,
};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

/// Returns the registry count as a decimal `text/plain` body and closes
/// the connection. The count may lag a concurrent handshake or prune.
#[must_use]
pub fn connection_count(state: &AppState) -> Response {
    let body = state.registry.count().to_string();
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/plain"),
            (CONNECTION, "close"),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (CACHE_CONTROL, "no-cache"),
        ],
        [(CONTENT_LENGTH, body.len().to_string())],
        body,
    )
        .into_response()
}

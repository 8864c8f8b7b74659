//! `OPTIONS /connections`, `OPTIONS /sse` — CORS preflight.

use axum::http::StatusCode;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONNECTION};
use axum::response::{IntoResponse, Response};

/// Always `204 No Content`; never touches the registry.
#[must_use]
pub fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [(CONNECTION, "close"), (ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
    )
        .into_response()
}

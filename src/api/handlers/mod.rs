//! Handlers for the fixed relay routes.

pub mod broadcast;
pub mod connections;
pub mod preflight;

use axum::http::StatusCode;
use axum::http::header::CONNECTION;
use axum::response::{IntoResponse, Response};

/// Response for any (method, path) outside the route table.
#[must_use]
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, [(CONNECTION, "close")]).into_response()
}

//! `POST /broadcast` — relay the request body to every open stream.

use axum::body::{self, Body, HttpBody};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONNECTION};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;
use crate::error::RelayError;

/// Reads the whole body, broadcasts it verbatim, then answers `200`.
///
/// The broadcast pass completes before the response is produced.
///
/// # Errors
///
/// Returns [`RelayError::PayloadTooLarge`] when the body is larger than
/// the configured limit, or [`RelayError::BodyRead`] when the body cannot
/// be read. Nothing is broadcast in either case.
pub async fn broadcast(state: &AppState, body: Body) -> Result<Response, RelayError> {
    let limit = state.max_broadcast_bytes;
    if let Some(size) = body.size_hint().exact()
        && size > limit as u64
    {
        return Err(RelayError::PayloadTooLarge { size, limit });
    }

    let message = body::to_bytes(body, limit).await?;
    let report = state.broadcaster.broadcast(message);
    tracing::info!(
        delivered = report.delivered,
        pruned = report.pruned,
        clients = state.registry.count(),
        "message broadcast"
    );

    Ok((
        StatusCode::OK,
        [(CONNECTION, "close"), (CACHE_CONTROL, "no-cache")],
    )
        .into_response())
}

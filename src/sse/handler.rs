//! `GET /sse` — event-stream handshake.

use std::sync::Arc;

use axum::body::Body;
use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONNECTION, CONTENT_TYPE,
};
use axum::response::{IntoResponse, Response};

use super::event_stream::EventStream;
use crate::app_state::AppState;
use crate::domain::ClientHandle;

/// Answers with the stream headers and an [`EventStream`] body.
///
/// The new client is registered once the transport starts writing the
/// body; until then `GET /connections` does not count it.
#[must_use]
pub fn open_stream(state: &AppState) -> Response {
    let (handle, outbound) = ClientHandle::channel();
    let handle = Arc::new(handle);
    tracing::debug!(client_id = %handle.id(), "event stream requested");

    let stream = EventStream::new(handle, outbound, Arc::clone(&state.registry));
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/event-stream"),
            (CONNECTION, "keep-alive"),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
        .into_response()
}

//! Request dispatcher: route-table lookup and handler invocation.
//!
//! Every request reaches [`dispatch`] through the router's fallback. The
//! method and path are looked up in the shared [`super::routes::RouteTable`]
//! and the request is handed to the matching handler; unmatched requests
//! get a bare `404`.

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};

use super::handlers;
use super::routes::Route;
use crate::app_state::AppState;
use crate::sse;

/// Dispatches one request by exact (method, path).
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let Some(route) = state
        .routes
        .lookup(request.method(), request.uri().path())
    else {
        tracing::debug!(
            method = %request.method(),
            path = request.uri().path(),
            "no route matched"
        );
        return handlers::not_found();
    };

    match route {
        Route::ConnectionCount => handlers::connections::connection_count(&state),
        Route::EventStream => sse::handler::open_stream(&state),
        Route::Preflight => handlers::preflight::preflight(),
        Route::Broadcast => handlers::broadcast::broadcast(&state, request.into_body())
            .await
            .unwrap_or_else(IntoResponse::into_response),
    }
}

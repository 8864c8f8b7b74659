//! HTTP layer: route table, dispatcher, and handlers.
//!
//! The router has no path routes of its own. Every request falls through
//! to [`dispatch::dispatch`], which resolves it against the
//! [`routes::RouteTable`] held in [`AppState`].

pub mod dispatch;
pub mod handlers;
pub mod routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the dispatcher router, still expecting its state.
pub fn build_router() -> Router<AppState> {
    Router::new().fallback(dispatch::dispatch)
}

/// Builds the complete service: dispatcher, request tracing, state.
pub fn app(state: AppState) -> Router {
    build_router()
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

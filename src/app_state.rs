//! Shared application state injected into the request dispatcher.

use std::sync::Arc;

use crate::api::routes::RouteTable;
use crate::domain::{Broadcaster, ConnectionRegistry};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry of open event streams.
    pub registry: Arc<ConnectionRegistry>,
    /// Fan-out over `registry`.
    pub broadcaster: Broadcaster,
    /// Immutable (method, path) table consulted for every request.
    pub routes: Arc<RouteTable>,
    /// Largest accepted `POST /broadcast` body.
    pub max_broadcast_bytes: usize,
}

impl AppState {
    /// Builds the state around a fresh registry and the standard routes.
    #[must_use]
    pub fn new(max_broadcast_bytes: usize) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        Self {
            broadcaster: Broadcaster::new(Arc::clone(&registry)),
            registry,
            routes: Arc::new(RouteTable::standard()),
            max_broadcast_bytes,
        }
    }
}

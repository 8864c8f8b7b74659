//! Static (method, path) routing table.
//!
//! [`RouteTable`] maps an exact [`RouteKey`] to a [`Route`] variant. It is
//! built once at startup and only read afterwards, so it is shared as a
//! plain `Arc<RouteTable>` with no locking.

use std::collections::HashMap;

use axum::http::Method;

/// Exact-match routing key: HTTP method plus request path.
///
/// Both parts compare byte-for-byte; `get` and `GET` are different
/// methods, `/sse/` and `/sse` different paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    /// Request method.
    pub method: Method,
    /// Request path, without query string.
    pub path: String,
}

impl RouteKey {
    /// Creates a key from a method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// The handler a request is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /connections`: current registry count as text.
    ConnectionCount,
    /// `GET /sse`: open and register an event stream.
    EventStream,
    /// `OPTIONS /connections`, `OPTIONS /sse`: canned CORS preflight.
    Preflight,
    /// `POST /broadcast`: relay the request body to every stream.
    Broadcast,
}

/// Immutable mapping from [`RouteKey`] to [`Route`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<RouteKey, Route>,
}

impl RouteTable {
    /// Builds a table from `(key, route)` pairs. Later duplicates win.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (RouteKey, Route)>) -> Self {
        Self {
            routes: entries.into_iter().collect(),
        }
    }

    /// The five routes the relay serves.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries([
            (RouteKey::new(Method::GET, "/connections"), Route::ConnectionCount),
            (RouteKey::new(Method::GET, "/sse"), Route::EventStream),
            (RouteKey::new(Method::OPTIONS, "/connections"), Route::Preflight),
            (RouteKey::new(Method::OPTIONS, "/sse"), Route::Preflight),
            (RouteKey::new(Method::POST, "/broadcast"), Route::Broadcast),
        ])
    }

    /// Looks up the route for an exact method and path.
    #[must_use]
    pub fn lookup(&self, method: &Method, path: &str) -> Option<Route> {
        self.routes
            .get(&RouteKey::new(method.clone(), path))
            .copied()
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_five_routes() {
        assert_eq!(RouteTable::standard().len(), 5);
    }

    #[test]
    fn standard_lookups() {
        let table = RouteTable::standard();
        assert_eq!(
            table.lookup(&Method::GET, "/connections"),
            Some(Route::ConnectionCount)
        );
        assert_eq!(table.lookup(&Method::GET, "/sse"), Some(Route::EventStream));
        assert_eq!(
            table.lookup(&Method::OPTIONS, "/connections"),
            Some(Route::Preflight)
        );
        assert_eq!(table.lookup(&Method::OPTIONS, "/sse"), Some(Route::Preflight));
        assert_eq!(
            table.lookup(&Method::POST, "/broadcast"),
            Some(Route::Broadcast)
        );
    }

    #[test]
    fn lookup_is_exact() {
        let table = RouteTable::standard();
        assert_eq!(table.lookup(&Method::POST, "/sse"), None);
        assert_eq!(table.lookup(&Method::GET, "/broadcast"), None);
        assert_eq!(table.lookup(&Method::GET, "/sse/"), None);
        assert_eq!(table.lookup(&Method::GET, "/SSE"), None);
        let Ok(lowercase) = Method::from_bytes(b"get") else {
            unreachable!("extension methods are valid tokens");
        };
        assert_eq!(table.lookup(&lowercase, "/sse"), None);
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = RouteTable::default();
        assert!(table.is_empty());
        assert_eq!(table.lookup(&Method::GET, "/sse"), None);
    }

    #[test]
    fn later_entries_override_earlier() {
        let table = RouteTable::from_entries([
            (RouteKey::new(Method::GET, "/x"), Route::Preflight),
            (RouteKey::new(Method::GET, "/x"), Route::ConnectionCount),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup(&Method::GET, "/x"),
            Some(Route::ConnectionCount)
        );
    }
}

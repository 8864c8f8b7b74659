//! Fan-out of published messages to every open stream.
//!
//! [`Broadcaster`] runs one [`ConnectionRegistry::for_each_live`] pass per
//! message. Messages are relayed exactly as received: no `data:` prefix,
//! no trailing blank line. Framing is up to the publisher.

use std::sync::Arc;

use axum::body::Bytes;

use super::ConnectionRegistry;
use super::connection_registry::PassReport;

/// Publishes raw messages to all live clients of a [`ConnectionRegistry`].
///
/// Each send only enqueues onto the client's own outbound queue, so a
/// stalled connection cannot hold up the rest of the pass. Overlapping
/// broadcasts are not serialized against each other.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    registry: Arc<ConnectionRegistry>,
}

impl Broadcaster {
    /// Creates a broadcaster over the given registry.
    #[must_use]
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Sends `message` unframed to every live client.
    ///
    /// Clients found dead are pruned first; clients whose send fails in
    /// this pass are pruned by the next one.
    pub fn broadcast(&self, message: Bytes) -> PassReport {
        let bytes = message.len();
        let report = self
            .registry
            .for_each_live(|client| client.send(message.clone()));
        tracing::debug!(
            bytes,
            delivered = report.delivered,
            pruned = report.pruned,
            "broadcast pass complete"
        );
        report
    }

    /// Returns the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }
}

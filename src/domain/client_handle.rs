//! Handle to one open event-stream connection.
//!
//! A [`ClientHandle`] owns the sending half of an unbounded queue whose
//! receiving half is drained by the connection's streamed response body.
//! Sending never blocks: bytes are enqueued and the connection's own
//! transport task writes them out, so a slow reader only delays itself.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::body::Bytes;
use tokio::sync::mpsc;

use super::ClientId;

/// One accepted event-stream connection.
///
/// Shared as `Arc<ClientHandle>` between the [`super::ConnectionRegistry`]
/// and any in-flight send, so removing it from the registry never
/// invalidates a send that already holds a reference.
#[derive(Debug)]
pub struct ClientHandle {
    id: ClientId,
    outbound: mpsc::UnboundedSender<Bytes>,
    /// Set once a send has been rejected by the transport side.
    failed: AtomicBool,
}

impl ClientHandle {
    /// Wraps the sending half of a connection's outbound queue.
    #[must_use]
    pub fn new(outbound: mpsc::UnboundedSender<Bytes>) -> Self {
        Self {
            id: ClientId::new(),
            outbound,
            failed: AtomicBool::new(false),
        }
    }

    /// Creates a handle together with the receiver its transport drains.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Returns this client's identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Enqueues `message` for delivery, fire-and-forget.
    ///
    /// A rejected send only records the failure; the handle stays in the
    /// registry until the next broadcast pass observes it as dead.
    pub fn send(&self, message: Bytes) {
        if self.outbound.send(message).is_err() {
            self.failed.store(true, Ordering::Release);
            tracing::debug!(client_id = %self.id, "send rejected, client marked dead");
        }
    }

    /// Returns `true` once the connection is known to be unusable.
    ///
    /// Based only on what has already been observed: a failed send, or the
    /// response body that drains the queue having been dropped by the
    /// transport. The connection is never probed.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.failed.load(Ordering::Acquire) || self.outbound.is_closed()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_reaches_receiver_verbatim() {
        let (handle, mut rx) = ClientHandle::channel();
        handle.send(Bytes::from_static(b"hello"));
        handle.send(Bytes::from_static(b"world"));

        let Some(first) = rx.recv().await else {
            panic!("expected first message");
        };
        let Some(second) = rx.recv().await else {
            panic!("expected second message");
        };
        assert_eq!(first, "hello");
        assert_eq!(second, "world");
        assert!(!handle.is_dead());
    }

    #[test]
    fn dropped_receiver_makes_handle_dead() {
        let (handle, rx) = ClientHandle::channel();
        assert!(!handle.is_dead());
        drop(rx);
        assert!(handle.is_dead());
    }

    #[test]
    fn failed_send_is_sticky() {
        let (handle, rx) = ClientHandle::channel();
        drop(rx);
        handle.send(Bytes::from_static(b"lost"));
        assert!(handle.failed.load(Ordering::Acquire));
        assert!(handle.is_dead());
    }

    #[test]
    fn handles_get_distinct_ids() {
        let (a, _rx_a) = ClientHandle::channel();
        let (b, _rx_b) = ClientHandle::channel();
        assert_ne!(a.id(), b.id());
    }
}

//! Streamed response body for one event-stream connection.
//!
//! [`EventStream`] yields the `:ok` handshake comment first and then
//! every message queued on its [`ClientHandle`]. The handle is registered
//! at the moment the transport pulls the handshake chunk; a response the
//! transport never starts writing is never registered.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Bytes;
use futures_util::Stream;
use tokio::sync::mpsc;

use crate::domain::{ClientHandle, ConnectionRegistry};

/// Comment line that opens every stream.
pub const HANDSHAKE: &[u8] = b":ok\n\n";

#[derive(Debug)]
struct PendingRegistration {
    handle: Arc<ClientHandle>,
    registry: Arc<ConnectionRegistry>,
}

/// Body stream of a `GET /sse` response.
#[derive(Debug)]
pub struct EventStream {
    pending: Option<PendingRegistration>,
    outbound: mpsc::UnboundedReceiver<Bytes>,
}

impl EventStream {
    /// Creates a stream whose handle joins `registry` on first poll.
    #[must_use]
    pub fn new(
        handle: Arc<ClientHandle>,
        outbound: mpsc::UnboundedReceiver<Bytes>,
        registry: Arc<ConnectionRegistry>,
    ) -> Self {
        Self {
            pending: Some(PendingRegistration { handle, registry }),
            outbound,
        }
    }
}

impl Stream for EventStream {
    type Item = Result<Bytes, Infallible>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(PendingRegistration { handle, registry }) = this.pending.take() {
            registry.register(handle);
            return Poll::Ready(Some(Ok(Bytes::from_static(HANDSHAKE))));
        }

        this.outbound.poll_recv(cx).map(|message| message.map(Ok))
    }
}

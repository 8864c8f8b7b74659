//! Event-stream layer: handshake handler and the streamed response body.
//!
//! The endpoint at `/sse` answers with `text/event-stream` headers and
//! keeps the response open, writing every broadcast message as it is
//! queued on the connection's [`crate::domain::ClientHandle`].

pub mod event_stream;
pub mod handler;

pub use event_stream::{EventStream, HANDSHAKE};

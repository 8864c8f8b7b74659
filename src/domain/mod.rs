//! Domain layer: client handles, the connection registry, and fan-out.
//!
//! This module holds the relay's shared state: the identity and liveness
//! of each open event stream, the ordered registry of those streams, and
//! the broadcaster that delivers published messages to them.

pub mod broadcaster;
pub mod client_handle;
pub mod client_id;
pub mod connection_registry;

pub use broadcaster::Broadcaster;
pub use client_handle::ClientHandle;
pub use client_id::ClientId;
pub use connection_registry::{ConnectionRegistry, PassReport};

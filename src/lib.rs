//! # sse-relay
//!
//! HTTP server-sent events relay. Clients open long-lived `GET /sse`
//! streams; whatever a publisher sends to `POST /broadcast` is written,
//! byte for byte, to every stream that is still open.
//!
//! ## Architecture
//!
//! ```text
//! Listeners (GET /sse)          Publisher (POST /broadcast)
//!     │                              │
//!     └──── Dispatcher + RouteTable (api/) ────┘
//!                      │
//!     ├── EventStream body (sse/)
//!     ├── Broadcaster (domain/)
//!     │
//!     └── ConnectionRegistry (domain/)
//!             └── Arc<ClientHandle> per open stream
//! ```
//!
//! Dead streams are pruned lazily: a client that went away is removed by
//! the next broadcast pass, never by a background probe.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod sse;

//! Relay error types with HTTP status code mapping.
//!
//! [`RelayError`] is the central error type for the relay. Variants that
//! can surface during a request map to a status code and a plain-text
//! body; every error response closes the connection.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::http::header::{CONNECTION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant              | HTTP Status                 |
/// |----------------------|-----------------------------|
/// | `BodyRead`           | 400 Bad Request             |
/// | `PayloadTooLarge`    | 413 Payload Too Large       |
/// | `InvalidListenAddr`  | 500 (startup only)          |
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The `POST /broadcast` body could not be read to completion.
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),

    /// The declared `POST /broadcast` body exceeds the configured limit.
    #[error("request body of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge {
        /// Declared body size.
        size: u64,
        /// Configured maximum.
        limit: usize,
    },

    /// `LISTEN_ADDR` is not a valid socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        /// The rejected value.
        value: String,
        /// Underlying parse error.
        source: AddrParseError,
    },
}

impl RelayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidListenAddr { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected");
        (
            self.status_code(),
            [(CONTENT_TYPE, "text/plain"), (CONNECTION, "close")],
            self.to_string(),
        )
            .into_response()
    }
}

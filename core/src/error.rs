//! Error types for the hero API client.
//!
//! # Design
//! `TransportError` is the failure shape [`Transport`](crate::Transport)
//! implementations produce; its `Display` is the message the client quotes in
//! the failure log line. Everything else stays crate-internal: the client
//! folds every failure into a fallback value at a single recovery point, so
//! no error type crosses the public operation signatures.

use thiserror::Error;

/// Error produced by a [`Transport`](crate::Transport) implementation.
///
/// Always carries a human-readable message; carries the HTTP status code as
/// well when the failure was a non-2xx response rather than a broken
/// connection.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    status: Option<u16>,
}

impl TransportError {
    /// A failure with no associated HTTP status, such as a refused
    /// connection or an aborted stream.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// A failure reported by the server as a non-2xx status.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// The HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

/// Everything that can go wrong inside an operation before the recovery
/// stage swallows it. The transport variant is transparent so the failure
/// log reads `<operation> failed: <transport message>` with nothing in
/// between.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

//! # Transport Error Types
//!
//! Error types for backend communication.
//!
//! ## Display Contract
//! A rejected request surfaces the backend's response body verbatim as its
//! message, falling back to the HTTP status line when the body is empty.
//! The error banner shows exactly what the backend said, so `Display` must
//! not wrap or prefix the body.

use thiserror::Error;

/// Result type alias for backend operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures while talking to the normalization backend.
///
/// All variants are recoverable: they abort the current operation and are
/// shown to the user, never terminating the session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Backend answered with a non-success status.
    ///
    /// `message` is the response body verbatim, or the HTTP status line
    /// when the body was empty.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response (DNS, refused, timeout).
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// The configured backend URL is unusable.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// HTTP status of a backend rejection, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::InvalidBody(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}

//! # API Error Type
//!
//! Unified error type for the commands exposed to the presentation layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in Kasa Analyzer                       │
//! │                                                                     │
//! │  CoreError (classification) ───┐                                    │
//! │  TransportError (backend)  ────┼──► ApiError { code, message } ──►  │
//! │  DecodeError (camera)      ────┘    presentation layer              │
//! │                                                                     │
//! │  The same failures also land on the ErrorReporter surfaces; the     │
//! │  ApiError return value is for the call site, the reporter is for    │
//! │  the persistent banner.                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::state::DecodeError;
use kasa_api::TransportError;
use kasa_core::CoreError;

/// Error returned from commands to the presentation layer.
///
/// ## Serialization
/// ```json
/// { "code": "TRANSPORT", "message": "{\"detail\":\"Receipt not found\"}" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message; backend rejections pass through verbatim.
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input was empty after trimming; no ingestion started.
    EmptyInput,

    /// Network failure or backend non-success response.
    Transport,

    /// Camera/decoder failure.
    Decode,

    /// Anything that does not fit the categories above.
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyInput => ApiError::new(ErrorCode::EmptyInput, err.to_string()),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::new(ErrorCode::Transport, err.to_string())
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError::new(ErrorCode::Decode, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

//! # Error Types
//!
//! Domain-specific error types for kasa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  kasa-core errors (this file)                                       │
//! │  └── CoreError        - Input classification failures               │
//! │                                                                     │
//! │  kasa-api errors (separate crate)                                   │
//! │  └── TransportError   - Network / backend non-success responses     │
//! │                                                                     │
//! │  Analyzer app errors                                                │
//! │  ├── DecodeError      - Camera decoder failures                     │
//! │  └── ApiError         - What the presentation layer sees            │
//! │                                                                     │
//! │  Flow: CoreError / TransportError → ApiError → Presentation         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Domain errors raised before any submission starts.
///
/// All of these are recoverable; they are reported to the user and the
/// current attempt is abandoned without side effects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The scanned, pasted or typed input was empty after trimming.
    ///
    /// Raised by [`crate::classify::classify`] so that no ingestion is
    /// ever started for blank input.
    #[error("Input is empty")]
    EmptyInput,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

//! # kasa-core: Pure Domain Logic for Kasa Analyzer
//!
//! This crate is the **heart** of Kasa Analyzer. It contains the domain
//! types and input classification as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Kasa Analyzer Architecture                      │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                 Presentation (scanner UI, tables)           │    │
//! │  └────────────────────────────┬────────────────────────────────┘    │
//! │                               │ commands                            │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │                 apps/analyzer (state + orchestration)       │    │
//! │  └────────────────────────────┬────────────────────────────────┘    │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │              ★ kasa-core (THIS CRATE) ★                     │    │
//! │  │                                                             │    │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐             │    │
//! │  │   │   types   │   │ classify  │   │   error   │             │    │
//! │  │   │  Receipt* │   │ QR sniff  │   │ CoreError │             │    │
//! │  │   │  Period*  │   │ payloads  │   │           │             │    │
//! │  │   └───────────┘   └───────────┘   └───────────┘             │    │
//! │  │                                                             │    │
//! │  │   NO I/O • NO NETWORK • NO CAMERA • PURE FUNCTIONS          │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use kasa_core::{classify, SubmissionPayload};
//!
//! // Bare identifiers become ReceiptId submissions
//! let payload = classify("MP1234567890").unwrap();
//! assert_eq!(payload, SubmissionPayload::ReceiptId("MP1234567890".into()));
//!
//! // Anything that sniffs as a QR payload becomes QrCode
//! let payload = classify("V1?p=x&d=y").unwrap();
//! assert_eq!(payload, SubmissionPayload::QrCode("V1?p=x&d=y".into()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod classify;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use classify::classify;
pub use error::{CoreError, CoreResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of receipts requested from the list endpoint.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Upper bound the backend enforces on the list limit; the client clamps
/// to the same value instead of provoking a validation error.
pub const MAX_LIST_LIMIT: u32 = 200;

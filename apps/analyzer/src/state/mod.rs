//! # State Module
//!
//! Application state for the analyzer.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      State Ownership                                │
//! │                                                                     │
//! │  ┌───────────────┐  ┌────────────────────┐  ┌───────────────────┐   │
//! │  │   DataStore   │  │ ScannerController  │  │  ErrorReporter    │   │
//! │  │               │  │                    │  │                   │   │
//! │  │ receipt list  │  │ Active / Paused    │  │ banner + scanner  │   │
//! │  │ selection     │  │ decoder session    │  │ error surfaces    │   │
//! │  │ statistics    │  │ handle             │  │                   │   │
//! │  └───────────────┘  └────────────────────┘  └───────────────────┘   │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │ IngestionOrchestrator                                       │    │
//! │  │ owns IngestionState, delegates scanner transitions,         │    │
//! │  │ triggers store refreshes                                    │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! │                                                                     │
//! │  SINGLE WRITER: each value has exactly one owning controller;      │
//! │  commands go through the owner, never at the fields directly.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod ingest;
mod reporter;
mod scanner;
mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use ingest::{IngestionOrchestrator, IngestionState, SCAN_PROCESSING, SCAN_STORED};
pub use reporter::ErrorReporter;
pub use scanner::{
    DecodeError, DecoderSession, NoopDecoder, ScanDecoder, ScannerController, ScannerState,
};
pub use store::DataStore;

//! # kasa-api: Backend Client for Kasa Analyzer
//!
//! HTTP+JSON client for the receipt normalization backend, plus the
//! [`ReceiptBackend`] trait the application layer depends on.
//!
//! ## Modules
//!
//! - [`backend`] - The `ReceiptBackend` trait seam
//! - [`client`] - `HttpBackend`, the reqwest implementation
//! - [`config`] - `ApiConfig` (env-driven connection settings)
//! - [`error`] - `TransportError` with the verbatim-body display contract
//!
//! ## Design Principles
//!
//! 1. **Single transport owner**: nothing outside this crate opens
//!    connections to the backend.
//! 2. **Messages pass through untouched**: the backend's rejection body is
//!    what the user sees, character for character.
//! 3. **Trait at the boundary**: the app orchestrates against
//!    [`ReceiptBackend`], never against reqwest types.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;

pub use backend::ReceiptBackend;
pub use client::HttpBackend;
pub use config::ApiConfig;
pub use error::{TransportError, TransportResult};

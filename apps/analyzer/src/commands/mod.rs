//! # Commands Module
//!
//! Entry points exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── exports
//! ├── ingest.rs   ◄─── submit-from-scan, submit-from-text/file
//! ├── receipts.rs ◄─── reload, select_receipt
//! ├── scanner.rs  ◄─── resume, current state
//! └── view.rs     ◄─── UiSnapshot (the read surface)
//! ```
//!
//! Each command is a free async function over [`crate::AppState`];
//! failures come back as [`crate::error::ApiError`] and also land on the
//! reporter surfaces, so the banner stays correct even when the caller
//! ignores the return value.

pub mod ingest;
pub mod receipts;
pub mod scanner;
pub mod view;

pub use view::{snapshot, UiSnapshot};

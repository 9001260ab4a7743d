//! # Error Reporter
//!
//! Single sink for human-readable failure messages.
//!
//! ## Surfaces
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Error Surfaces                               │
//! │                                                                     │
//! │  banner   Global banner: classification, submission and            │
//! │           list/statistics refresh failures.                         │
//! │                                                                     │
//! │  scan     Inline scanner surface: camera permission / decoder       │
//! │           start failures.                                           │
//! │                                                                     │
//! │  One message per surface; a new report overwrites the previous     │
//! │  one. Scanner *status* text ("processing", "stored") is not an     │
//! │  error and lives in the pause reason instead.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::RwLock;

use tracing::warn;

/// Shared failure-message surfaces for the presentation layer.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    banner: RwLock<Option<String>>,
    scan: RwLock<Option<String>>,
}

impl ErrorReporter {
    /// Creates a reporter with both surfaces empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a failure on the global banner, replacing any previous one.
    pub fn report(&self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "Reported failure");
        if let Ok(mut slot) = self.banner.write() {
            *slot = Some(message);
        }
    }

    /// Clears the global banner; called when a new attempt starts.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.banner.write() {
            *slot = None;
        }
    }

    /// Current global banner message.
    pub fn banner(&self) -> Option<String> {
        self.banner.read().map(|slot| slot.clone()).unwrap_or(None)
    }

    /// Reports a camera/decoder failure on the scanner surface.
    pub fn report_scan(&self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "Reported scanner failure");
        if let Ok(mut slot) = self.scan.write() {
            *slot = Some(message);
        }
    }

    /// Clears the scanner surface; called when the decoder starts cleanly.
    pub fn clear_scan(&self) {
        if let Ok(mut slot) = self.scan.write() {
            *slot = None;
        }
    }

    /// Current scanner-surface message.
    pub fn scan_error(&self) -> Option<String> {
        self.scan.read().map(|slot| slot.clone()).unwrap_or(None)
    }
}

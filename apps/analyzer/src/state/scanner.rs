//! # Scanner Lifecycle
//!
//! Tracks whether the camera input is active or paused, and owns the
//! decoder session handle.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Scanner Lifecycle                              │
//! │                                                                     │
//! │            resume()                     pause(reason)               │
//! │   Paused ───────────────► Active ───────────────────► Paused        │
//! │     ▲                       │                            │          │
//! │     │  decoder.begin()      │  session.stop()            │          │
//! │     │  failed               │                            │          │
//! │     └───────────────────────┴────────────────────────────┘          │
//! │                                                                     │
//! │  INVARIANTS:                                                        │
//! │  • The decoder session runs exactly while the state is Active.      │
//! │  • resume() is the only transition into Active; nothing resumes    │
//! │    automatically after a scan succeeds or fails.                    │
//! │  • pause() while paused only updates the reason text.               │
//! │  • The session is released on every exit path, including drop.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{info, warn};

use super::reporter::ErrorReporter;

/// Shown on the scanner surface when the camera cannot be started.
const CAMERA_REMEDIATION: &str = "Camera could not be started. Check permissions and try again.";

// =============================================================================
// Decoder Seam
// =============================================================================

/// Camera decoder failures (permission denied, device init).
///
/// The message is reported verbatim; it comes from the decoder engine.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The user or platform denied camera access.
    #[error("Camera permission denied: {0}")]
    PermissionDenied(String),

    /// The decoder engine failed to start.
    #[error("Camera failed to start: {0}")]
    StartFailed(String),
}

/// A running camera/decoding session.
///
/// Implementations must stop the underlying device in [`Drop`] as well, so
/// the camera light goes off even when the controller is torn down without
/// an explicit pause.
pub trait DecoderSession: Send {
    /// Stops frame decoding. The camera must be off when this returns.
    fn stop(&mut self);
}

/// The external QR video-decoding engine.
pub trait ScanDecoder: Send + Sync {
    /// Acquires a running decoder session.
    fn begin(&self) -> Result<Box<dyn DecoderSession>, DecodeError>;
}

/// Decoder for headless builds; accepts no frames and never fails.
///
/// Scanned text is fed through the submit-from-scan entry point directly,
/// which is what the dev shell does.
pub struct NoopDecoder;

struct NoopSession;

impl DecoderSession for NoopSession {
    fn stop(&mut self) {}
}

impl ScanDecoder for NoopDecoder {
    fn begin(&self) -> Result<Box<dyn DecoderSession>, DecodeError> {
        Ok(Box::new(NoopSession))
    }
}

// =============================================================================
// Scanner State
// =============================================================================

/// Whether the camera input is running. Exactly one value at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerState {
    /// The decoder session is running and emitting detections.
    Active,

    /// The decoder is stopped; `reason` is the status text shown next to
    /// the scanner ("processing", "stored", scan-failure remediation).
    Paused { reason: Option<String> },
}

impl ScannerState {
    /// Returns true while the decoder session runs.
    pub fn is_active(&self) -> bool {
        matches!(self, ScannerState::Active)
    }

    /// The pause reason, if paused with one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ScannerState::Active => None,
            ScannerState::Paused { reason } => reason.as_deref(),
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

struct ScannerInner {
    state: ScannerState,
    session: Option<Box<dyn DecoderSession>>,
}

/// Owns the scanner state and the decoder session handle.
///
/// Starts out `Paused` with no reason; the presentation layer calls
/// [`resume`](ScannerController::resume) once the scanner view is up.
pub struct ScannerController {
    decoder: Arc<dyn ScanDecoder>,
    reporter: Arc<ErrorReporter>,
    inner: Mutex<ScannerInner>,
}

impl ScannerController {
    pub fn new(decoder: Arc<dyn ScanDecoder>, reporter: Arc<ErrorReporter>) -> Self {
        ScannerController {
            decoder,
            reporter,
            inner: Mutex::new(ScannerInner {
                state: ScannerState::Paused { reason: None },
                session: None,
            }),
        }
    }

    /// Current scanner state.
    pub fn state(&self) -> ScannerState {
        self.inner
            .lock()
            .expect("scanner mutex poisoned")
            .state
            .clone()
    }

    /// Pauses the scanner and records why.
    ///
    /// Idempotent: pausing an already-paused scanner only updates the
    /// reason text. The decoder session is stopped before the state
    /// changes, so no detection can arrive after this returns.
    pub fn pause(&self, reason: impl Into<String>) {
        let reason = reason.into();
        let mut inner = self.inner.lock().expect("scanner mutex poisoned");
        if let Some(mut session) = inner.session.take() {
            session.stop();
        }
        info!(%reason, "Scanner paused");
        inner.state = ScannerState::Paused {
            reason: Some(reason),
        };
    }

    /// Starts (or restarts) scanning. Always user-initiated.
    ///
    /// Clears the pause reason and the scanner error surface. When the
    /// decoder fails to start, the failure is reported verbatim and the
    /// scanner stays paused with a remediation reason.
    pub fn resume(&self) {
        let mut inner = self.inner.lock().expect("scanner mutex poisoned");
        if inner.state.is_active() {
            return;
        }
        match self.decoder.begin() {
            Ok(session) => {
                self.reporter.clear_scan();
                inner.session = Some(session);
                inner.state = ScannerState::Active;
                info!("Scanner active");
            }
            Err(err) => {
                warn!(%err, "Decoder failed to start");
                self.reporter.report_scan(err.to_string());
                inner.state = ScannerState::Paused {
                    reason: Some(CAMERA_REMEDIATION.to_string()),
                };
            }
        }
    }
}

impl Drop for ScannerController {
    /// Releases the decoder session on teardown.
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            if let Some(mut session) = inner.session.take() {
                session.stop();
            }
        }
    }
}

//! # Ingestion Orchestrator
//!
//! Coordinates classification output, backend submission, store refresh,
//! selection update, and scanner-state transitions. Sole owner of the
//! "is an ingestion in flight" state.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      submit(payload, origin)                        │
//! │                                                                     │
//! │  scanned origin? ──► scanner.pause("processing")                    │
//! │        │             (no further detections mid-submission)         │
//! │        ▼                                                            │
//! │  state = InFlight ──► backend.submit_receipt(payload)               │
//! │        │                                                            │
//! │        ├── Ok(detail) ──► store.refresh()   (awaited first;         │
//! │        │                  failure reported, not fatal)              │
//! │        │                  store.apply_selection(detail)             │
//! │        │                  state = Idle                              │
//! │        │                  scanned? stay paused, "stored" message    │
//! │        │                                                            │
//! │        └── Err(err) ────► state = Failed                            │
//! │                           reporter.report(err)   (verbatim)         │
//! │                           scanned? stay paused, remediation msg     │
//! │                           store untouched                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed submission never mutates the store; the refresh only runs on
//! success, so partial or garbage data is never cached.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use kasa_api::{ReceiptBackend, TransportResult};
use kasa_core::{InputOrigin, ReceiptDetail, SubmissionPayload};

use super::reporter::ErrorReporter;
use super::scanner::ScannerController;
use super::store::DataStore;

/// Pause reason while a scanned submission is in flight.
pub const SCAN_PROCESSING: &str = "Processing scanned code…";

/// Pause reason after a scanned submission succeeded. The user opts back
/// into scanning explicitly; there is no automatic resume.
pub const SCAN_STORED: &str = "Receipt stored. Scan again to continue.";

fn scan_failed(message: &str) -> String {
    format!("Scan failed: {message}. Fix the problem and scan again.")
}

// =============================================================================
// Ingestion State
// =============================================================================

/// Lifecycle of the current submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionState {
    /// No submission in flight.
    Idle,

    /// A submission is running against the backend.
    InFlight { origin: InputOrigin },

    /// The last submission failed; kept until the next attempt starts.
    Failed {
        message: String,
        origin: InputOrigin,
    },
}

impl IngestionState {
    /// True while a submission is running; drives the loading flag.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, IngestionState::InFlight { .. })
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Drives one submission from payload to reconciled store state.
pub struct IngestionOrchestrator {
    backend: Arc<dyn ReceiptBackend>,
    store: Arc<DataStore>,
    scanner: Arc<ScannerController>,
    reporter: Arc<ErrorReporter>,
    state: RwLock<IngestionState>,
}

impl IngestionOrchestrator {
    pub fn new(
        backend: Arc<dyn ReceiptBackend>,
        store: Arc<DataStore>,
        scanner: Arc<ScannerController>,
        reporter: Arc<ErrorReporter>,
    ) -> Self {
        IngestionOrchestrator {
            backend,
            store,
            scanner,
            reporter,
            state: RwLock::new(IngestionState::Idle),
        }
    }

    /// Current ingestion state.
    pub fn state(&self) -> IngestionState {
        self.state.read().expect("ingestion lock poisoned").clone()
    }

    /// True while a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.state().is_in_flight()
    }

    fn set_state(&self, state: IngestionState) {
        *self.state.write().expect("ingestion lock poisoned") = state;
    }

    /// Submits a classified payload and reconciles the store on success.
    ///
    /// Scanned-origin submissions pause the scanner before any network
    /// call and leave it paused afterwards, success or failure. The store
    /// refresh is awaited to completion before the submitted detail
    /// becomes the selection.
    pub async fn submit(
        &self,
        payload: SubmissionPayload,
        origin: InputOrigin,
    ) -> TransportResult<ReceiptDetail> {
        if origin == InputOrigin::Scanned {
            // Stop frame delivery before the first network call so the
            // same frame cannot be decoded twice mid-submission.
            self.scanner.pause(SCAN_PROCESSING);
        }

        self.set_state(IngestionState::InFlight { origin });
        self.reporter.clear();
        info!(
            origin = origin.as_str(),
            kind = payload.kind(),
            "Submitting receipt"
        );

        match self.backend.submit_receipt(&payload).await {
            Ok(detail) => {
                // Reconcile list and statistics before touching the
                // selection. A refresh failure is reported but does not
                // fail the submission: the receipt is already stored.
                if let Err(err) = self.store.refresh().await {
                    warn!(%err, "Refresh after submission failed");
                    self.reporter.report(err.to_string());
                }
                self.store.apply_selection(detail.clone());
                self.set_state(IngestionState::Idle);
                if origin == InputOrigin::Scanned {
                    self.scanner.pause(SCAN_STORED);
                }
                info!(receipt_id = detail.receipt_id(), "Receipt ingested");
                Ok(detail)
            }
            Err(err) => {
                let message = err.to_string();
                warn!(origin = origin.as_str(), %message, "Submission failed");
                self.set_state(IngestionState::Failed {
                    message: message.clone(),
                    origin,
                });
                self.reporter.report(&message);
                if origin == InputOrigin::Scanned {
                    self.scanner.pause(scan_failed(&message));
                }
                Err(err)
            }
        }
    }
}

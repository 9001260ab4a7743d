//! # View Snapshot
//!
//! The read surface exposed to the presentation layer: everything it
//! needs to render, in one DTO.

use serde::Serialize;

use kasa_core::{PeriodStatistics, ReceiptDetail, ReceiptSummary};

use crate::state::ScannerState;
use crate::AppState;

/// Scanner state as the presentation layer sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerStateDto {
    /// True while the decoder session runs (camera light on).
    pub active: bool,

    /// Pause reason / status text when paused.
    pub message: Option<String>,
}

impl From<ScannerState> for ScannerStateDto {
    fn from(state: ScannerState) -> Self {
        match state {
            ScannerState::Active => ScannerStateDto {
                active: true,
                message: None,
            },
            ScannerState::Paused { reason } => ScannerStateDto {
                active: false,
                message: reason,
            },
        }
    }
}

/// One consistent view of the application state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    /// Cached receipt list, newest first.
    pub receipts: Vec<ReceiptSummary>,

    /// Currently selected receipt detail.
    pub selected: Option<ReceiptDetail>,

    /// Cached statistics for the session's period.
    pub statistics: Option<PeriodStatistics>,

    /// Global error banner.
    pub error: Option<String>,

    /// Inline scanner error (camera/permission failures).
    pub scan_error: Option<String>,

    /// Scanner state and status message.
    pub scanner: ScannerStateDto,

    /// True while a submission is in flight.
    pub loading: bool,
}

/// Captures the current state for rendering.
pub fn snapshot(state: &AppState) -> UiSnapshot {
    UiSnapshot {
        receipts: state.store.receipts(),
        selected: state.store.selected(),
        statistics: state.store.statistics(),
        error: state.reporter.banner(),
        scan_error: state.reporter.scan_error(),
        scanner: state.scanner.state().into(),
        loading: state.ingest.is_loading(),
    }
}

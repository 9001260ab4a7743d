//! # Scanner Commands

use tracing::debug;

use crate::state::ScannerState;
use crate::AppState;

/// Re-activates scanning after a pause. Always user-initiated; nothing
/// calls this automatically.
pub fn resume(state: &AppState) {
    debug!("resume_scanner command");
    state.scanner.resume();
}

/// Current scanner state for the presentation layer.
pub fn current(state: &AppState) -> ScannerState {
    state.scanner.state()
}

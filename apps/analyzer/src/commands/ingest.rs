//! # Ingestion Commands
//!
//! The two submission entry points: submit-from-scan and
//! submit-from-text/file. Classification failures are caught here and
//! reported without starting an ingestion.

use tracing::debug;

use kasa_core::{classify, InputOrigin, ReceiptDetail, SubmissionPayload};

use crate::error::ApiError;
use crate::AppState;

/// Classifies the text first; an empty input is reported on the banner
/// and never reaches the orchestrator.
fn classify_or_report(state: &AppState, text: &str) -> Result<SubmissionPayload, ApiError> {
    match classify(text) {
        Ok(payload) => Ok(payload),
        Err(err) => {
            state.reporter.report(err.to_string());
            Err(err.into())
        }
    }
}

/// Submits text decoded from a camera frame.
pub async fn submit_scanned(state: &AppState, text: &str) -> Result<ReceiptDetail, ApiError> {
    debug!("submit_scanned command");
    let payload = classify_or_report(state, text)?;
    state
        .ingest
        .submit(payload, InputOrigin::Scanned)
        .await
        .map_err(Into::into)
}

/// Submits text the user typed or pasted.
pub async fn submit_manual(state: &AppState, text: &str) -> Result<ReceiptDetail, ApiError> {
    debug!("submit_manual command");
    let payload = classify_or_report(state, text)?;
    state
        .ingest
        .submit(payload, InputOrigin::Pasted)
        .await
        .map_err(Into::into)
}

/// Submits a pre-parsed JSON export. Bypasses classification: an uploaded
/// document is always a raw payload, whatever it contains.
pub async fn submit_upload(
    state: &AppState,
    payload: serde_json::Value,
) -> Result<ReceiptDetail, ApiError> {
    debug!("submit_upload command");
    state
        .ingest
        .submit(SubmissionPayload::for_upload(payload), InputOrigin::Uploaded)
        .await
        .map_err(Into::into)
}

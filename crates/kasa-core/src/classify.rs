//! # Input Classification
//!
//! Turns heterogeneous raw input into a typed [`SubmissionPayload`].
//!
//! ## Classification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Input Classification                            │
//! │                                                                     │
//! │  scanned frame ──┐                                                  │
//! │                  ├──► classify(text) ──┬──► QrCode(trimmed)         │
//! │  pasted text ────┘                     └──► ReceiptId(trimmed)      │
//! │                                                                     │
//! │  uploaded JSON ─────► SubmissionPayload::for_upload(value)          │
//! │                       (no heuristic, always RawPayload)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The QR sniff is intentionally permissive: it decides the *request shape*,
//! not validity. Malformed QR payloads are rejected by the backend.

use crate::error::{CoreError, CoreResult};
use crate::types::SubmissionPayload;

/// Characters that only occur in QR-encoded payloads, never in bare
/// receipt identifiers.
const QR_MARKERS: &[char] = &['{', '=', '&', '?'];

/// Classifies scanned or pasted text into a submission payload.
///
/// The trimmed value is treated as a QR-encoded payload when it contains
/// any of `{`, `=`, `&`, `?` or starts with `V` (the fiscal QR format
/// prefix); anything else is taken as a literal receipt identifier.
///
/// Fails with [`CoreError::EmptyInput`] when the trimmed input is empty,
/// so no ingestion is started for blank scans or submissions.
pub fn classify(raw: &str) -> CoreResult<SubmissionPayload> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let looks_like_qr = value.contains(QR_MARKERS) || value.starts_with('V');
    if looks_like_qr {
        Ok(SubmissionPayload::QrCode(value.to_string()))
    } else {
        Ok(SubmissionPayload::ReceiptId(value.to_string()))
    }
}

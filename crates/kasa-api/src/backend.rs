//! # Backend Trait Seam
//!
//! The normalization backend as seen by the application layer.
//!
//! The app's store and orchestrator depend on this trait, not on the HTTP
//! client, so orchestration tests run against in-memory fakes while the
//! real build wires [`crate::HttpBackend`].

use async_trait::async_trait;

use kasa_core::{Period, PeriodStatistics, ReceiptDetail, ReceiptSummary, SubmissionPayload};

use crate::error::TransportResult;

/// Operations the normalization backend offers the client.
///
/// One method per backend endpoint; all failures surface as
/// [`crate::TransportError`] with the backend's message intact.
#[async_trait]
pub trait ReceiptBackend: Send + Sync {
    /// Lists the most recent receipts, newest first.
    async fn list_receipts(&self, limit: u32) -> TransportResult<Vec<ReceiptSummary>>;

    /// Fetches one receipt with its line items by fiscal receipt id.
    async fn receipt_detail(&self, receipt_id: &str) -> TransportResult<ReceiptDetail>;

    /// Submits a receipt reference for ingestion and returns the stored,
    /// normalized detail.
    async fn submit_receipt(&self, payload: &SubmissionPayload) -> TransportResult<ReceiptDetail>;

    /// Fetches category totals for one calendar month.
    async fn period_stats(&self, period: Period) -> TransportResult<PeriodStatistics>;
}

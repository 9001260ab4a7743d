//! # Data Store
//!
//! In-memory, single-writer cache of the three dependent views: receipt
//! list, selected receipt detail, and period statistics.
//!
//! ## Reconciliation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         refresh()                                   │
//! │                                                                     │
//! │  list_receipts ──┐                                                  │
//! │                  ├─ try_join ──► commit list + stats ───┐           │
//! │  period_stats ───┘   (both-or-nothing)                  │           │
//! │                                                         ▼           │
//! │                              list empty? ──► clear selection        │
//! │                              otherwise   ──► fetch first detail     │
//! │                                              and select it          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All cached values are replaced wholesale, never mutated in place.
//! Overlapping `refresh`/`select_receipt` calls are allowed to run
//! concurrently; the last result to resolve wins.

use std::sync::{Arc, RwLock};

use tracing::debug;

use kasa_api::{ReceiptBackend, TransportResult};
use kasa_core::{Period, PeriodStatistics, ReceiptDetail, ReceiptSummary};

#[derive(Default)]
struct StoreInner {
    receipts: Vec<ReceiptSummary>,
    selected: Option<ReceiptDetail>,
    statistics: Option<PeriodStatistics>,
}

/// Owns the cached receipt list, the current selection and the period
/// statistics. The only component allowed to replace them.
pub struct DataStore {
    backend: Arc<dyn ReceiptBackend>,
    period: Period,
    list_limit: u32,
    inner: RwLock<StoreInner>,
}

impl DataStore {
    /// Creates an empty store pinned to the current calendar month.
    ///
    /// The period is captured once here and stays fixed for the session.
    pub fn new(backend: Arc<dyn ReceiptBackend>, list_limit: u32) -> Self {
        Self::with_period(backend, list_limit, Period::current())
    }

    /// Creates an empty store for an explicit period.
    pub fn with_period(backend: Arc<dyn ReceiptBackend>, list_limit: u32, period: Period) -> Self {
        DataStore {
            backend,
            period,
            list_limit,
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// The statistics period this store is pinned to.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Reloads the receipt list and the period statistics, then selects
    /// the first listed receipt (or clears the selection if none).
    ///
    /// List and statistics are fetched concurrently and committed in one
    /// step: if either fetch fails, both keep their previous values. A
    /// failure fetching the default-selection detail leaves the previous
    /// selection in place and propagates to the caller.
    pub async fn refresh(&self) -> TransportResult<()> {
        let (receipts, statistics) = tokio::try_join!(
            self.backend.list_receipts(self.list_limit),
            self.backend.period_stats(self.period),
        )?;

        debug!(
            receipts = receipts.len(),
            categories = statistics.totals.len(),
            "Store refreshed"
        );

        let first_id = receipts.first().map(|r| r.receipt_id.clone());
        {
            let mut inner = self.inner.write().expect("store lock poisoned");
            inner.receipts = receipts;
            inner.statistics = Some(statistics);
            if first_id.is_none() {
                inner.selected = None;
            }
        }

        if let Some(receipt_id) = first_id {
            let detail = self.backend.receipt_detail(&receipt_id).await?;
            let mut inner = self.inner.write().expect("store lock poisoned");
            inner.selected = Some(detail);
        }
        Ok(())
    }

    /// Fetches one receipt detail and makes it the selection.
    ///
    /// Independent of the list; a failure leaves the previous selection
    /// untouched.
    pub async fn select_receipt(&self, receipt_id: &str) -> TransportResult<()> {
        let detail = self.backend.receipt_detail(receipt_id).await?;
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.selected = Some(detail);
        Ok(())
    }

    /// Replaces the selection with an already-fetched detail.
    ///
    /// Used after a successful submission, where the backend has just
    /// returned the stored receipt.
    pub fn apply_selection(&self, detail: ReceiptDetail) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.selected = Some(detail);
    }

    /// Snapshot of the cached receipt list.
    pub fn receipts(&self) -> Vec<ReceiptSummary> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .receipts
            .clone()
    }

    /// Snapshot of the current selection.
    pub fn selected(&self) -> Option<ReceiptDetail> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .selected
            .clone()
    }

    /// Snapshot of the cached period statistics.
    pub fn statistics(&self) -> Option<PeriodStatistics> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .statistics
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{detail, stats, summary, FakeBackend};

    fn store_for(backend: &Arc<FakeBackend>) -> DataStore {
        DataStore::with_period(
            Arc::clone(backend) as Arc<dyn ReceiptBackend>,
            50,
            Period {
                year: 2024,
                month: 3,
            },
        )
    }

    #[tokio::test]
    async fn test_refresh_loads_list_stats_and_first_detail() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_receipts(vec![summary("MP1"), summary("MP2")]);
        backend.insert_detail(detail("MP1"));
        backend.set_stats(stats(&[("food", 10.5), ("transport", 4.25)]));

        let store = store_for(&backend);
        store.refresh().await.unwrap();

        assert_eq!(store.receipts().len(), 2);
        assert_eq!(store.selected().unwrap().receipt_id(), "MP1");
        assert_eq!(store.statistics().unwrap().grand_total(), 14.75);
    }

    #[tokio::test]
    async fn test_refresh_with_empty_list_clears_selection() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        backend.set_stats(stats(&[]));

        let store = store_for(&backend);
        store.refresh().await.unwrap();
        assert!(store.selected().is_some());

        backend.set_receipts(vec![]);
        store.refresh().await.unwrap();

        assert!(store.receipts().is_empty());
        assert!(store.selected().is_none());
        // No detail fetch is attempted for an empty list.
        assert_eq!(backend.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_is_both_or_nothing_when_stats_fail() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        backend.set_stats(stats(&[("food", 10.5)]));

        let store = store_for(&backend);
        store.refresh().await.unwrap();

        backend.set_receipts(vec![summary("MP2")]);
        backend.fail_stats("stats endpoint down");
        store.refresh().await.unwrap_err();

        // Neither the list nor the statistics moved.
        assert_eq!(store.receipts()[0].receipt_id, "MP1");
        assert_eq!(store.statistics().unwrap().grand_total(), 10.5);
        assert_eq!(store.selected().unwrap().receipt_id(), "MP1");
    }

    #[tokio::test]
    async fn test_refresh_is_both_or_nothing_when_list_fails() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        backend.set_stats(stats(&[("food", 1.0)]));

        let store = store_for(&backend);
        store.refresh().await.unwrap();

        backend.fail_list("list endpoint down");
        backend.set_stats(stats(&[("food", 99.0)]));
        store.refresh().await.unwrap_err();

        assert_eq!(store.statistics().unwrap().grand_total(), 1.0);
    }

    #[tokio::test]
    async fn test_refresh_detail_failure_keeps_previous_selection() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        backend.set_stats(stats(&[]));

        let store = store_for(&backend);
        store.refresh().await.unwrap();

        // The new list's first entry has no fetchable detail.
        backend.set_receipts(vec![summary("MP9"), summary("MP1")]);
        backend.fail_detail("detail endpoint down");
        store.refresh().await.unwrap_err();

        // List committed, selection untouched.
        assert_eq!(store.receipts()[0].receipt_id, "MP9");
        assert_eq!(store.selected().unwrap().receipt_id(), "MP1");
    }

    #[tokio::test]
    async fn test_select_receipt_failure_keeps_previous_selection() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        backend.insert_detail(detail("MP2"));
        backend.set_stats(stats(&[]));

        let store = store_for(&backend);
        store.refresh().await.unwrap();

        store.select_receipt("MP2").await.unwrap();
        assert_eq!(store.selected().unwrap().receipt_id(), "MP2");

        backend.fail_detail("gone");
        store.select_receipt("MP1").await.unwrap_err();
        assert_eq!(store.selected().unwrap().receipt_id(), "MP2");
    }
}

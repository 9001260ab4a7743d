//! Test doubles for the backend and decoder seams, shared by the state
//! module tests. Scripted in-memory stand-ins, no network, no camera.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use kasa_api::{ReceiptBackend, TransportError, TransportResult};
use kasa_core::{
    CategoryTotal, Period, PeriodStatistics, ReceiptDetail, ReceiptLineItem, ReceiptSummary,
    SubmissionPayload,
};

use super::scanner::{DecodeError, DecoderSession, ScanDecoder};

// =============================================================================
// Builders
// =============================================================================

pub fn summary(receipt_id: &str) -> ReceiptSummary {
    ReceiptSummary {
        id: format!("uuid-{receipt_id}"),
        receipt_id: receipt_id.to_string(),
        issue_date: None,
        merchant_name: Some("Groceries s.r.o.".to_string()),
        total_amount: Some(14.75),
    }
}

pub fn detail(receipt_id: &str) -> ReceiptDetail {
    ReceiptDetail {
        summary: summary(receipt_id),
        items: vec![ReceiptLineItem {
            id: 1,
            name: "Apples".to_string(),
            quantity: 0.5,
            unit_price: Some(2.2),
            total_price: Some(1.1),
            category: None,
            suggested_category: Some("food".to_string()),
        }],
    }
}

pub fn stats(rows: &[(&str, f64)]) -> PeriodStatistics {
    PeriodStatistics {
        month: 3,
        year: 2024,
        totals: rows
            .iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total: *total,
            })
            .collect(),
    }
}

fn rejection(message: &str) -> TransportError {
    TransportError::Backend {
        status: 422,
        message: message.to_string(),
    }
}

// =============================================================================
// Fake Backend
// =============================================================================

struct FakeBackendInner {
    receipts: Vec<ReceiptSummary>,
    details: HashMap<String, ReceiptDetail>,
    statistics: PeriodStatistics,
    submit_response: Option<Result<ReceiptDetail, String>>,
    fail_list: Option<String>,
    fail_stats: Option<String>,
    fail_detail: Option<String>,
    detail_calls: usize,
}

impl Default for FakeBackendInner {
    fn default() -> Self {
        FakeBackendInner {
            receipts: Vec::new(),
            details: HashMap::new(),
            statistics: stats(&[]),
            submit_response: None,
            fail_list: None,
            fail_stats: None,
            fail_detail: None,
            detail_calls: 0,
        }
    }
}

/// Scripted [`ReceiptBackend`]. Every call appends to the shared event log
/// so tests can assert call ordering across collaborators.
pub struct FakeBackend {
    inner: Mutex<FakeBackendInner>,
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::with_log(Arc::new(Mutex::new(Vec::new())))
    }

    /// Shares an event log with other fakes (e.g. the decoder).
    pub fn with_log(log: Arc<Mutex<Vec<String>>>) -> Self {
        FakeBackend {
            inner: Mutex::new(FakeBackendInner::default()),
            log,
        }
    }

    pub fn set_receipts(&self, receipts: Vec<ReceiptSummary>) {
        self.inner.lock().unwrap().receipts = receipts;
    }

    pub fn insert_detail(&self, detail: ReceiptDetail) {
        let key = detail.receipt_id().to_string();
        self.inner.lock().unwrap().details.insert(key, detail);
    }

    pub fn set_stats(&self, statistics: PeriodStatistics) {
        self.inner.lock().unwrap().statistics = statistics;
    }

    pub fn set_submit_ok(&self, detail: ReceiptDetail) {
        self.inner.lock().unwrap().submit_response = Some(Ok(detail));
    }

    pub fn set_submit_err(&self, message: &str) {
        self.inner.lock().unwrap().submit_response = Some(Err(message.to_string()));
    }

    pub fn fail_list(&self, message: &str) {
        self.inner.lock().unwrap().fail_list = Some(message.to_string());
    }

    pub fn fail_stats(&self, message: &str) {
        self.inner.lock().unwrap().fail_stats = Some(message.to_string());
    }

    pub fn fail_detail(&self, message: &str) {
        self.inner.lock().unwrap().fail_detail = Some(message.to_string());
    }

    pub fn detail_calls(&self) -> usize {
        self.inner.lock().unwrap().detail_calls
    }

    pub fn events(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReceiptBackend for FakeBackend {
    async fn list_receipts(&self, _limit: u32) -> TransportResult<Vec<ReceiptSummary>> {
        let inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_list {
            return Err(rejection(message));
        }
        Ok(inner.receipts.clone())
    }

    async fn receipt_detail(&self, receipt_id: &str) -> TransportResult<ReceiptDetail> {
        let mut inner = self.inner.lock().unwrap();
        inner.detail_calls += 1;
        if let Some(message) = &inner.fail_detail {
            return Err(rejection(message));
        }
        inner
            .details
            .get(receipt_id)
            .cloned()
            .ok_or_else(|| rejection("{\"detail\":\"Receipt not found\"}"))
    }

    async fn submit_receipt(&self, _payload: &SubmissionPayload) -> TransportResult<ReceiptDetail> {
        self.log.lock().unwrap().push("backend.submit".to_string());
        let response = self.inner.lock().unwrap().submit_response.clone();
        match response {
            Some(Ok(detail)) => Ok(detail),
            Some(Err(message)) => Err(rejection(&message)),
            None => Err(rejection("no scripted submit response")),
        }
    }

    async fn period_stats(&self, _period: Period) -> TransportResult<PeriodStatistics> {
        let inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_stats {
            return Err(rejection(message));
        }
        Ok(inner.statistics.clone())
    }
}

// =============================================================================
// Fake Decoder
// =============================================================================

/// Scripted [`ScanDecoder`]; sessions record start/stop into the shared
/// event log. `stop` is logged once even when Drop runs after it.
pub struct FakeDecoder {
    fail: Option<String>,
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeDecoder {
    pub fn new() -> Self {
        Self::with_log(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn with_log(log: Arc<Mutex<Vec<String>>>) -> Self {
        FakeDecoder { fail: None, log }
    }

    /// A decoder whose `begin` always fails with a permission error.
    pub fn failing(message: &str) -> Self {
        FakeDecoder {
            fail: Some(message.to_string()),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

struct FakeSession {
    log: Arc<Mutex<Vec<String>>>,
    stopped: bool,
}

impl DecoderSession for FakeSession {
    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.log.lock().unwrap().push("decoder.stop".to_string());
        }
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.stop();
    }
}

impl ScanDecoder for FakeDecoder {
    fn begin(&self) -> Result<Box<dyn DecoderSession>, DecodeError> {
        if let Some(message) = &self.fail {
            return Err(DecodeError::PermissionDenied(message.clone()));
        }
        self.log.lock().unwrap().push("decoder.start".to_string());
        Ok(Box::new(FakeSession {
            log: Arc::clone(&self.log),
            stopped: false,
        }))
    }
}

//! # HTTP Backend Client
//!
//! reqwest-based implementation of [`ReceiptBackend`] against the
//! normalization backend's JSON API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  GET  receipts?limit=N      list recent receipts (newest first)     │
//! │  GET  receipts/{id}         one receipt with line items             │
//! │  POST receipts/fetch        submit a receipt reference              │
//! │  GET  stats?year=Y&month=M  category totals for one month           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Non-success responses become [`TransportError::Backend`] carrying the
//! response body verbatim (or the status line when the body is empty).

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use async_trait::async_trait;
use kasa_core::{
    Period, PeriodStatistics, ReceiptDetail, ReceiptSummary, SubmissionPayload, MAX_LIST_LIMIT,
};

use crate::backend::ReceiptBackend;
use crate::config::ApiConfig;
use crate::error::{TransportError, TransportResult};

/// HTTP client for the normalization backend.
pub struct HttpBackend {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpBackend {
    /// Creates a client for the configured backend.
    pub fn new(config: ApiConfig) -> Self {
        HttpBackend {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Configured list size for the receipt list endpoint.
    pub fn list_limit(&self) -> u32 {
        self.config.list_limit
    }

    fn endpoint(&self, path: &str) -> TransportResult<Url> {
        Ok(self.config.base_url.join(path)?)
    }

    /// Reads a JSON response, converting non-success statuses into
    /// [`TransportError::Backend`] with the body text intact.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> TransportResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                // e.g. "404 Not Found"
                status.to_string()
            } else {
                body
            };
            return Err(TransportError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ReceiptBackend for HttpBackend {
    async fn list_receipts(&self, limit: u32) -> TransportResult<Vec<ReceiptSummary>> {
        // The backend rejects limits above its cap; clamp instead.
        let limit = limit.min(MAX_LIST_LIMIT);
        debug!(limit, "GET receipts");

        let response = self
            .http
            .get(self.endpoint("receipts")?)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn receipt_detail(&self, receipt_id: &str) -> TransportResult<ReceiptDetail> {
        debug!(receipt_id, "GET receipt detail");

        let response = self
            .http
            .get(self.endpoint(&format!("receipts/{receipt_id}"))?)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn submit_receipt(&self, payload: &SubmissionPayload) -> TransportResult<ReceiptDetail> {
        debug!(kind = payload.kind(), "POST receipts/fetch");

        let response = self
            .http
            .post(self.endpoint("receipts/fetch")?)
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn period_stats(&self, period: Period) -> TransportResult<PeriodStatistics> {
        debug!(year = period.year, month = period.month, "GET stats");

        let response = self
            .http
            .get(self.endpoint("stats")?)
            .query(&[
                ("year", period.year.to_string()),
                ("month", period.month.to_string()),
            ])
            .send()
            .await?;
        Self::read_json(response).await
    }
}

//! # Domain Types
//!
//! Core domain types used throughout Kasa Analyzer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐   │
//! │  │  ReceiptSummary  │  │  ReceiptDetail   │  │ PeriodStatistics │   │
//! │  │  ──────────────  │  │  ──────────────  │  │ ──────────────── │   │
//! │  │  id (backend)    │  │  summary (flat)  │  │  year, month     │   │
//! │  │  receipt_id      │  │  items[]         │  │  totals[]        │   │
//! │  │  merchant_name?  │  │                  │  │                  │   │
//! │  │  total_amount?   │  │                  │  │                  │   │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘   │
//! │                                                                     │
//! │  ┌──────────────────┐  ┌──────────────────┐                         │
//! │  │SubmissionPayload │  │   InputOrigin    │                         │
//! │  │  ──────────────  │  │  ──────────────  │                         │
//! │  │  ReceiptId(s)    │  │  Scanned         │                         │
//! │  │  QrCode(s)       │  │  Pasted          │                         │
//! │  │  RawPayload(v)   │  │  Uploaded        │                         │
//! │  └──────────────────┘  └──────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every receipt carries:
//! - `id`: opaque backend identifier (UUID minted by the backend)
//! - `receipt_id`: fiscal-system receipt identifier (human-meaningful)
//!
//! Wire field names are snake_case and match the backend verbatim.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Input Origin
// =============================================================================

/// Where a submission came from.
///
/// The origin decides the scanner lifecycle handling around a submission:
/// only scanned-origin submissions pause the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputOrigin {
    /// Decoded from a camera frame.
    Scanned,
    /// Typed or pasted into the manual entry field.
    Pasted,
    /// Parsed from an uploaded JSON export.
    Uploaded,
}

impl InputOrigin {
    /// Stable lowercase name for log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InputOrigin::Scanned => "scanned",
            InputOrigin::Pasted => "pasted",
            InputOrigin::Uploaded => "uploaded",
        }
    }
}

// =============================================================================
// Submission Payload
// =============================================================================

/// Payload of a receipt submission, exactly one variant populated.
///
/// Serializes to the backend's request shape: one of
/// `{"receipt_id": …}`, `{"qr_code": …}` or `{"payload": …}`. The enum makes
/// the backend's "none or several sources" rejection unrepresentable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPayload {
    /// Literal fiscal receipt identifier.
    ReceiptId(String),
    /// Raw QR-encoded payload, validated by the backend, not here.
    QrCode(String),
    /// Pre-parsed JSON export uploaded by the user.
    #[serde(rename = "payload")]
    RawPayload(serde_json::Value),
}

impl SubmissionPayload {
    /// Wraps a pre-parsed JSON export. Bypasses classification entirely.
    pub fn for_upload(payload: serde_json::Value) -> Self {
        SubmissionPayload::RawPayload(payload)
    }

    /// Stable name of the populated variant, for log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            SubmissionPayload::ReceiptId(_) => "receipt_id",
            SubmissionPayload::QrCode(_) => "qr_code",
            SubmissionPayload::RawPayload(_) => "payload",
        }
    }
}

// =============================================================================
// Receipts
// =============================================================================

/// A receipt as listed by the backend.
///
/// Immutable once received; a later fetch of the same `receipt_id` replaces
/// the value wholesale, it is never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptSummary {
    /// Opaque backend identifier.
    pub id: String,

    /// Fiscal-system receipt identifier.
    pub receipt_id: String,

    /// When the merchant issued the receipt, if the backend parsed it.
    #[ts(type = "string | null")]
    pub issue_date: Option<DateTime<Utc>>,

    /// Merchant name, if the backend parsed it.
    pub merchant_name: Option<String>,

    /// Receipt total, if the backend parsed it.
    pub total_amount: Option<f64>,
}

/// One line item of a parsed receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLineItem {
    /// Backend row identifier.
    pub id: i64,

    /// Item name as printed on the receipt.
    pub name: String,

    /// Quantity; fractional for weighed goods.
    pub quantity: f64,

    /// Unit price, if present on the receipt.
    pub unit_price: Option<f64>,

    /// Line total, if present on the receipt.
    pub total_price: Option<f64>,

    /// Category assigned by the user or a rule.
    pub category: Option<String>,

    /// Category suggested by the backend's categorizer.
    pub suggested_category: Option<String>,
}

/// A receipt with its ordered line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptDetail {
    /// Summary fields, flattened into the same JSON object on the wire.
    #[serde(flatten)]
    pub summary: ReceiptSummary,

    /// Line items in receipt order.
    pub items: Vec<ReceiptLineItem>,
}

impl ReceiptDetail {
    /// Fiscal receipt identifier of this detail.
    pub fn receipt_id(&self) -> &str {
        &self.summary.receipt_id
    }
}

// =============================================================================
// Period Statistics
// =============================================================================

/// A calendar month, the granularity of the statistics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// The current calendar month.
    ///
    /// Captured once at store construction and fixed for the session.
    pub fn current() -> Self {
        let now = Utc::now();
        Period {
            year: now.year(),
            month: now.month(),
        }
    }
}

/// Spending total for one category within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Category totals for one calendar month.
///
/// At most one snapshot per period is cached at a time; a refresh replaces
/// the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodStatistics {
    pub month: u32,
    pub year: i32,

    /// Unordered (category, total) pairs as returned by the backend.
    pub totals: Vec<CategoryTotal>,
}

impl PeriodStatistics {
    /// Sum of all category totals, shown as the period's grand total.
    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|row| row.total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Core domain types used throughout MediPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StockItem     │   │    Receipt      │   │  PaymentMethod  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  receipt_id     │   │  Cash           │       │
//! │  │  batch_no       │   │  lines          │   │  Upi            │       │
//! │  │  expiry_date    │   │  totals         │   │  Card           │       │
//! │  │  unit_price     │   │  payment        │   └─────────────────┘       │
//! │  │  available_stock│   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    TaxRate      │   │  CustomerRef    │                              │
//! │  │  bps (u32)      │   │  id + name only │                              │
//! │  │  1800 = 18%     │   │  (weak ref)     │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (GST on most scheduled medicines here)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Stock Item
// =============================================================================

/// A catalog entry available for sale.
///
/// Owned by the store layer; the ledger only ever consumes an immutable
/// snapshot of one. Prices and stock are frozen into the cart line at
/// add-time, so later catalog changes never rewrite an open cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Unique identifier.
    pub id: String,

    /// Display name shown to the operator and on receipts.
    pub name: String,

    /// Manufacturer batch number.
    pub batch_no: String,

    /// Batch expiry date.
    pub expiry_date: NaiveDate,

    /// Unit price in paise.
    pub unit_price_minor: i64,

    /// Units currently on the shelf.
    pub available_stock: i64,

    /// Therapeutic category (Analgesic, Antibiotic, ...).
    pub category: String,
}

impl StockItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_minor(self.unit_price_minor)
    }

    /// Checks whether any units are available.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.available_stock > 0
    }

    /// Checks whether stock has fallen below the reorder threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.available_stock < threshold
    }

    /// Checks whether the batch expires within `days` of `today`.
    pub fn expires_within(&self, today: NaiveDate, days: i64) -> bool {
        let remaining = self.expiry_date.signed_duration_since(today).num_days();
        remaining <= days
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale is settled.
///
/// `Cash` is the only cash-like method: tendered amount is compared against
/// the rounded grand total and change is returned. `Upi` and `Card` settle
/// the exact grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// UPI transfer.
    Upi,
    /// Card payment on external terminal.
    Card,
}

impl PaymentMethod {
    /// Whether the tendered-versus-rounded-total check applies.
    #[inline]
    pub const fn is_cash_like(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

// =============================================================================
// Customer Reference
// =============================================================================

/// Weak reference to a customer: id and name only, no ownership of the
/// directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Receipt
// =============================================================================

/// A frozen copy of one cart line, as it appears on the printed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub item_id: String,
    pub name: String,
    pub batch_no: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub discount_percent: u32,
    pub line_total: Money,
}

/// Totals block on a receipt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptTotals {
    pub subtotal: Money,
    pub total_discount: Money,
    pub taxable: Money,
    pub tax: Money,
    pub grand_total: Money,
}

/// Payment block on a receipt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayment {
    pub method: PaymentMethod,
    /// Amount the customer handed over (rounded grand total for non-cash).
    pub tendered: Money,
    /// Change returned. Always zero for non-cash.
    pub change: Money,
}

/// A finalized sale record.
///
/// Produced only by checkout; immutable afterwards. Uses the snapshot
/// pattern so the receipt stays stable even if the catalog changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub receipt_id: String,
    /// Human-readable receipt number (demo-grade, time-derived).
    pub receipt_number: String,
    pub lines: Vec<ReceiptLine>,
    pub totals: ReceiptTotals,
    pub payment: ReceiptPayment,
    pub customer: Option<CustomerRef>,
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

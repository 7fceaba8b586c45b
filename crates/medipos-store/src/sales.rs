//! # Sales Log
//!
//! Append-only log of finalized receipts, plus the aggregate numbers the
//! dashboard shows. Receipts are immutable once recorded; the log never
//! rewrites history.

use serde::{Deserialize, Serialize};
use tracing::info;

use medipos_core::{Money, PaymentMethod, Receipt};

use crate::catalog::CatalogRepository;
use crate::customers::CustomerDirectory;

/// Name shown for sales with no customer attached.
pub const WALK_IN: &str = "Walk-in";

/// One recorded sale: the full receipt plus the resolved display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEntry {
    pub receipt: Receipt,
    pub customer_name: String,
}

/// Compact view of a sale for the recent-sales table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    pub receipt_number: String,
    pub customer_name: String,
    pub amount: Money,
    pub method: PaymentMethod,
}

/// Append-only sales log.
#[derive(Debug, Default)]
pub struct SalesLog {
    entries: Vec<SaleEntry>,
}

impl SalesLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        SalesLog {
            entries: Vec::new(),
        }
    }

    /// Records a finalized receipt.
    pub fn record(&mut self, receipt: Receipt) {
        let customer_name = receipt
            .customer
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| WALK_IN.to_string());

        info!(
            receipt_number = %receipt.receipt_number,
            amount = %receipt.totals.grand_total,
            customer = %customer_name,
            "Sale recorded"
        );

        self.entries.push(SaleEntry {
            receipt,
            customer_name,
        });
    }

    /// The `n` most recent sales, newest first.
    pub fn recent(&self, n: usize) -> Vec<SaleSummary> {
        self.entries
            .iter()
            .rev()
            .take(n)
            .map(|e| SaleSummary {
                receipt_number: e.receipt.receipt_number.clone(),
                customer_name: e.customer_name.clone(),
                amount: e.receipt.totals.grand_total,
                method: e.receipt.payment.method,
            })
            .collect()
    }

    /// Number of recorded sales.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Revenue across all recorded sales (sum of grand totals).
    pub fn revenue_total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |acc, e| acc + e.receipt.totals.grand_total)
    }

    /// Full entries, oldest first.
    pub fn entries(&self) -> &[SaleEntry] {
        &self.entries
    }
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// The stat-card numbers on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub revenue: Money,
    pub order_count: usize,
    pub low_stock_count: usize,
    pub customer_count: usize,
}

/// Assembles the dashboard numbers from the three stores.
pub fn dashboard_summary(
    catalog: &CatalogRepository,
    customers: &CustomerDirectory,
    sales: &SalesLog,
    low_stock_threshold: i64,
) -> DashboardSummary {
    DashboardSummary {
        revenue: sales.revenue_total(),
        order_count: sales.count(),
        low_stock_count: catalog.low_stock(low_stock_threshold).len(),
        customer_count: customers.count(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use medipos_core::{
        CustomerRef, ReceiptLine, ReceiptPayment, ReceiptTotals, StockItem,
    };

    fn receipt(number: &str, grand_minor: i64, customer: Option<CustomerRef>) -> Receipt {
        let totals = ReceiptTotals {
            subtotal: Money::from_minor(grand_minor),
            total_discount: Money::zero(),
            taxable: Money::from_minor(grand_minor),
            tax: Money::zero(),
            grand_total: Money::from_minor(grand_minor),
        };
        Receipt {
            receipt_id: number.to_string(),
            receipt_number: number.to_string(),
            lines: vec![ReceiptLine {
                item_id: "1".to_string(),
                name: "Paracetamol 500mg".to_string(),
                batch_no: "B-201".to_string(),
                quantity: 1,
                unit_price: Money::from_minor(grand_minor),
                discount_percent: 0,
                line_total: Money::from_minor(grand_minor),
            }],
            totals,
            payment: ReceiptPayment {
                method: PaymentMethod::Cash,
                tendered: Money::from_minor(grand_minor),
                change: Money::zero(),
            },
            customer,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_and_recent_order() {
        let mut log = SalesLog::new();
        log.record(receipt("INV-001", 45000, None));
        log.record(receipt(
            "INV-002",
            12000,
            Some(CustomerRef {
                id: "c1".to_string(),
                name: "Sarah Connor".to_string(),
            }),
        ));

        let recent = log.recent(5);
        assert_eq!(recent.len(), 2);
        // Newest first.
        assert_eq!(recent[0].receipt_number, "INV-002");
        assert_eq!(recent[0].customer_name, "Sarah Connor");
        assert_eq!(recent[1].customer_name, WALK_IN);
    }

    #[test]
    fn test_revenue_total() {
        let mut log = SalesLog::new();
        log.record(receipt("INV-001", 45000, None));
        log.record(receipt("INV-002", 12000, None));
        assert_eq!(log.revenue_total().minor(), 57000);
        assert_eq!(log.count(), 2);
    }

    #[test]
    fn test_dashboard_summary() {
        let catalog = CatalogRepository::with_items(vec![StockItem {
            id: "1".to_string(),
            name: "Amoxicillin 250mg".to_string(),
            batch_no: "A-992".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            unit_price_minor: 8550,
            available_stock: 45,
            category: "Antibiotic".to_string(),
        }])
        .unwrap();

        let mut customers = CustomerDirectory::new();
        customers.add("Sarah Connor", "9876543210").unwrap();

        let mut sales = SalesLog::new();
        sales.record(receipt("INV-001", 45000, None));

        let summary = dashboard_summary(&catalog, &customers, &sales, 100);
        assert_eq!(summary.revenue.minor(), 45000);
        assert_eq!(summary.order_count, 1);
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.customer_count, 1);
    }
}

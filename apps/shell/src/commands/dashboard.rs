//! # Dashboard Commands
//!
//! The dashboard: stat cards plus the recent-sales table.

use tracing::debug;

use medipos_store::dashboard_summary;

use crate::error::ShellError;
use crate::session::Session;

/// How many recent sales the dashboard shows.
const RECENT_SALES_LIMIT: usize = 5;

/// Renders the dashboard.
pub fn show(session: &Session) -> Result<String, ShellError> {
    debug!("dash command");

    let summary = dashboard_summary(
        &session.catalog,
        &session.customers,
        &session.sales,
        session.config.low_stock_threshold,
    );

    let mut out = format!(
        "=== {} ===\n\n  Revenue          {}\n  Orders           {}\n  \
         Low Stock Items  {}\n  Customers        {}\n",
        session.config.store_name,
        session.config.format_money(summary.revenue),
        summary.order_count,
        summary.low_stock_count,
        summary.customer_count,
    );

    let recent = session.sales.recent(RECENT_SALES_LIMIT);
    if recent.is_empty() {
        out.push_str("\nNo sales in this session yet.\n");
        return Ok(out);
    }

    out.push_str(&format!(
        "\n{:<20} {:<20} {:<8} {:>12}\n",
        "RECEIPT", "CUSTOMER", "MODE", "AMOUNT"
    ));
    for sale in recent {
        out.push_str(&format!(
            "{:<20} {:<20} {:<8} {:>12}\n",
            sale.receipt_number,
            sale.customer_name,
            format!("{:?}", sale.method),
            session.config.format_money(sale.amount),
        ));
    }
    Ok(out)
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Inventory Commands
//!
//! The inventory screen: the full shelf listing with stock status, plus
//! restock and the low-stock / expiring views.

use chrono::Utc;
use tracing::debug;

use medipos_core::StockItem;

use crate::error::ShellError;
use crate::session::Session;

/// Days ahead the expiring view looks.
const EXPIRY_WINDOW_DAYS: i64 = 90;

/// Lists the whole shelf.
pub fn list(session: &Session) -> Result<String, ShellError> {
    debug!("stock command");
    Ok(render_items(session, session.catalog.list().iter().collect()))
}

/// Increases an item's stock level.
pub fn restock(session: &mut Session, item_id: &str, qty: i64) -> Result<String, ShellError> {
    debug!(item_id = %item_id, qty = %qty, "restock command");

    let level = session.catalog.restock(item_id, qty)?;
    Ok(format!("Stock for {} is now {} units.", item_id, level))
}

/// Items below the configured low-stock threshold.
pub fn low_stock(session: &Session) -> Result<String, ShellError> {
    let threshold = session.config.low_stock_threshold;
    let items = session.catalog.low_stock(threshold);
    if items.is_empty() {
        return Ok(format!("No items below {} units.", threshold));
    }
    Ok(render_items(session, items))
}

/// Items whose batch expires within the next 90 days.
pub fn expiring(session: &Session) -> Result<String, ShellError> {
    let today = Utc::now().date_naive();
    let items = session.catalog.expiring_within(today, EXPIRY_WINDOW_DAYS);
    if items.is_empty() {
        return Ok(format!(
            "No batches expiring within {} days.",
            EXPIRY_WINDOW_DAYS
        ));
    }
    Ok(render_items(session, items))
}

fn render_items(session: &Session, items: Vec<&StockItem>) -> String {
    let threshold = session.config.low_stock_threshold;
    let mut out = format!(
        "{:<4} {:<26} {:<8} {:<10} {:>10} {:>7}  {}\n",
        "ID", "NAME", "BATCH", "EXPIRY", "PRICE", "STOCK", "STATUS"
    );
    for item in items {
        let status = if !item.in_stock() {
            "Out of Stock"
        } else if item.is_low_stock(threshold) {
            "Low Stock"
        } else {
            "In Stock"
        };
        out.push_str(&format!(
            "{:<4} {:<26} {:<8} {:<10} {:>10} {:>7}  {}\n",
            item.id,
            item.name,
            item.batch_no,
            item.expiry_date.format("%Y-%m"),
            session.config.format_money(item.unit_price()),
            item.available_stock,
            status,
        ));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

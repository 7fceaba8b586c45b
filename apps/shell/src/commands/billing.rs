//! # Billing Commands
//!
//! The billing screen: catalog search, cart edits, hold/recall, and
//! settlement.
//!
//! ## Billing Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Billing Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Building │────►│   pay    │────►│ Receipt  │       │
//! │  │  Cart    │     │          │     │          │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │ ▲                                              │
//! │                   hold │ │ recall                                       │
//! │                        ▼ │                                              │
//! │                   ┌──────────┐                                          │
//! │                   │   Held   │  (any number of parked tickets)          │
//! │                   └──────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use medipos_core::PaymentMethod;

use crate::config::parse_money;
use crate::error::ShellError;
use crate::session::Session;

/// Searches the catalog by name or batch number.
pub fn find(session: &Session, query: &str) -> Result<String, ShellError> {
    debug!(query = %query, "find command");

    let hits = session.catalog.search(query);
    if hits.is_empty() {
        return Ok(format!("No items matching '{}'.", query.trim()));
    }

    let mut out = format!(
        "{:<4} {:<26} {:<8} {:>10} {:>7}\n",
        "ID", "NAME", "BATCH", "PRICE", "STOCK"
    );
    for item in hits {
        out.push_str(&format!(
            "{:<4} {:<26} {:<8} {:>10} {:>7}\n",
            item.id,
            item.name,
            item.batch_no,
            session.config.format_money(item.unit_price()),
            item.available_stock,
        ));
    }
    Ok(out)
}

/// Adds a catalog item to the cart (default quantity 1).
pub fn add(session: &mut Session, item_id: &str, qty: i64) -> Result<String, ShellError> {
    debug!(item_id = %item_id, qty = %qty, "add command");

    let item = session
        .catalog
        .get(item_id)
        .ok_or_else(|| ShellError::not_found("StockItem", item_id))?
        .clone();

    session.ledger.add_item(&item, qty)?;
    Ok(render_cart(session))
}

/// Sets the quantity of a cart line (clamped by the ledger).
pub fn set_quantity(session: &mut Session, item_id: &str, qty: i64) -> Result<String, ShellError> {
    debug!(item_id = %item_id, qty = %qty, "qty command");
    session.ledger.set_quantity(item_id, qty);
    Ok(render_cart(session))
}

/// Sets the discount percentage of a cart line (clamped by the ledger).
pub fn set_discount(session: &mut Session, item_id: &str, pct: u32) -> Result<String, ShellError> {
    debug!(item_id = %item_id, pct = %pct, "disc command");
    session.ledger.set_discount(item_id, pct);
    Ok(render_cart(session))
}

/// Removes a cart line.
pub fn remove(session: &mut Session, item_id: &str) -> Result<String, ShellError> {
    debug!(item_id = %item_id, "rm command");
    session.ledger.remove_item(item_id);
    Ok(render_cart(session))
}

/// Shows the cart and its totals.
pub fn cart(session: &Session) -> Result<String, ShellError> {
    Ok(render_cart(session))
}

/// Attaches the first customer matching the query to the cart.
pub fn attach_customer(session: &mut Session, query: &str) -> Result<String, ShellError> {
    debug!(query = %query, "customer command");

    let hits = session.customers.search(query);
    let customer = hits
        .first()
        .ok_or_else(|| ShellError::not_found("Customer", query))?;
    let reference = customer.to_ref();
    let name = reference.name.clone();

    session.ledger.set_customer(reference);
    Ok(format!("Customer attached: {}\n{}", name, render_cart(session)))
}

/// Detaches the customer from the cart.
pub fn detach_customer(session: &mut Session) -> Result<String, ShellError> {
    session.ledger.clear_customer();
    Ok("Customer detached.".to_string())
}

/// Parks the active cart as a held ticket.
pub fn hold(session: &mut Session) -> Result<String, ShellError> {
    let ticket_id = session.ledger.hold()?;
    Ok(format!(
        "Bill held as ticket {}. Cart is now empty.",
        short_id(&ticket_id)
    ))
}

/// Lists held tickets, oldest first.
pub fn tickets(session: &Session) -> Result<String, ShellError> {
    let held = session.ledger.held_tickets();
    if held.is_empty() {
        return Ok("No held tickets.".to_string());
    }

    let mut out = format!(
        "{:<10} {:<22} {:>6} {:>12}\n",
        "TICKET", "HELD AT", "LINES", "TOTAL"
    );
    for ticket in held {
        out.push_str(&format!(
            "{:<10} {:<22} {:>6} {:>12}\n",
            short_id(&ticket.id),
            ticket.held_at.format("%Y-%m-%d %H:%M:%S"),
            ticket.cart.line_count(),
            session.config.format_money(ticket.grand_total_at_hold),
        ));
    }
    Ok(out)
}

/// Resumes a held ticket.
///
/// Recalling over a non-empty cart is destructive, so the operator has to
/// confirm by appending `force`. The ledger itself does not enforce this;
/// confirmation is this layer's job.
pub fn recall(session: &mut Session, prefix: &str, force: bool) -> Result<String, ShellError> {
    debug!(prefix = %prefix, force = %force, "recall command");

    if !session.ledger.cart().is_empty() && !force {
        return Ok(format!(
            "Active cart is not empty; recalling replaces it.\n\
             Use 'recall {} force' to confirm.",
            prefix
        ));
    }

    let ticket_id = resolve_ticket(session, prefix)?;
    session.ledger.recall(&ticket_id)?;
    Ok(format!(
        "Ticket {} recalled.\n{}",
        short_id(&ticket_id),
        render_cart(session)
    ))
}

/// Discards a held ticket without recalling it.
pub fn discard(session: &mut Session, prefix: &str) -> Result<String, ShellError> {
    let ticket_id = resolve_ticket(session, prefix)?;
    session.ledger.discard(&ticket_id);
    Ok(format!("Ticket {} discarded.", short_id(&ticket_id)))
}

/// Settles the cart.
///
/// ## Syntax
/// - `pay cash <amount>` - cash with tendered amount in rupees
/// - `pay upi` / `pay card` - exact settlement, no tendered amount
pub fn pay(session: &mut Session, method: &str, amount: Option<&str>) -> Result<String, ShellError> {
    let method = match method.to_lowercase().as_str() {
        "cash" => PaymentMethod::Cash,
        "upi" => PaymentMethod::Upi,
        "card" => PaymentMethod::Card,
        other => {
            return Err(ShellError::usage(format!(
                "Unknown payment method '{}'. Try: cash, upi, card",
                other
            )))
        }
    };

    let tendered = match (method, amount) {
        (PaymentMethod::Cash, Some(raw)) => parse_money(raw)
            .ok_or_else(|| ShellError::usage(format!("'{}' is not an amount", raw)))?,
        (PaymentMethod::Cash, None) => {
            return Err(ShellError::usage("Cash payment needs an amount: pay cash 80"))
        }
        // Non-cash settles exactly; the ledger ignores the tendered input.
        _ => medipos_core::Money::zero(),
    };

    let receipt = session.checkout(tendered, method)?;
    Ok(render_receipt(session, &receipt))
}

/// Reprints the last receipt as pretty JSON.
pub fn last_receipt_json(session: &Session) -> Result<String, ShellError> {
    match &session.last_receipt {
        Some(receipt) => serde_json::to_string_pretty(receipt)
            .map_err(|e| ShellError::usage(format!("Could not serialize receipt: {}", e))),
        None => Ok("No sales in this session yet.".to_string()),
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the cart table with its totals block.
fn render_cart(session: &Session) -> String {
    let cart = session.ledger.cart();
    if cart.is_empty() {
        return "Cart is empty. Use 'find' and 'add' to bill items.".to_string();
    }

    let mut out = format!(
        "{:<4} {:<26} {:<8} {:>10} {:>4} {:>5} {:>12}\n",
        "ID", "ITEM", "BATCH", "PRICE", "QTY", "DISC", "TOTAL"
    );
    for line in &cart.items {
        out.push_str(&format!(
            "{:<4} {:<26} {:<8} {:>10} {:>4} {:>4}% {:>12}\n",
            line.item_id,
            line.name,
            line.batch_no,
            session.config.format_money(line.unit_price),
            line.quantity,
            line.discount_percent,
            session.config.format_money(line.line_total()),
        ));
    }

    if let Some(customer) = &cart.customer {
        out.push_str(&format!("Customer: {}\n", customer.name));
    }

    let totals = session.ledger.totals();
    let rate = session.ledger.tax_rate();
    out.push_str(&format!(
        "\n  Subtotal      {:>12}\n  Discount      {:>12}\n  Taxable       {:>12}\n  \
         GST ({:>4.1}%)   {:>12}\n  GRAND TOTAL   {:>12}\n",
        session.config.format_money(totals.subtotal),
        session.config.format_money(totals.total_discount),
        session.config.format_money(totals.taxable),
        rate.percentage(),
        session.config.format_money(totals.tax),
        session.config.format_money(totals.grand_total),
    ));
    out
}

/// Renders a settled receipt.
fn render_receipt(session: &Session, receipt: &medipos_core::Receipt) -> String {
    let config = &session.config;
    let mut out = format!(
        "=== {} ===\nReceipt {}  {}\n",
        config.store_name,
        receipt.receipt_number,
        receipt.completed_at.format("%Y-%m-%d %H:%M:%S"),
    );

    if let Some(customer) = &receipt.customer {
        out.push_str(&format!("Customer: {}\n", customer.name));
    }

    out.push('\n');
    for line in &receipt.lines {
        out.push_str(&format!(
            "{:<26} x{:<3} {:>10}  {:>3}%  {:>12}\n",
            line.name,
            line.quantity,
            config.format_money(line.unit_price),
            line.discount_percent,
            config.format_money(line.line_total),
        ));
    }

    out.push_str(&format!(
        "\n  Subtotal      {:>12}\n  Discount      {:>12}\n  Tax           {:>12}\n  \
         GRAND TOTAL   {:>12}\n  Paid ({:?})  {:>12}\n  Change        {:>12}\n",
        config.format_money(receipt.totals.subtotal),
        config.format_money(receipt.totals.total_discount),
        config.format_money(receipt.totals.tax),
        config.format_money(receipt.totals.grand_total),
        receipt.payment.method,
        config.format_money(receipt.payment.tendered),
        config.format_money(receipt.payment.change),
    ));
    out
}

/// First 8 characters of a ticket id, enough to recall it by prefix.
fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

/// Resolves a ticket id prefix to the full id.
fn resolve_ticket(session: &Session, prefix: &str) -> Result<String, ShellError> {
    let matches: Vec<&str> = session
        .ledger
        .held_tickets()
        .iter()
        .map(|t| t.id.as_str())
        .filter(|id| id.starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [only] => Ok((*only).to_string()),
        [] => Err(ShellError::new(
            crate::error::ErrorCode::TicketNotFound,
            format!("No held ticket with id {}", prefix),
        )),
        _ => Err(ShellError::usage(format!(
            "Ticket prefix '{}' is ambiguous; give more characters",
            prefix
        ))),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

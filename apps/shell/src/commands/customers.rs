//! # Customer Commands
//!
//! The customer screen: directory listing/search and registration.

use tracing::debug;

use crate::error::ShellError;
use crate::session::Session;

/// Lists the directory, optionally filtered by name or phone.
pub fn list(session: &Session, query: &str) -> Result<String, ShellError> {
    debug!(query = %query, "customers command");

    let hits = session.customers.search(query);
    if hits.is_empty() {
        return Ok(format!("No customers matching '{}'.", query.trim()));
    }

    let mut out = format!(
        "{:<38} {:<16} {:<12} {:>12}\n",
        "NAME", "PHONE", "LAST VISIT", "TOTAL SPENT"
    );
    for customer in hits {
        out.push_str(&format!(
            "{:<38} {:<16} {:<12} {:>12}\n",
            format!("{} ({})", customer.name, &customer.id),
            customer.phone,
            customer
                .last_visit
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            session.config.format_money(customer.total_spent),
        ));
    }
    Ok(out)
}

/// Registers a new customer.
pub fn add(session: &mut Session, phone: &str, name: &str) -> Result<String, ShellError> {
    debug!(name = %name, "newcustomer command");

    let customer = session.customers.add(name, phone)?;
    Ok(format!(
        "Customer registered: {} ({})",
        customer.name, customer.id
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

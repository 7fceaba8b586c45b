//! # Front-Desk Session
//!
//! The owning context for one billing station: the cart ledger, the three
//! stores, and the session configuration, all held by value.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Ownership                               │
//! │                                                                         │
//! │  Session                                                               │
//! │  ├── config:    ShellConfig          (read-only after startup)         │
//! │  ├── ledger:    CartLedger           (active cart + held tickets)      │
//! │  ├── catalog:   CatalogRepository    (stock levels)                    │
//! │  ├── customers: CustomerDirectory                                      │
//! │  ├── sales:     SalesLog                                               │
//! │  └── last_receipt: Option<Receipt>   (for reprint / JSON export)       │
//! │                                                                         │
//! │  Exactly one owner, no globals, no locks: the REPL is single-threaded  │
//! │  and every command runs to completion before the next is read.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use medipos_core::{CartLedger, Money, PaymentMethod, Receipt};
use medipos_store::{seed, CatalogRepository, CustomerDirectory, SalesLog};

use crate::config::ShellConfig;
use crate::error::ShellError;

/// One billing station's state.
#[derive(Debug)]
pub struct Session {
    pub config: ShellConfig,
    pub ledger: CartLedger,
    pub catalog: CatalogRepository,
    pub customers: CustomerDirectory,
    pub sales: SalesLog,
    pub last_receipt: Option<Receipt>,
}

impl Session {
    /// Creates an empty session (no catalog, no customers).
    pub fn new(config: ShellConfig) -> Self {
        let ledger = CartLedger::new(config.tax_rate());
        Session {
            config,
            ledger,
            catalog: CatalogRepository::new(),
            customers: CustomerDirectory::new(),
            sales: SalesLog::new(),
            last_receipt: None,
        }
    }

    /// Creates a session preloaded with the demo dataset.
    pub fn seeded(config: ShellConfig) -> Self {
        let mut session = Session::new(config);
        session.catalog = CatalogRepository::with_items(seed::demo_catalog())
            .expect("demo catalog must pass validation");
        session.customers = CustomerDirectory::with_customers(seed::demo_customers());
        info!(
            items = session.catalog.len(),
            customers = session.customers.count(),
            "Session seeded"
        );
        session
    }

    /// Settles the active cart and applies the post-sale bookkeeping the
    /// ledger itself stays out of: stock deduction, the sales log, and the
    /// customer's visit history.
    pub fn checkout(
        &mut self,
        tendered: Money,
        method: PaymentMethod,
    ) -> Result<Receipt, ShellError> {
        let receipt = self.ledger.checkout(tendered, method)?;

        for line in &receipt.lines {
            // Best effort: an item delisted mid-sale just skips the
            // deduction, the sale itself already settled.
            let _ = self.catalog.deduct(&line.item_id, line.quantity);
        }

        if let Some(customer) = &receipt.customer {
            let _ = self.customers.record_visit(
                &customer.id,
                receipt.totals.grand_total,
                receipt.completed_at.date_naive(),
            );
        }

        info!(
            receipt_number = %receipt.receipt_number,
            grand_total = %receipt.totals.grand_total,
            "Checkout complete"
        );

        self.sales.record(receipt.clone());
        self.last_receipt = Some(receipt.clone());
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

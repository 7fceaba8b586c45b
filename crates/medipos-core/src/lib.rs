//! # medipos-core: Pure Business Logic for MediPOS
//!
//! This crate is the **heart** of MediPOS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MediPOS Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal Front Desk (shell)                    │   │
//! │  │    search ──► cart edits ──► hold/recall ──► pay ──► receipt   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain data in / plain data out         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ medipos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│  │   │
//! │  │   │ StockItem │  │   Money   │  │CartLedger │  │   rules   │  │   │
//! │  │   │  Receipt  │  │  TaxRate  │  │HeldTicket │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              medipos-store (In-Memory Data Layer)               │   │
//! │  │           Catalog, customer directory, sales log                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StockItem, Receipt, PaymentMethod, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - The cart ledger: active cart, held tickets, checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog/directory input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input =
//!    same output, and totals are always recomputed, never cached
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All failures are typed results, never panics
//! 5. **Clamp, Don't Reject**: Cart quantity/discount bounds silently
//!    correct out-of-range input instead of erroring
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use medipos_core::ledger::CartLedger;
//! use medipos_core::money::Money;
//! use medipos_core::types::{PaymentMethod, StockItem, TaxRate};
//!
//! let paracetamol = StockItem {
//!     id: "1".to_string(),
//!     name: "Paracetamol 500mg".to_string(),
//!     batch_no: "B-201".to_string(),
//!     expiry_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
//!     unit_price_minor: 2500, // ₹25.00
//!     available_stock: 1500,
//!     category: "Analgesic".to_string(),
//! };
//!
//! let mut ledger = CartLedger::new(TaxRate::from_bps(1800)); // 18% GST
//! ledger.add_item(&paracetamol, 3)?;
//! ledger.set_discount("1", 10);
//!
//! let totals = ledger.totals();
//! assert_eq!(totals.taxable.minor(), 6750); // ₹67.50
//!
//! let receipt = ledger.checkout(Money::from_minor(8000), PaymentMethod::Cash)?;
//! assert_eq!(receipt.payment.change.minor(), 0);
//! # Ok::<(), medipos_core::error::LedgerError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use medipos_core::Money` instead of
// `use medipos_core::money::Money`

pub use error::{LedgerError, LedgerResult, ValidationError};
pub use ledger::{Cart, CartLedger, HeldTicket, LineItem, Totals};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tax rate in basis points (18% GST).
///
/// The shell can override this per session; the constant only seeds the
/// default configuration.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1800;

/// Stock level below which an item counts as low stock on the dashboard
/// and the inventory screen.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 100;

//! # medipos-store: In-Memory Data Layer for MediPOS
//!
//! Owns the session's data: stock catalog, customer directory, and sales
//! log. All of it lives in process memory; persistence is explicitly out of
//! scope for this system, so there is no database, no files, and nothing to
//! migrate. A fresh session boots from the demo seed.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern, In Memory                        │
//! │                                                                         │
//! │  Shell command                                                         │
//! │       │                                                                 │
//! │       │  catalog.search("para")                                        │
//! │       ▼                                                                 │
//! │  CatalogRepository                                                     │
//! │  ├── search(&self, query)                                              │
//! │  ├── get(&self, id)                                                    │
//! │  ├── restock(&mut self, id, qty)                                       │
//! │  └── deduct(&mut self, id, qty)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<StockItem> (plain owned data, no locks, no pool)                  │
//! │                                                                         │
//! │  The session owns each repository by value; there is exactly one       │
//! │  owner and no shared mutable state.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Stock catalog: search, stock levels, inventory views
//! - [`customers`] - Customer directory
//! - [`sales`] - Sales log and dashboard summary
//! - [`seed`] - Demo dataset
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customers;
pub mod error;
pub mod sales;
pub mod seed;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::CatalogRepository;
pub use customers::{Customer, CustomerDirectory};
pub use error::{StoreError, StoreResult};
pub use sales::{dashboard_summary, DashboardSummary, SaleEntry, SaleSummary, SalesLog, WALK_IN};

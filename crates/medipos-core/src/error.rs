//! # Error Types
//!
//! Domain-specific error types for medipos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medipos-core errors (this file)                                       │
//! │  ├── LedgerError      - Cart ledger rule violations                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  medipos-store errors (separate crate)                                 │
//! │  └── StoreError       - Catalog/directory operation failures           │
//! │                                                                         │
//! │  Shell errors (in app)                                                 │
//! │  └── ShellError       - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ShellError → terminal            │
//! │        LedgerError ──────────────────► ShellError → terminal           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, amounts, ids)
//! 3. Errors are enum variants, never String
//! 4. All ledger errors are non-fatal and locally recoverable: the caller
//!    gets a failure value back and the ledger state is left untouched
//!
//! Note that the ledger's clamp policies (quantity and discount bounds) are
//! NOT errors. Out-of-range input is silently corrected into range; that is
//! a deliberate data-entry decision, not a missing validation.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Ledger Error
// =============================================================================

/// Cart ledger rule violations.
///
/// Every variant is recoverable: the presentation layer decides how to
/// surface it (inline message, disabled button) and the ledger state is
/// unchanged by the failed call.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Add attempted on an item with zero available stock.
    #[error("No stock available for {name}")]
    OutOfStock { name: String },

    /// Hold or checkout attempted with no line items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Recall or discard referenced a nonexistent held ticket.
    #[error("No held ticket with id {0}")]
    TicketNotFound(String),

    /// Cash tendered below the rounded grand total.
    ///
    /// ## When This Occurs
    /// ```text
    /// Checkout (cash, tendered: ₹79.00)
    ///      │
    ///      ▼
    /// grand total ₹79.65 → rounds to ₹80.00
    ///      │
    ///      ▼
    /// InsufficientPayment { required: 80.00, tendered: 79.00 }
    /// ```
    #[error("Insufficient payment: required {required}, tendered {tendered}")]
    InsufficientPayment { required: Money, tendered: Money },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when catalog or directory input doesn't meet requirements.
/// Used by the store layer before data enters the system.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad phone number, bad batch code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate item id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

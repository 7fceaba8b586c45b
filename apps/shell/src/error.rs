//! # Shell Error Type
//!
//! Unified error type for front-desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MediPOS                                │
//! │                                                                         │
//! │  Command handler                                                       │
//! │  Result<String, ShellError>                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ledger rule broken? ── LedgerError::OutOfStock ──┐                    │
//! │         │                                         │                    │
//! │         ▼                                         ▼                    │
//! │  Store lookup failed? ── StoreError::NotFound ── ShellError ──► REPL   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──► rendered text ───────────────────────────────────► REPL   │
//! │                                                                         │
//! │  The REPL prints either the rendered text or "[CODE] message" and      │
//! │  reads the next command; no error ends the session.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use medipos_core::LedgerError;
use medipos_store::StoreError;

/// Error returned from front-desk commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Add attempted on an item with no stock
    OutOfStock,

    /// Hold/checkout attempted on an empty cart
    EmptyCart,

    /// Recall/discard of an unknown held ticket
    TicketNotFound,

    /// Cash tendered below the rounded grand total
    InsufficientPayment,

    /// Command was malformed (bad arguments)
    Usage,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ShellError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error (malformed command input).
    pub fn usage(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::Usage, message)
    }

    /// Creates a not-found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ShellError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }
}

/// Converts ledger errors, keeping the failure kind machine-readable so the
/// REPL could color or group them later.
impl From<LedgerError> for ShellError {
    fn from(err: LedgerError) -> Self {
        let code = match err {
            LedgerError::OutOfStock { .. } => ErrorCode::OutOfStock,
            LedgerError::EmptyCart => ErrorCode::EmptyCart,
            LedgerError::TicketNotFound(_) => ErrorCode::TicketNotFound,
            LedgerError::InsufficientPayment { .. } => ErrorCode::InsufficientPayment,
        };
        ShellError::new(code, err.to_string())
    }
}

/// Converts store errors.
impl From<StoreError> for ShellError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { ref entity, ref id } => {
                ShellError::not_found(entity, id)
            }
            StoreError::Validation(e) => {
                ShellError::new(ErrorCode::ValidationError, e.to_string())
            }
        }
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ShellError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use medipos_core::Money;

    #[test]
    fn test_ledger_error_mapping() {
        let err: ShellError = LedgerError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Cart is empty");

        let err: ShellError = LedgerError::InsufficientPayment {
            required: Money::from_minor(8000),
            tendered: Money::from_minor(7900),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientPayment);
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ShellError = StoreError::NotFound {
            entity: "StockItem".to_string(),
            id: "42".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "StockItem not found: 42");
    }

    #[test]
    fn test_display_includes_code() {
        let err = ShellError::usage("try: add <item-id> [qty]");
        assert_eq!(err.to_string(), "[Usage] try: add <item-id> [qty]");
    }
}

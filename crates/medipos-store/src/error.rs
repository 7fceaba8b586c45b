//! # Store Error Types
//!
//! Error types for catalog, directory, and sales-log operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (medipos-core)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds entity/id context                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ShellError (in the app) ← Rendered for the operator                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use medipos_core::ValidationError;

/// Data-layer operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Catalog lookup by unknown item id
    /// - Directory lookup by unknown customer id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input failed field validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Input validation for catalog and directory data.
//!
//! ## Scope
//! These validators guard data entering the system: new stock items and
//! customer records. They are NOT used for cart quantity/discount edits;
//! those are governed by the ledger's clamp policy (silent correction into
//! range), which is a different, deliberate rule.
//!
//! ## Usage
//! ```rust
//! use medipos_core::validation::{validate_item_name, validate_price_minor};
//!
//! validate_item_name("Paracetamol 500mg").unwrap();
//! validate_price_minor(2500).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a manufacturer batch number.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters and hyphens (e.g., "B-201")
pub fn validate_batch_no(batch_no: &str) -> ValidationResult<()> {
    let batch_no = batch_no.trim();

    if batch_no.is_empty() {
        return Err(ValidationError::Required {
            field: "batch_no".to_string(),
        });
    }

    if batch_no.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "batch_no".to_string(),
            max: 50,
        });
    }

    if !batch_no.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "batch_no".to_string(),
            reason: "must contain only letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer display name.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates a customer phone number.
///
/// ## Rules
/// - Must not be empty
/// - 6 to 15 characters of digits, with an optional leading `+`
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() < 6 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be 6-15 digits with an optional leading +".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_minor(minor: i64) -> ValidationResult<()> {
    if minor < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero means out of stock, not invalid
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Paracetamol 500mg").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_batch_no() {
        assert!(validate_batch_no("B-201").is_ok());
        assert!(validate_batch_no("A992").is_ok());
        assert!(validate_batch_no("").is_err());
        assert!(validate_batch_no("has space").is_err());
        assert!(validate_batch_no(&"B".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("98-76-54").is_err());
    }

    #[test]
    fn test_validate_price_minor() {
        assert!(validate_price_minor(0).is_ok());
        assert!(validate_price_minor(2500).is_ok());
        assert!(validate_price_minor(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(1500).is_ok());
        assert!(validate_stock(-5).is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Sarah Connor").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name(&"x".repeat(200)).is_err());
    }
}

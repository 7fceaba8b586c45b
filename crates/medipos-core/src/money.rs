//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    ₹10.00 / 3 = ₹3.33 (×3 = ₹9.99)  → Lost ₹0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    1000 paise / 3 = 333 paise (×3 = 999 paise)                         │
//! │    We KNOW we lost 1 paisa, and handle it explicitly                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medipos_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_minor(2500); // ₹25.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                    // ₹50.00
//! let total = price + Money::from_minor(500); // ₹30.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(25.00); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// StockItem.unit_price_minor ──► LineItem.unit_price ──► LineItem.line_total()
///                                                              │
/// Totals: subtotal ─► discount ─► taxable ─► tax ─► grand_total┘
///                                                       │
///                                round_to_unit() ─► payment check / change
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit (paise).
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let price = Money::from_minor(2500); // Represents ₹25.00
    /// assert_eq!(price.minor(), 2500);
    /// ```
    ///
    /// ## Why Paise?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Calculations and the ledger all use paise. Only the shell converts
    /// to rupees for display.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units (rupees and paise).
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let price = Money::from_major_minor(85, 50); // ₹85.50
    /// assert_eq!(price.minor(), 8550);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -₹5.50 (refund)
    /// assert_eq!(negative.minor(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -₹5.50, not -₹4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in the smallest currency unit (paise).
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paise) portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates the tax amount at the given rate, rounded half-up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    /// use medipos_core::types::TaxRate;
    ///
    /// let taxable = Money::from_minor(6750); // ₹67.50
    /// let rate = TaxRate::from_bps(1800);    // 18% GST
    ///
    /// let tax = taxable.tax(rate);
    /// // ₹67.50 × 18% = ₹12.15
    /// assert_eq!(tax.minor(), 1215);
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 1800 = 18%
        let tax_minor = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_minor(tax_minor as i64)
    }

    /// Calculates the discount amount for an integer percentage, rounded
    /// half-up.
    ///
    /// ## Arguments
    /// * `percent` - Discount percentage (10 = 10%); callers clamp to 0-100
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let gross = Money::from_minor(7500); // ₹75.00
    /// let off = gross.discount_part(10);   // 10% off
    /// assert_eq!(off.minor(), 750);        // ₹7.50
    /// ```
    pub fn discount_part(&self, percent: u32) -> Money {
        let discount_minor = (self.0 as i128 * percent as i128 + 50) / 100;
        Money::from_minor(discount_minor as i64)
    }

    /// Rounds half-up to the nearest whole currency unit (rupee).
    ///
    /// Used only at the payment boundary: the cash-sufficiency comparison
    /// and change computation. Line and cart totals keep full paise
    /// precision.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(7965).round_to_unit().minor(), 8000);
    /// assert_eq!(Money::from_minor(7949).round_to_unit().minor(), 7900);
    /// assert_eq!(Money::from_minor(7950).round_to_unit().minor(), 8000);
    /// ```
    pub fn round_to_unit(&self) -> Money {
        // Grand totals are non-negative; the negative branch keeps the
        // operation total anyway.
        let rounded = if self.0 >= 0 {
            (self.0 + 50) / 100 * 100
        } else {
            -((-self.0 + 50) / 100 * 100)
        };
        Money(rounded)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(2500); // ₹25.00
    /// let line_gross = unit_price.multiply_quantity(3);
    /// assert_eq!(line_gross.minor(), 7500);     // ₹75.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use the shell's config-aware formatter for actual
/// display to handle the currency symbol properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(2599);
        assert_eq!(money.minor(), 2599);
        assert_eq!(money.major_part(), 25);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(85, 50);
        assert_eq!(money.minor(), 8550);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.minor(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(2550)), "25.50");
        assert_eq!(format!("{}", Money::from_minor(500)), "5.00");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_minor(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        let result: Money = a * 3;
        assert_eq!(result.minor(), 3000);
    }

    #[test]
    fn test_tax_basic() {
        // ₹10.00 at 10% = ₹1.00
        let amount = Money::from_minor(1000);
        let rate = TaxRate::from_bps(1000); // 10%
        assert_eq!(amount.tax(rate).minor(), 100);
    }

    #[test]
    fn test_tax_with_rounding() {
        // ₹67.50 at 18% = ₹12.15 exactly
        let amount = Money::from_minor(6750);
        assert_eq!(amount.tax(TaxRate::from_bps(1800)).minor(), 1215);

        // ₹0.03 at 18% = 0.0054 → rounds up to ₹0.01
        let tiny = Money::from_minor(3);
        assert_eq!(tiny.tax(TaxRate::from_bps(1800)).minor(), 1);
    }

    #[test]
    fn test_discount_part() {
        let gross = Money::from_minor(7500);
        assert_eq!(gross.discount_part(10).minor(), 750);
        assert_eq!(gross.discount_part(0).minor(), 0);
        assert_eq!(gross.discount_part(100).minor(), 7500);

        // Half-up rounding: 5 paise at 10% = 0.5 → 1
        assert_eq!(Money::from_minor(5).discount_part(10).minor(), 1);
    }

    #[test]
    fn test_round_to_unit() {
        assert_eq!(Money::from_minor(7965).round_to_unit().minor(), 8000);
        assert_eq!(Money::from_minor(7950).round_to_unit().minor(), 8000);
        assert_eq!(Money::from_minor(7949).round_to_unit().minor(), 7900);
        assert_eq!(Money::from_minor(0).round_to_unit().minor(), 0);
        assert_eq!(Money::from_minor(-150).round_to_unit().minor(), -200);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(2500);
        assert_eq!(unit_price.multiply_quantity(3).minor(), 7500);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_minor(100);
        assert!(positive.is_positive());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().minor(), 100);
    }

    /// Documents the intentional precision loss on integer division.
    #[test]
    fn test_division_precision_loss_documented() {
        let ten_rupees = Money::from_minor(1000);
        let one_third = Money::from_minor(1000 / 3); // 333 paise
        let reconstructed: Money = one_third * 3; // 999 paise

        assert_eq!(reconstructed.minor(), 999);
        assert_eq!((ten_rupees - reconstructed).minor(), 1);
    }
}

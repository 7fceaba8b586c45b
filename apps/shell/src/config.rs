//! # Shell Configuration
//!
//! Configuration for one front-desk session.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`, `--tax-rate`, ...)
//! 2. Environment variables (`MEDIPOS_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup; there is no hot reload.

use medipos_core::types::TaxRate;
use medipos_core::{Money, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_TAX_RATE_BPS};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Store name shown in the banner and on receipts.
    pub store_name: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Tax rate in basis points (1800 = 18% GST).
    pub tax_rate_bps: u32,

    /// Stock level below which an item counts as low stock.
    pub low_stock_threshold: i64,
}

impl Default for ShellConfig {
    /// Defaults suitable for the demo dataset.
    fn default() -> Self {
        ShellConfig {
            store_name: "MediPOS Pharmacy".to_string(),
            currency_symbol: "₹".to_string(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ShellConfig {
    /// Creates a configuration from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `MEDIPOS_STORE_NAME`: Override store name
    /// - `MEDIPOS_CURRENCY_SYMBOL`: Override currency symbol
    /// - `MEDIPOS_TAX_RATE`: Override tax rate as a percentage (e.g., "18")
    /// - `MEDIPOS_LOW_STOCK_THRESHOLD`: Override low-stock threshold
    pub fn from_env() -> Self {
        let mut config = ShellConfig::default();

        if let Ok(store_name) = std::env::var("MEDIPOS_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("MEDIPOS_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(rate_str) = std::env::var("MEDIPOS_TAX_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.tax_rate_bps = TaxRate::from_percentage(rate).bps();
            }
        }

        if let Ok(threshold_str) = std::env::var("MEDIPOS_LOW_STOCK_THRESHOLD") {
            if let Ok(threshold) = threshold_str.parse::<i64>() {
                config.low_stock_threshold = threshold;
            }
        }

        config
    }

    /// The session tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats a money amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ShellConfig::default();
    /// assert_eq!(config.format_money(Money::from_minor(7965)), "₹79.65");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major_part().abs(),
            amount.minor_part()
        )
    }
}

/// Parses operator money input ("80", "79.65") into minor units.
///
/// String arithmetic only; running the input through a float would defeat
/// the integer-money design. At most two fraction digits are accepted.
pub fn parse_money(input: &str) -> Option<Money> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('-') {
        return None;
    }

    let (major_str, frac_str) = match input.split_once('.') {
        Some((major, frac)) => (major, frac),
        None => (input, ""),
    };

    if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac_str.len() > 2 || !frac_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let major: i64 = major_str.parse().ok()?;
    let minor: i64 = if frac_str.is_empty() {
        0
    } else if frac_str.len() == 1 {
        frac_str.parse::<i64>().ok()? * 10
    } else {
        frac_str.parse().ok()?
    };

    Some(Money::from_major_minor(major, minor))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        let config = ShellConfig::default();
        assert_eq!(config.format_money(Money::from_minor(7965)), "₹79.65");
        assert_eq!(config.format_money(Money::from_minor(100)), "₹1.00");
        assert_eq!(config.format_money(Money::from_minor(5)), "₹0.05");
        assert_eq!(config.format_money(Money::from_minor(-550)), "-₹5.50");
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("80"), Some(Money::from_minor(8000)));
        assert_eq!(parse_money("79.65"), Some(Money::from_minor(7965)));
        assert_eq!(parse_money("79.6"), Some(Money::from_minor(7960)));
        assert_eq!(parse_money("0.05"), Some(Money::from_minor(5)));
        assert_eq!(parse_money(" 12.00 "), Some(Money::from_minor(1200)));
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("-5"), None);
        assert_eq!(parse_money("12.345"), None);
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money("1.2.3"), None);
        assert_eq!(parse_money(".50"), None);
    }

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.tax_rate_bps, 1800);
        assert_eq!(config.low_stock_threshold, 100);
        assert_eq!(config.tax_rate().bps(), 1800);
    }
}

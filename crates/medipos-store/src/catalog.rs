//! # Catalog Repository
//!
//! In-memory stock catalog with search, stock adjustments, and the
//! inventory views the dashboard and inventory screens read.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Catalog Search Works                             │
//! │                                                                         │
//! │  Operator types: "para"                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive substring match across: name, batch number           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ Paracetamol 500mg | B-201 | ₹25.00     │ ← MATCH (name)            │
//! │  │ Pantoprazole 40mg | P-998 | ₹95.00     │                           │
//! │  │ Amoxicillin 250mg | A-992 | ₹85.50     │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  An empty query returns no results; the billing screen only shows      │
//! │  suggestions once the operator starts typing.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::debug;

use medipos_core::validation::{
    validate_batch_no, validate_item_name, validate_price_minor, validate_stock,
};
use medipos_core::{StockItem, ValidationError};

use crate::error::{StoreError, StoreResult};

/// Repository for the stock catalog.
///
/// Vec-backed: the demo dataset is small and insertion order doubles as
/// the display order of the inventory screen.
///
/// ## Usage
/// ```rust
/// use medipos_store::CatalogRepository;
/// use medipos_store::seed;
///
/// let catalog = CatalogRepository::with_items(seed::demo_catalog()).unwrap();
/// let hits = catalog.search("para");
/// assert_eq!(hits[0].name, "Paracetamol 500mg");
/// ```
#[derive(Debug, Default)]
pub struct CatalogRepository {
    items: Vec<StockItem>,
}

impl CatalogRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogRepository { items: Vec::new() }
    }

    /// Creates a catalog from a batch of items, validating each.
    pub fn with_items(items: Vec<StockItem>) -> StoreResult<Self> {
        let mut catalog = CatalogRepository::new();
        for item in items {
            catalog.add(item)?;
        }
        Ok(catalog)
    }

    /// Adds an item to the catalog.
    ///
    /// ## Rules
    /// - Name, batch number, price, and stock must pass field validation
    /// - Item ids are unique; adding a duplicate id is rejected
    pub fn add(&mut self, item: StockItem) -> StoreResult<()> {
        validate_item_name(&item.name)?;
        validate_batch_no(&item.batch_no)?;
        validate_price_minor(item.unit_price_minor)?;
        validate_stock(item.available_stock)?;

        if self.items.iter().any(|i| i.id == item.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.clone(),
            }
            .into());
        }

        debug!(item_id = %item.id, name = %item.name, "Catalog item added");
        self.items.push(item);
        Ok(())
    }

    /// Searches by name or batch number, case-insensitively.
    ///
    /// An empty or whitespace query returns no results.
    pub fn search(&self, query: &str) -> Vec<&StockItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        debug!(query = %query, "Searching catalog");

        self.items
            .iter()
            .filter(|i| {
                i.name.to_lowercase().contains(&query)
                    || i.batch_no.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&StockItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All items, in insertion order.
    pub fn list(&self) -> &[StockItem] {
        &self.items
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Increases an item's stock level.
    ///
    /// ## Returns
    /// The new stock level.
    pub fn restock(&mut self, id: &str, qty: i64) -> StoreResult<i64> {
        let item = self.get_mut(id)?;
        item.available_stock += qty.max(0);
        debug!(item_id = %id, stock = item.available_stock, "Item restocked");
        Ok(item.available_stock)
    }

    /// Decreases an item's stock level after a sale, saturating at zero.
    ///
    /// The cart ledger works on read-only snapshots and can be slightly
    /// stale against the live level; saturating keeps the shelf count
    /// non-negative regardless.
    ///
    /// ## Returns
    /// The new stock level.
    pub fn deduct(&mut self, id: &str, qty: i64) -> StoreResult<i64> {
        let item = self.get_mut(id)?;
        item.available_stock = (item.available_stock - qty.max(0)).max(0);
        debug!(item_id = %id, stock = item.available_stock, "Stock deducted");
        Ok(item.available_stock)
    }

    /// Items below the low-stock threshold.
    pub fn low_stock(&self, threshold: i64) -> Vec<&StockItem> {
        self.items
            .iter()
            .filter(|i| i.is_low_stock(threshold))
            .collect()
    }

    /// Items whose batch expires within `days` of `today`.
    pub fn expiring_within(&self, today: NaiveDate, days: i64) -> Vec<&StockItem> {
        self.items
            .iter()
            .filter(|i| i.expires_within(today, days))
            .collect()
    }

    fn get_mut(&mut self, id: &str) -> StoreResult<&mut StockItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "StockItem".to_string(),
                id: id.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, batch: &str, stock: i64) -> StockItem {
        StockItem {
            id: id.to_string(),
            name: name.to_string(),
            batch_no: batch.to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            unit_price_minor: 2500,
            available_stock: stock,
            category: "General".to_string(),
        }
    }

    fn catalog() -> CatalogRepository {
        CatalogRepository::with_items(vec![
            item("1", "Paracetamol 500mg", "B-201", 1500),
            item("2", "Amoxicillin 250mg", "A-992", 45),
            item("3", "Pantoprazole 40mg", "P-998", 1200),
        ])
        .unwrap()
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.search("PARA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_search_by_batch() {
        let catalog = catalog();
        let hits = catalog.search("a-992");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amoxicillin 250mg");
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        let catalog = catalog();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = catalog();
        let err = catalog.add(item("1", "Other", "X-1", 10)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_add_rejects_invalid_fields() {
        let mut catalog = CatalogRepository::new();
        assert!(catalog.add(item("1", "", "B-1", 10)).is_err());
        assert!(catalog.add(item("2", "Ok Name", "bad batch", 10)).is_err());

        let mut negative = item("3", "Ok Name", "B-3", 10);
        negative.unit_price_minor = -5;
        assert!(catalog.add(negative).is_err());
    }

    #[test]
    fn test_restock_and_deduct() {
        let mut catalog = catalog();

        assert_eq!(catalog.restock("2", 55).unwrap(), 100);
        assert_eq!(catalog.deduct("2", 30).unwrap(), 70);

        // Deduct saturates at zero.
        assert_eq!(catalog.deduct("2", 1000).unwrap(), 0);

        assert!(matches!(
            catalog.deduct("missing", 1),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_low_stock() {
        let catalog = catalog();
        let low = catalog.low_stock(100);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "2");
    }

    #[test]
    fn test_expiring_within() {
        let mut catalog = CatalogRepository::new();
        let mut soon = item("1", "Ibuprofen 400mg", "I-883", 320);
        soon.expiry_date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let mut later = item("2", "Vitamin C 500mg", "V-221", 50);
        later.expiry_date = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();
        catalog.add(soon).unwrap();
        catalog.add(later).unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let expiring = catalog.expiring_within(today, 90);
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].id, "1");
    }
}

//! # Customer Directory
//!
//! In-memory directory of regular customers: lookup for the billing screen
//! (attaching a customer to a sale) and the customer management screen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use medipos_core::validation::{validate_customer_name, validate_phone};
use medipos_core::{CustomerRef, Money};

use crate::error::{StoreError, StoreResult};

/// A directory record for a returning customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4 for new records).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Date of the most recent purchase, if any.
    pub last_visit: Option<NaiveDate>,

    /// Lifetime spend across recorded sales.
    pub total_spent: Money,
}

impl Customer {
    /// The weak reference a cart carries: id and name only.
    pub fn to_ref(&self) -> CustomerRef {
        CustomerRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Repository for customer records.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        CustomerDirectory {
            customers: Vec::new(),
        }
    }

    /// Creates a directory from a batch of existing records.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        CustomerDirectory { customers }
    }

    /// Registers a new customer with a generated id.
    ///
    /// ## Returns
    /// The stored record, including its new id.
    pub fn add(&mut self, name: &str, phone: &str) -> StoreResult<Customer> {
        validate_customer_name(name)?;
        validate_phone(phone)?;

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            last_visit: None,
            total_spent: Money::zero(),
        };

        debug!(customer_id = %customer.id, name = %customer.name, "Customer added");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Looks up a customer by id.
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Searches by name or phone, case-insensitively.
    ///
    /// An empty query returns the whole directory, the way the customer
    /// screen lists everyone until a filter is typed.
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.customers.iter().collect();
        }

        self.customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query) || c.phone.contains(&query))
            .collect()
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.customers.len()
    }

    /// Updates a customer's contact details.
    pub fn update_contact(&mut self, id: &str, name: &str, phone: &str) -> StoreResult<()> {
        validate_customer_name(name)?;
        validate_phone(phone)?;

        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Customer".to_string(),
                id: id.to_string(),
            })?;

        customer.name = name.trim().to_string();
        customer.phone = phone.trim().to_string();
        debug!(customer_id = %id, "Customer updated");
        Ok(())
    }

    /// Records a completed purchase against a customer: bumps lifetime
    /// spend and the last-visit date.
    pub fn record_visit(&mut self, id: &str, amount: Money, when: NaiveDate) -> StoreResult<()> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Customer".to_string(),
                id: id.to_string(),
            })?;

        customer.total_spent += amount;
        customer.last_visit = Some(when);
        debug!(customer_id = %id, spent = %customer.total_spent, "Visit recorded");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> CustomerDirectory {
        let mut dir = CustomerDirectory::new();
        dir.add("Sarah Connor", "9876543210").unwrap();
        dir.add("John Smith", "8765432109").unwrap();
        dir
    }

    #[test]
    fn test_add_and_get() {
        let mut dir = CustomerDirectory::new();
        let customer = dir.add("Emily Blunt", "7654321098").unwrap();

        let found = dir.get(&customer.id).unwrap();
        assert_eq!(found.name, "Emily Blunt");
        assert!(found.total_spent.is_zero());
        assert!(found.last_visit.is_none());
    }

    #[test]
    fn test_add_validates_input() {
        let mut dir = CustomerDirectory::new();
        assert!(dir.add("", "9876543210").is_err());
        assert!(dir.add("Valid Name", "not-a-phone").is_err());
        assert_eq!(dir.count(), 0);
    }

    #[test]
    fn test_search_by_name_and_phone() {
        let dir = directory();

        let by_name = dir.search("sarah");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Sarah Connor");

        let by_phone = dir.search("876543");
        assert_eq!(by_phone.len(), 2);

        // Empty query lists everyone.
        assert_eq!(dir.search("").len(), 2);
    }

    #[test]
    fn test_update_contact() {
        let mut dir = directory();
        let id = dir.list()[0].id.clone();

        dir.update_contact(&id, "Sarah O'Connor", "9000000001").unwrap();
        let customer = dir.get(&id).unwrap();
        assert_eq!(customer.name, "Sarah O'Connor");
        assert_eq!(customer.phone, "9000000001");

        assert!(dir.update_contact(&id, "", "9000000001").is_err());
        assert!(matches!(
            dir.update_contact("missing", "Name", "9000000001"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_record_visit_accumulates() {
        let mut dir = directory();
        let id = dir.list()[0].id.clone();
        let day1 = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();

        dir.record_visit(&id, Money::from_minor(45000), day1).unwrap();
        dir.record_visit(&id, Money::from_minor(12000), day2).unwrap();

        let customer = dir.get(&id).unwrap();
        assert_eq!(customer.total_spent.minor(), 57000);
        assert_eq!(customer.last_visit, Some(day2));
    }

    #[test]
    fn test_record_visit_unknown_customer() {
        let mut dir = directory();
        let err = dir
            .record_visit("missing", Money::from_minor(100), NaiveDate::MIN)
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_to_ref_carries_id_and_name_only() {
        let dir = directory();
        let reference = dir.list()[0].to_ref();
        assert_eq!(reference.name, "Sarah Connor");
        assert_eq!(reference.id, dir.list()[0].id);
    }
}

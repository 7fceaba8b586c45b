//! # Demo Seed Data
//!
//! The demo dataset the shell boots with: a small pharmacy shelf and a few
//! regular customers. Nothing here is persisted; a fresh session always
//! starts from this state.

use chrono::NaiveDate;

use medipos_core::{Money, StockItem};

use crate::customers::Customer;

fn item(
    id: &str,
    name: &str,
    batch_no: &str,
    expiry: (i32, u32),
    stock: i64,
    price_minor: i64,
    category: &str,
) -> StockItem {
    let (year, month) = expiry;
    StockItem {
        id: id.to_string(),
        name: name.to_string(),
        batch_no: batch_no.to_string(),
        // Batch expiries are tracked to the month; first of the month is
        // the conservative end date.
        expiry_date: NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap_or(NaiveDate::MAX),
        unit_price_minor: price_minor,
        available_stock: stock,
        category: category.to_string(),
    }
}

/// The demo shelf: eight items across the usual categories.
pub fn demo_catalog() -> Vec<StockItem> {
    vec![
        item("1", "Paracetamol 500mg", "B-201", (2026, 12), 1500, 2500, "Analgesic"),
        item("2", "Amoxicillin 250mg", "A-992", (2026, 8), 45, 8550, "Antibiotic"),
        item("3", "Cetirizine 10mg", "C-112", (2027, 3), 800, 3500, "Antihistamine"),
        item("4", "Ibuprofen 400mg", "I-883", (2026, 10), 320, 4200, "NSAID"),
        item("5", "Vitamin C 500mg", "V-221", (2027, 6), 50, 12000, "Supplement"),
        item("6", "Metformin 500mg", "M-554", (2026, 11), 600, 1800, "Antidiabetic"),
        item("7", "Atorvastatin 10mg", "A-123", (2027, 1), 200, 14500, "Cardiovascular"),
        item("8", "Pantoprazole 40mg", "P-998", (2026, 9), 1200, 9500, "Antacid"),
    ]
}

/// The demo customer directory.
pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "c-1".to_string(),
            name: "Sarah Connor".to_string(),
            phone: "9876543210".to_string(),
            last_visit: NaiveDate::from_ymd_opt(2026, 7, 25),
            total_spent: Money::from_minor(450_000),
        },
        Customer {
            id: "c-2".to_string(),
            name: "John Smith".to_string(),
            phone: "8765432109".to_string(),
            last_visit: NaiveDate::from_ymd_opt(2026, 7, 24),
            total_spent: Money::from_minor(120_000),
        },
        Customer {
            id: "c-3".to_string(),
            name: "Emily Blunt".to_string(),
            phone: "7654321098".to_string(),
            last_visit: NaiveDate::from_ymd_opt(2026, 7, 20),
            total_spent: Money::from_minor(890_000),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

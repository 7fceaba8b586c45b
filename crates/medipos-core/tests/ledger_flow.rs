//! End-to-end ledger flows: full billing sequences across several
//! operations, exercising the invariants the unit tests check in isolation.

use chrono::NaiveDate;
use medipos_core::ledger::CartLedger;
use medipos_core::money::Money;
use medipos_core::types::{CustomerRef, PaymentMethod, StockItem, TaxRate};

fn item(id: &str, name: &str, price_minor: i64, stock: i64) -> StockItem {
    StockItem {
        id: id.to_string(),
        name: name.to_string(),
        batch_no: format!("B-{}", id),
        expiry_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        unit_price_minor: price_minor,
        available_stock: stock,
        category: "General".to_string(),
    }
}

fn gst_ledger() -> CartLedger {
    CartLedger::new(TaxRate::from_bps(1800))
}

/// The line-total law holds after any interleaving of add / set_quantity /
/// set_discount calls.
#[test]
fn line_total_law_under_mixed_edits() {
    let mut ledger = gst_ledger();
    let a = item("a", "Paracetamol 500mg", 2500, 1500);
    let b = item("b", "Amoxicillin 250mg", 8550, 45);

    ledger.add_item(&a, 2).unwrap();
    ledger.add_item(&b, 1).unwrap();
    ledger.set_quantity("a", 7);
    ledger.set_discount("b", 25);
    ledger.add_item(&a, 3).unwrap();
    ledger.set_discount("a", 5);
    ledger.set_quantity("b", 4);

    for line in &ledger.cart().items {
        let gross = line.unit_price.multiply_quantity(line.quantity);
        let expected = gross - gross.discount_part(line.discount_percent);
        assert_eq!(line.line_total(), expected, "line {}", line.item_id);
    }
}

/// Totals identities hold for any cart state and recomputation is
/// idempotent.
#[test]
fn totals_identities_hold() {
    let mut ledger = gst_ledger();
    ledger.add_item(&item("a", "Cetirizine 10mg", 3500, 800), 6).unwrap();
    ledger.add_item(&item("b", "Ibuprofen 400mg", 4200, 320), 2).unwrap();
    ledger.set_discount("a", 12);

    let t1 = ledger.totals();
    let t2 = ledger.totals();
    assert_eq!(t1, t2);

    assert_eq!(t1.taxable, t1.subtotal - t1.total_discount);
    assert_eq!(t1.grand_total, t1.taxable + t1.tax);

    // Empty cart: all zeros.
    let empty = gst_ledger().totals();
    assert!(empty.subtotal.is_zero());
    assert!(empty.grand_total.is_zero());
}

/// The worked scenario from the billing screen: ₹25.00 item, qty 2 → 3,
/// then a 10% line discount.
#[test]
fn worked_billing_scenario() {
    let mut ledger = gst_ledger();
    let paracetamol = item("1", "Paracetamol 500mg", 2500, 1500);

    ledger.add_item(&paracetamol, 2).unwrap();
    assert_eq!(ledger.cart().items[0].line_total(), Money::from_minor(5000));

    ledger.add_item(&paracetamol, 1).unwrap();
    assert_eq!(ledger.cart().items[0].quantity, 3);
    assert_eq!(ledger.cart().items[0].line_total(), Money::from_minor(7500));

    ledger.set_discount("1", 10);
    assert_eq!(ledger.cart().items[0].line_total(), Money::from_minor(6750));

    let totals = ledger.totals();
    assert_eq!(totals.subtotal, Money::from_minor(7500));
    assert_eq!(totals.total_discount, Money::from_minor(750));
    assert_eq!(totals.taxable, Money::from_minor(6750));
}

/// Quantity can never exceed available stock no matter how the cart is
/// driven.
#[test]
fn stock_bound_is_hard() {
    let mut ledger = gst_ledger();
    let scarce = item("v", "Vitamin C 500mg", 12000, 50);

    for _ in 0..30 {
        ledger.add_item(&scarce, 7).unwrap();
    }
    ledger.set_quantity("v", i64::MAX);
    assert_eq!(ledger.cart().items[0].quantity, 50);

    ledger.set_quantity("v", i64::MIN);
    assert_eq!(ledger.cart().items[0].quantity, 1);
}

/// Hold then recall restores an identical cart, and the held set drains.
#[test]
fn hold_recall_round_trip() {
    let mut ledger = gst_ledger();
    ledger.add_item(&item("1", "Metformin 500mg", 1800, 600), 4).unwrap();
    ledger.set_discount("1", 15);
    ledger.set_customer(CustomerRef {
        id: "c2".to_string(),
        name: "John Smith".to_string(),
    });

    let items_before = ledger.cart().items.clone();
    let totals_before = ledger.totals();

    let ticket = ledger.hold().unwrap();
    assert!(ledger.cart().is_empty());
    assert_eq!(ledger.held_tickets().len(), 1);

    ledger.recall(&ticket).unwrap();
    assert!(ledger.held_tickets().is_empty());
    assert_eq!(ledger.cart().items, items_before);
    assert_eq!(ledger.totals(), totals_before);
    assert_eq!(ledger.cart().customer.as_ref().unwrap().name, "John Smith");
}

/// Several tickets can be parked at once; recall picks the right one and
/// leaves the rest.
#[test]
fn multiple_held_tickets() {
    let mut ledger = gst_ledger();

    ledger.add_item(&item("1", "Paracetamol 500mg", 2500, 1500), 1).unwrap();
    let first = ledger.hold().unwrap();

    ledger.add_item(&item("2", "Pantoprazole 40mg", 9500, 1200), 2).unwrap();
    let second = ledger.hold().unwrap();

    assert_eq!(ledger.held_tickets().len(), 2);
    assert_ne!(first, second);

    ledger.recall(&first).unwrap();
    assert_eq!(ledger.cart().items[0].item_id, "1");
    assert_eq!(ledger.held_tickets().len(), 1);
    assert_eq!(ledger.held_tickets()[0].id, second);
}

/// A full sale: build, hold, resume, settle in cash, and verify the
/// receipt freeze.
#[test]
fn full_sale_with_hold_and_cash_settlement() {
    let mut ledger = gst_ledger();
    let a = item("1", "Paracetamol 500mg", 2500, 1500);
    let b = item("7", "Atorvastatin 10mg", 14500, 200);

    ledger.add_item(&a, 3).unwrap();
    ledger.set_discount("1", 10);
    let ticket = ledger.hold().unwrap();

    // An unrelated walk-in sale happens in between.
    ledger.add_item(&b, 1).unwrap();
    let walk_in = ledger
        .checkout(Money::from_minor(18000), PaymentMethod::Cash)
        .unwrap();
    // 145.00 × 18% = 26.10; grand 171.10 → rounds to 171.00
    assert_eq!(walk_in.totals.grand_total, Money::from_minor(17110));
    assert_eq!(walk_in.payment.change, Money::from_minor(900));

    // Resume the parked bill and settle it.
    ledger.recall(&ticket).unwrap();
    let receipt = ledger
        .checkout(Money::from_minor(8000), PaymentMethod::Cash)
        .unwrap();

    assert_eq!(receipt.totals.subtotal, Money::from_minor(7500));
    assert_eq!(receipt.totals.grand_total, Money::from_minor(7965));
    // Rounded grand 80.00, tendered 80.00: zero change.
    assert_eq!(receipt.payment.change, Money::zero());
    assert_eq!(receipt.lines.len(), 1);
    assert_eq!(receipt.lines[0].name, "Paracetamol 500mg");
    assert_eq!(receipt.lines[0].discount_percent, 10);

    assert!(ledger.cart().is_empty());
    assert!(ledger.held_tickets().is_empty());
}

/// Underpayment leaves everything exactly as it was; the follow-up payment
/// succeeds.
#[test]
fn failed_checkout_is_side_effect_free() {
    let mut ledger = gst_ledger();
    ledger.add_item(&item("8", "Pantoprazole 40mg", 9500, 1200), 2).unwrap();
    let before = ledger.totals();

    // 190.00 + 18% = 224.20 → rounds to 224.00
    let err = ledger
        .checkout(Money::from_minor(22000), PaymentMethod::Cash)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Insufficient payment: required 224.00, tendered 220.00"
    );
    assert_eq!(ledger.totals(), before);

    ledger
        .checkout(Money::from_minor(22400), PaymentMethod::Cash)
        .unwrap();
    assert!(ledger.cart().is_empty());
}

/// Adding an out-of-stock item fails and changes nothing, even mid-cart.
#[test]
fn out_of_stock_add_mid_cart() {
    let mut ledger = gst_ledger();
    ledger.add_item(&item("1", "Paracetamol 500mg", 2500, 1500), 2).unwrap();
    let before = ledger.totals();

    let gone = item("x", "Discontinued Syrup", 5000, 0);
    assert!(ledger.add_item(&gone, 1).is_err());

    assert_eq!(ledger.cart().line_count(), 1);
    assert_eq!(ledger.totals(), before);
}

/// Receipts serialize to camelCase JSON for the presentation layer.
#[test]
fn receipt_serializes_to_camel_case() {
    let mut ledger = gst_ledger();
    ledger.add_item(&item("1", "Paracetamol 500mg", 2500, 1500), 1).unwrap();
    let receipt = ledger
        .checkout(Money::from_minor(3000), PaymentMethod::Cash)
        .unwrap();

    let json = serde_json::to_value(&receipt).unwrap();
    assert!(json.get("receiptNumber").is_some());
    assert!(json.get("completedAt").is_some());
    assert_eq!(json["payment"]["method"], "cash");
    assert_eq!(json["lines"][0]["unitPrice"], 2500);
}

//! # Cart Ledger
//!
//! Owns the active cart and the set of held tickets for one billing station.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Operator Action           Ledger Call            State Change         │
//! │  ───────────────           ───────────            ────────────         │
//! │                                                                         │
//! │  Pick search result ─────► add_item() ──────────► upsert line          │
//! │                                                                         │
//! │  Edit quantity ──────────► set_quantity() ──────► clamp to [1, stock]  │
//! │                                                                         │
//! │  Edit discount ──────────► set_discount() ──────► clamp to [0, 100]    │
//! │                                                                         │
//! │  Remove row ─────────────► remove_item() ───────► drop line            │
//! │                                                                         │
//! │  Park the bill ──────────► hold() ──────────────► snapshot + new cart  │
//! │                                                                         │
//! │  Resume a bill ──────────► recall(id) ──────────► replace active cart  │
//! │                                                                         │
//! │  Settle ─────────────────► checkout() ──────────► receipt + new cart   │
//! │                                                                         │
//! │  Totals are recomputed from the line items on every read; they are     │
//! │  never cached, so they can never go stale.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine (per cart instance)
//! ```text
//! Empty ──add_item──► Building ──hold()────► Held ──recall()──► Building
//!                        │
//!                        └──checkout()──► CheckedOut (terminal; a fresh
//!                                         cart is started implicitly)
//! ```
//!
//! ## Clamp, Don't Reject
//! Out-of-range quantity and discount input is silently corrected into
//! range instead of erroring. Keeps data entry frictionless at the counter;
//! the bounds themselves are still hard invariants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::types::{
    CustomerRef, PaymentMethod, Receipt, ReceiptLine, ReceiptPayment, ReceiptTotals, StockItem,
    TaxRate,
};

// =============================================================================
// Line Item
// =============================================================================

/// One catalog item's entry within a cart.
///
/// ## Design Notes
/// - `name`, `batch_no`, `unit_price` are frozen copies taken at add-time.
///   The cart displays consistent data even if the catalog changes after
///   the item was added.
/// - `stock_cap` is the available stock from the most recent catalog
///   snapshot this line saw. Quantity edits clamp against it; the ledger
///   never reaches back into a live inventory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog item id this line refers to.
    pub item_id: String,

    /// Item name at add-time (frozen).
    pub name: String,

    /// Batch number at add-time (frozen).
    pub batch_no: String,

    /// Unit price at add-time (frozen). Later price changes in the catalog
    /// do not reprice an open cart.
    pub unit_price: Money,

    /// Available stock from the last snapshot seen. Upper bound for
    /// quantity edits.
    pub stock_cap: i64,

    /// Units on this line. Invariant: 1 ≤ quantity ≤ stock_cap.
    pub quantity: i64,

    /// Per-line discount percentage. Invariant: 0 ≤ discount ≤ 100.
    pub discount_percent: u32,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line from a catalog snapshot, freezing price and
    /// identity fields.
    fn from_stock_item(item: &StockItem, quantity: i64) -> Self {
        LineItem {
            item_id: item.id.clone(),
            name: item.name.clone(),
            batch_no: item.batch_no.clone(),
            unit_price: item.unit_price(),
            stock_cap: item.available_stock,
            quantity,
            discount_percent: 0,
            added_at: Utc::now(),
        }
    }

    /// Line amount before discount (unit price × quantity).
    #[inline]
    pub fn gross(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Discount amount for this line, rounded half-up to the paisa.
    #[inline]
    pub fn discount_amount(&self) -> Money {
        self.gross().discount_part(self.discount_percent)
    }

    /// Line total: `unit_price × quantity × (1 − discount/100)`.
    ///
    /// Always derived, never stored, so it cannot drift from the inputs.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.gross() - self.discount_amount()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress, mutable sale record.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item again increases
///   quantity)
/// - Insertion order is preserved for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items, in insertion order.
    pub items: Vec<LineItem>,

    /// Optional customer association (weak reference, id and name only).
    pub customer: Option<CustomerRef>,

    /// When the cart was started.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            customer: None,
            created_at: Utc::now(),
        }
    }

    /// Checks if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of unique lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total unit count across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived totals for a cart.
///
/// Recomputed from the line items on every call; never stored, never cached.
///
/// ```text
/// subtotal       = Σ (unit_price × quantity)
/// total_discount = Σ per-line discount amounts
/// taxable        = subtotal − total_discount
/// tax            = taxable × tax_rate
/// grand_total    = taxable + tax
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Money,
    pub total_discount: Money,
    pub taxable: Money,
    pub tax: Money,
    pub grand_total: Money,
}

// =============================================================================
// Held Ticket
// =============================================================================

/// A parked snapshot of a cart, resumable later.
///
/// Created only by `hold()`; consumed by `recall()` or removed by
/// `discard()`. The snapshot is owned outright, so later mutation of the
/// active cart can never reach into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldTicket {
    /// Unique ticket id (UUID v4).
    pub id: String,

    /// The parked cart.
    pub cart: Cart,

    /// When the cart was parked.
    pub held_at: DateTime<Utc>,

    /// Grand total at hold-time, for the ticket list display.
    pub grand_total_at_hold: Money,
}

// =============================================================================
// Cart Ledger
// =============================================================================

/// Owns the active cart and the held-ticket set; exposes the operation set
/// the billing screen drives.
///
/// ## Ownership
/// Exactly one ledger per billing session, constructed with the session's
/// tax rate. No other actor mutates the cart or the held set; callers get
/// `&Cart` reads back after each call and re-render from those.
///
/// ## Usage
/// ```rust
/// use chrono::NaiveDate;
/// use medipos_core::ledger::CartLedger;
/// use medipos_core::types::{StockItem, TaxRate};
///
/// let item = StockItem {
///     id: "1".to_string(),
///     name: "Paracetamol 500mg".to_string(),
///     batch_no: "B-201".to_string(),
///     expiry_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
///     unit_price_minor: 2500,
///     available_stock: 1500,
///     category: "Analgesic".to_string(),
/// };
///
/// let mut ledger = CartLedger::new(TaxRate::from_bps(1800));
/// ledger.add_item(&item, 2)?;
/// assert_eq!(ledger.totals().subtotal.minor(), 5000);
/// # Ok::<(), medipos_core::error::LedgerError>(())
/// ```
#[derive(Debug)]
pub struct CartLedger {
    cart: Cart,
    held: Vec<HeldTicket>,
    tax_rate: TaxRate,
}

impl CartLedger {
    /// Creates a ledger with an empty cart and no held tickets.
    pub fn new(tax_rate: TaxRate) -> Self {
        CartLedger {
            cart: Cart::new(),
            held: Vec::new(),
            tax_rate,
        }
    }

    /// Read access to the active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Held tickets, oldest first.
    pub fn held_tickets(&self) -> &[HeldTicket] {
        &self.held
    }

    /// Adds a catalog item to the cart, or increases quantity if a line for
    /// it already exists.
    ///
    /// ## Behavior
    /// - Zero available stock: fails with [`LedgerError::OutOfStock`], cart
    ///   unchanged
    /// - Existing line: quantity += requested, clamped to available stock;
    ///   already at the cap is a silent no-op, not an error
    /// - New line: appended with `quantity = min(requested, stock)` and
    ///   zero discount
    ///
    /// A requested quantity below 1 is treated as 1.
    pub fn add_item(&mut self, item: &StockItem, requested_qty: i64) -> LedgerResult<()> {
        if item.available_stock <= 0 {
            return Err(LedgerError::OutOfStock {
                name: item.name.clone(),
            });
        }

        let requested = requested_qty.max(1);

        if let Some(line) = self.cart.items.iter_mut().find(|l| l.item_id == item.id) {
            // The caller handed us a fresh catalog snapshot; its stock level
            // becomes the new cap for this line.
            line.stock_cap = item.available_stock;
            line.quantity = (line.quantity + requested).min(item.available_stock);
            return Ok(());
        }

        let quantity = requested.min(item.available_stock);
        self.cart.items.push(LineItem::from_stock_item(item, quantity));
        Ok(())
    }

    /// Sets the quantity of a line, clamped into `[1, stock_cap]`.
    ///
    /// Values below 1 are raised to 1; values above the stock cap are capped.
    /// Out-of-range input never errors. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, item_id: &str, new_qty: i64) {
        if let Some(line) = self.cart.items.iter_mut().find(|l| l.item_id == item_id) {
            let cap = line.stock_cap.max(1);
            line.quantity = new_qty.clamp(1, cap);
        }
    }

    /// Sets the discount percentage of a line, clamped into `[0, 100]`.
    ///
    /// Out-of-range input never errors. Unknown ids are a no-op.
    pub fn set_discount(&mut self, item_id: &str, new_discount_percent: u32) {
        if let Some(line) = self.cart.items.iter_mut().find(|l| l.item_id == item_id) {
            line.discount_percent = new_discount_percent.min(100);
        }
    }

    /// Removes a line by item id. No-op (not an error) if absent.
    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.items.retain(|l| l.item_id != item_id);
    }

    /// Associates a customer with the active cart.
    pub fn set_customer(&mut self, customer: CustomerRef) {
        self.cart.customer = Some(customer);
    }

    /// Clears the customer association.
    pub fn clear_customer(&mut self) {
        self.cart.customer = None;
    }

    /// Computes totals from the current line items.
    ///
    /// Pure function of cart state: calling it twice without a mutation in
    /// between yields identical results.
    pub fn totals(&self) -> Totals {
        let mut subtotal = Money::zero();
        let mut total_discount = Money::zero();

        for line in &self.cart.items {
            subtotal += line.gross();
            total_discount += line.discount_amount();
        }

        let taxable = subtotal - total_discount;
        let tax = taxable.tax(self.tax_rate);

        Totals {
            subtotal,
            total_discount,
            taxable,
            tax,
            grand_total: taxable + tax,
        }
    }

    /// Parks the active cart as a held ticket and starts a fresh cart.
    ///
    /// The snapshot is moved out of the ledger wholesale, so nothing the
    /// next cart does can touch it. Fails with [`LedgerError::EmptyCart`]
    /// when there is nothing to park.
    ///
    /// ## Returns
    /// The new ticket id.
    pub fn hold(&mut self) -> LedgerResult<String> {
        if self.cart.is_empty() {
            return Err(LedgerError::EmptyCart);
        }

        let grand_total_at_hold = self.totals().grand_total;
        let snapshot = std::mem::take(&mut self.cart);
        let id = Uuid::new_v4().to_string();

        self.held.push(HeldTicket {
            id: id.clone(),
            cart: snapshot,
            held_at: Utc::now(),
            grand_total_at_hold,
        });

        Ok(id)
    }

    /// Resumes a held ticket, replacing the active cart with its snapshot
    /// and removing the ticket from the held set.
    ///
    /// This is a destructive replace when the active cart is non-empty;
    /// confirming with the operator first is the presentation layer's job,
    /// not enforced here.
    pub fn recall(&mut self, ticket_id: &str) -> LedgerResult<()> {
        let idx = self
            .held
            .iter()
            .position(|t| t.id == ticket_id)
            .ok_or_else(|| LedgerError::TicketNotFound(ticket_id.to_string()))?;

        let ticket = self.held.remove(idx);
        self.cart = ticket.cart;
        Ok(())
    }

    /// Removes a held ticket without recalling it. No-op if not found.
    pub fn discard(&mut self, ticket_id: &str) {
        self.held.retain(|t| t.id != ticket_id);
    }

    /// Settles the active cart and starts a fresh one.
    ///
    /// ## Payment Policy
    /// - Cash: fails with [`LedgerError::InsufficientPayment`] when tendered
    ///   is below the grand total rounded half-up to the whole rupee; change
    ///   is tendered minus the rounded total
    /// - Upi/Card: the exact grand total settles; tendered input is ignored
    ///   and change is zero
    ///
    /// Fails with [`LedgerError::EmptyCart`] when there is nothing to settle.
    /// On failure the cart is left exactly as it was.
    ///
    /// ## Returns
    /// The finalized [`Receipt`]. The settled cart instance is terminal; the
    /// ledger immediately starts a new empty cart for the next sale.
    pub fn checkout(
        &mut self,
        amount_tendered: Money,
        method: PaymentMethod,
    ) -> LedgerResult<Receipt> {
        if self.cart.is_empty() {
            return Err(LedgerError::EmptyCart);
        }

        let totals = self.totals();
        let rounded_grand = totals.grand_total.round_to_unit();

        let (tendered, change) = if method.is_cash_like() {
            if amount_tendered < rounded_grand {
                return Err(LedgerError::InsufficientPayment {
                    required: rounded_grand,
                    tendered: amount_tendered,
                });
            }
            (amount_tendered, amount_tendered - rounded_grand)
        } else {
            (totals.grand_total, Money::zero())
        };

        let completed_at = Utc::now();
        let cart = std::mem::take(&mut self.cart);

        let receipt = Receipt {
            receipt_id: Uuid::new_v4().to_string(),
            receipt_number: generate_receipt_number(completed_at),
            lines: cart
                .items
                .iter()
                .map(|l| ReceiptLine {
                    item_id: l.item_id.clone(),
                    name: l.name.clone(),
                    batch_no: l.batch_no.clone(),
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                    discount_percent: l.discount_percent,
                    line_total: l.line_total(),
                })
                .collect(),
            totals: ReceiptTotals {
                subtotal: totals.subtotal,
                total_discount: totals.total_discount,
                taxable: totals.taxable,
                tax: totals.tax,
                grand_total: totals.grand_total,
            },
            payment: ReceiptPayment {
                method,
                tendered,
                change,
            },
            customer: cart.customer,
            completed_at,
        };

        Ok(receipt)
    }
}

/// Builds a demo-grade receipt number from the completion time.
///
/// Real invoice numbering with uniqueness guarantees is out of scope; a
/// time-derived string is enough for the receipt display.
fn generate_receipt_number(at: DateTime<Utc>) -> String {
    let suffix = at.timestamp_subsec_nanos() % 10000;
    format!("{}-{:04}", at.format("%y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Command Dispatch
//!
//! Parses one REPL line and routes it to the right handler. One module per
//! screen:
//!
//! - [`billing`] - search, cart edits, hold/recall, settlement
//! - [`inventory`] - shelf listing, restock, low-stock/expiring views
//! - [`customers`] - directory listing and registration
//! - [`dashboard`] - stat cards and recent sales

pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod inventory;

use crate::error::ShellError;
use crate::session::Session;

/// Result of dispatching one line: `None` means the operator asked to quit.
pub type Dispatch = Option<Result<String, ShellError>>;

/// The help screen.
pub const HELP: &str = "\
MediPOS front desk commands

  Billing
    find <text>            search items by name or batch
    add <id> [qty]         add an item to the cart
    qty <id> <n>           set line quantity (clamped to stock)
    disc <id> <pct>        set line discount % (clamped to 0-100)
    rm <id>                remove a line
    cart                   show the cart and totals
    customer <text>        attach a customer to the bill
    nocustomer             detach the customer
    hold                   park the bill as a held ticket
    tickets                list held tickets
    recall <id> [force]    resume a held ticket
    discard <id>           drop a held ticket
    pay cash <amount>      settle in cash
    pay upi | pay card     settle exactly, no change
    last                   reprint the last receipt as JSON

  Inventory
    stock                  full shelf listing
    restock <id> <qty>     add stock
    low                    items below the low-stock threshold
    expiring               batches expiring within 90 days

  Customers
    customers [text]       list or search the directory
    newcustomer <phone> <name...>

  Other
    dash                   dashboard
    help                   this screen
    quit                   exit
";

/// Dispatches one input line against the session.
pub fn dispatch(session: &mut Session, line: &str) -> Dispatch {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_lowercase();
    let args: Vec<&str> = words.collect();

    let result = match verb.as_str() {
        "quit" | "exit" => return None,
        "help" => Ok(HELP.to_string()),

        // Billing
        "find" => billing::find(session, &args.join(" ")),
        "add" => match args.as_slice() {
            [id] => billing::add(session, id, 1),
            [id, qty] => parse_i64(qty).and_then(|q| billing::add(session, id, q)),
            _ => usage("add <item-id> [qty]"),
        },
        "qty" => match args.as_slice() {
            [id, qty] => parse_i64(qty).and_then(|q| billing::set_quantity(session, id, q)),
            _ => usage("qty <item-id> <quantity>"),
        },
        "disc" => match args.as_slice() {
            [id, pct] => parse_u32(pct).and_then(|p| billing::set_discount(session, id, p)),
            _ => usage("disc <item-id> <percent>"),
        },
        "rm" => match args.as_slice() {
            [id] => billing::remove(session, id),
            _ => usage("rm <item-id>"),
        },
        "cart" => billing::cart(session),
        "customer" => {
            if args.is_empty() {
                usage("customer <name or phone>")
            } else {
                billing::attach_customer(session, &args.join(" "))
            }
        }
        "nocustomer" => billing::detach_customer(session),
        "hold" => billing::hold(session),
        "tickets" => billing::tickets(session),
        "recall" => match args.as_slice() {
            [id] => billing::recall(session, id, false),
            [id, flag] if flag.eq_ignore_ascii_case("force") => {
                billing::recall(session, id, true)
            }
            _ => usage("recall <ticket-id> [force]"),
        },
        "discard" => match args.as_slice() {
            [id] => billing::discard(session, id),
            _ => usage("discard <ticket-id>"),
        },
        "pay" => match args.as_slice() {
            [method] => billing::pay(session, method, None),
            [method, amount] => billing::pay(session, method, Some(*amount)),
            _ => usage("pay cash <amount> | pay upi | pay card"),
        },
        "last" => billing::last_receipt_json(session),

        // Inventory
        "stock" | "inventory" => inventory::list(session),
        "restock" => match args.as_slice() {
            [id, qty] => parse_i64(qty).and_then(|q| inventory::restock(session, id, q)),
            _ => usage("restock <item-id> <qty>"),
        },
        "low" => inventory::low_stock(session),
        "expiring" => inventory::expiring(session),

        // Customers
        "customers" => customers::list(session, &args.join(" ")),
        "newcustomer" => match args.as_slice() {
            [phone, name @ ..] if !name.is_empty() => {
                customers::add(session, phone, &name.join(" "))
            }
            _ => usage("newcustomer <phone> <name...>"),
        },

        // Dashboard
        "dash" | "dashboard" => dashboard::show(session),

        other => Err(ShellError::usage(format!(
            "Unknown command '{}'. Type 'help'.",
            other
        ))),
    };

    Some(result)
}

fn usage(syntax: &str) -> Result<String, ShellError> {
    Err(ShellError::usage(format!("try: {}", syntax)))
}

fn parse_i64(raw: &str) -> Result<i64, ShellError> {
    raw.parse::<i64>()
        .map_err(|_| ShellError::usage(format!("'{}' is not a number", raw)))
}

fn parse_u32(raw: &str) -> Result<u32, ShellError> {
    raw.parse::<u32>()
        .map_err(|_| ShellError::usage(format!("'{}' is not a number", raw)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;

    fn session() -> Session {
        Session::seeded(ShellConfig::default())
    }

    fn run(session: &mut Session, line: &str) -> Result<String, ShellError> {
        dispatch(session, line).expect("not a quit command")
    }

    #[test]
    fn test_quit_and_blank() {
        let mut session = session();
        assert!(dispatch(&mut session, "quit").is_none());
        assert!(dispatch(&mut session, "exit").is_none());
        // A blank line is ignored, same as quit at the dispatch layer:
        // the REPL just prompts again.
        assert!(dispatch(&mut session, "   ").is_none());
    }

    #[test]
    fn test_full_billing_flow_via_dispatch() {
        let mut session = session();

        run(&mut session, "find para").unwrap();
        run(&mut session, "add 1 2").unwrap();
        run(&mut session, "add 1").unwrap();
        run(&mut session, "disc 1 10").unwrap();

        let cart = run(&mut session, "cart").unwrap();
        assert!(cart.contains("₹67.50"));
        assert!(cart.contains("₹79.65"));

        let receipt = run(&mut session, "pay cash 80").unwrap();
        assert!(receipt.contains("Receipt"));
        assert!(session.ledger.cart().is_empty());
    }

    #[test]
    fn test_bad_arguments_are_usage_errors() {
        let mut session = session();
        assert!(run(&mut session, "add").is_err());
        assert!(run(&mut session, "qty 1 abc").is_err());
        assert!(run(&mut session, "frobnicate").is_err());
    }

    #[test]
    fn test_case_insensitive_verbs() {
        let mut session = session();
        assert!(run(&mut session, "HELP").unwrap().contains("Billing"));
        assert!(run(&mut session, "Dash").unwrap().contains("Revenue"));
    }
}

//! # MediPOS Terminal Front Desk
//!
//! Entry point: parses flags, installs logging, seeds the demo session, and
//! runs the REPL.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse Flags ──────────────────────────────────────────────────────► │
//! │     • --store-name, --tax-rate, --low-stock-threshold                   │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: WARN so tables stay readable; RUST_LOG overrides         │
//! │                                                                         │
//! │  3. Build Configuration ──────────────────────────────────────────────► │
//! │     • Defaults ← MEDIPOS_* env vars ← flags                             │
//! │                                                                         │
//! │  4. Seed Session ─────────────────────────────────────────────────────► │
//! │     • Demo catalog (8 items), demo customers (3)                        │
//! │                                                                         │
//! │  5. REPL ─────────────────────────────────────────────────────────────► │
//! │     • One command per line, run to completion, print, repeat            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;
mod session;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ShellConfig;
use medipos_core::types::TaxRate;
use session::Session;

/// MediPOS: single-station pharmacy point of sale.
#[derive(Debug, Parser)]
#[command(name = "medipos", version, about)]
struct Args {
    /// Store name shown in the banner and on receipts.
    #[arg(long)]
    store_name: Option<String>,

    /// Tax rate as a percentage (e.g. 18 for 18% GST).
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Stock level below which items count as low stock.
    #[arg(long)]
    low_stock_threshold: Option<i64>,
}

fn main() {
    let args = Args::parse();

    // Logging first, so configuration and seeding are traceable.
    // Default to WARN: the REPL's own tables are the primary output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = ShellConfig::from_env();
    if let Some(store_name) = args.store_name {
        config.store_name = store_name;
    }
    if let Some(rate) = args.tax_rate {
        config.tax_rate_bps = TaxRate::from_percentage(rate).bps();
    }
    if let Some(threshold) = args.low_stock_threshold {
        config.low_stock_threshold = threshold;
    }

    info!(store = %config.store_name, tax_bps = config.tax_rate_bps, "Starting front desk");

    let mut session = Session::seeded(config);

    println!(
        "{} - type 'help' for commands, 'quit' to exit.",
        session.config.store_name
    );

    let stdin = io::stdin();
    loop {
        print!("pos> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("input error: {}", e);
                break;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        match commands::dispatch(&mut session, &line) {
            Some(Ok(output)) => println!("{}", output),
            Some(Err(err)) => println!("{}", err),
            None => break,
        }
    }

    println!("Session closed. {} sales recorded.", session.sales.count());
}

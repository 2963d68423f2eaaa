//! # till Terminal Entry Point
//!
//! Builds the fixed demo cart, runs the checkout pipeline, and writes one
//! line to stdout: the total line, or the error line if the final sign
//! check fails.
//!
//! ## Usage
//! ```bash
//! # Member with coupon (the default session)
//! cargo run -p till-cli --bin till
//!
//! # Price the same cart without membership
//! cargo run -p till-cli --bin till -- --guest
//!
//! # Append the stage breakdown as JSON
//! cargo run -p till-cli --bin till -- --json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr only - stdout carries the result)
//! 2. Parse flags
//! 3. Build the demo cart
//! 4. Checkout and print

use std::env;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use till_core::cart::{Cart, LineItem};
use till_core::money::Money;
use till_core::receipt;

/// Session flags parsed from the command line.
///
/// The default session is a member holding a coupon; flags only switch
/// things off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CliOptions {
    is_member: bool,
    has_coupon: bool,
    json: bool,
    help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            is_member: true,
            has_coupon: true,
            json: false,
            help: false,
        }
    }
}

impl CliOptions {
    /// Parses flags. Unknown arguments are ignored rather than fatal.
    fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = CliOptions::default();
        for arg in args {
            match arg.as_ref() {
                "--guest" | "-g" => opts.is_member = false,
                "--no-coupon" => opts.has_coupon = false,
                "--json" => opts.json = true,
                "--help" | "-h" => opts.help = true,
                other => warn!(arg = other, "ignoring unknown argument"),
            }
        }
        opts
    }
}

/// The fixed demo cart: three items, with the laptop tagged as electronics.
fn demo_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_item(LineItem::new("Apple", Money::from_major_minor(1, 50), 10));
    cart.add_item(LineItem::new("Banana", Money::from_major_minor(0, 50), 5));

    let mut laptop = LineItem::new("Laptop", Money::from_major_minor(1000, 0), 1);
    laptop.category = "electronics".to_string();
    cart.add_item(laptop);

    cart
}

fn print_usage() {
    println!("Usage: till [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -g, --guest      price the cart without membership");
    println!("      --no-coupon  drop the coupon");
    println!("      --json       append the stage breakdown as JSON");
    println!("  -h, --help       show this help");
}

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let opts = CliOptions::parse(env::args().skip(1));
    if opts.help {
        print_usage();
        return;
    }

    let cart = demo_cart();
    info!(
        items = cart.item_count(),
        subtotal = %cart.subtotal(),
        currency = %cart.config.currency,
        is_member = opts.is_member,
        has_coupon = opts.has_coupon,
        "cart ready"
    );

    // Both paths return normally; the outcome is carried in the text only
    match cart.checkout(opts.is_member, opts.has_coupon) {
        Ok(totals) => {
            println!("{}", receipt::total_line(&totals));
            if opts.json {
                match serde_json::to_string_pretty(&totals) {
                    Ok(json) => println!("{json}"),
                    Err(err) => warn!(%err, "could not serialize breakdown"),
                }
            }
        }
        Err(err) => {
            warn!(%err, "final sign check failed");
            println!("{}", receipt::ERROR_LINE);
        }
    }
}

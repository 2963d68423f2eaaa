//! # till-core: Pure Pricing Logic for till
//!
//! This crate is the **heart** of till. It contains the whole checkout
//! pipeline as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        till Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    apps/cli (till binary)                     │  │
//! │  │        build demo cart ──► checkout ──► print one line        │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                ★ till-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────┐  │  │
//! │  │   │  money  │ │ config  │ │  cart   │ │ receipt │ │ error │  │  │
//! │  │   │  Money  │ │ Pricing │ │  Cart   │ │  total  │ │ Check │  │  │
//! │  │   │  Rate   │ │ Config  │ │LineItem │ │  line   │ │ out   │  │  │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └───────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                        │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money and Rate types with integer arithmetic (no floats!)
//! - [`config`] - The fixed rate set for a session
//! - [`cart`] - Line items, the cart, and the checkout pipeline
//! - [`receipt`] - Output-line formatting
//! - [`error`] - Checkout error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same cart and flags in, same cents out
//! 2. **Integer Money**: all amounts are cents (i64) to avoid float errors
//! 3. **Explicit Errors**: the one error case is typed, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::cart::{Cart, LineItem};
//! use till_core::money::Money;
//! use till_core::receipt;
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new("Apple", Money::from_cents(150), 10));
//!
//! let totals = cart.checkout(true, false).unwrap();
//! assert_eq!(receipt::total_line(&totals), "The total price is: $15");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod money;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Cart` instead of
// `use till_core::cart::Cart`

pub use cart::{Cart, CheckoutTotals, LineItem};
pub use config::PricingConfig;
pub use error::{CheckoutError, CheckoutResult};
pub use money::{Money, Rate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal a session must strictly exceed, after the membership discount,
/// before the flat big-spender reduction applies. Exactly $100.00 does not
/// qualify.
pub const BIG_SPENDER_THRESHOLD: Money = Money::from_cents(10_000);

/// Category assigned to a line item when the caller sets none.
pub const DEFAULT_CATEGORY: &str = "general";

/// The 40% promotional reduction behind [`LineItem::promo_price`].
/// No current flow applies it; see DESIGN.md.
pub const PROMO_DISCOUNT: Rate = Rate::from_bps(4_000);

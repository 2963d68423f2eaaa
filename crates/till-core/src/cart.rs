//! # Cart Module
//!
//! Line items, the cart, and the checkout pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Pipeline                              │
//! │                                                                     │
//! │  items ──► subtotal() ──► apply_discounts() ──► + tax ──► - coupon  │
//! │                            │                                        │
//! │                            ├── membership 5% first                  │
//! │                            └── then flat $10 once the reduced       │
//! │                                subtotal is strictly above $100      │
//! │                                                                     │
//! │  Order is load-bearing:                                             │
//! │  • the big-spender check reads the POST-membership value            │
//! │  • tax is charged on the discounted subtotal                        │
//! │  • the coupon comes off the POST-tax total                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are kept in insertion order; `add_item` only appends
//! - No sign validation anywhere: negative prices and quantities propagate
//!   arithmetically and are only caught by the final sign check

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PricingConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::{BIG_SPENDER_THRESHOLD, DEFAULT_CATEGORY, PROMO_DISCOUNT};

// =============================================================================
// Line Item
// =============================================================================

/// A single product entry with price and quantity.
///
/// `name`, `unit_price`, and `quantity` are fixed at construction.
/// `category` and `env_fee` are public so the owning caller can adjust them
/// after the fact, which is how the demo cart tags its electronics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name.
    name: String,

    /// Unit price in cents. May be negative; nothing upstream rejects it.
    unit_price: Money,

    /// Quantity purchased.
    quantity: i64,

    /// Product category. Defaults to "general".
    pub category: String,

    /// Environmental fee. Defaults to zero and is not part of any total.
    pub env_fee: Money,

    /// When this item was created.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item with the default category and no fee.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
            category: DEFAULT_CATEGORY.to_string(),
            env_fee: Money::zero(),
            added_at: Utc::now(),
        }
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the quantity.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// Zero when the quantity is zero; negative when price or quantity is.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Calculates the line total at the 40% promotional reduction.
    ///
    /// Nothing in the checkout pipeline calls this. It is kept as a
    /// stand-alone utility for a future promotional path; see DESIGN.md.
    pub fn promo_price(&self) -> Money {
        self.line_total().discount_by(PROMO_DISCOUNT)
    }
}

// =============================================================================
// Checkout Totals
// =============================================================================

/// Stage-by-stage breakdown of one checkout run.
///
/// `discount` and `tax` are the amounts moved at each stage, so
/// `subtotal - discount + tax - coupon == total` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    /// Sum of line totals before any reduction.
    pub subtotal: Money,

    /// Membership + big-spender reduction combined.
    pub discount: Money,

    /// Tax charged on the discounted subtotal.
    pub tax: Money,

    /// Coupon reduction taken off the post-tax total.
    pub coupon: Money,

    /// The final amount due.
    pub total: Money,
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of line items plus the session's pricing rates.
///
/// The cart owns its items exclusively. Insertion order is preserved and
/// items are never merged or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    items: Vec<LineItem>,

    /// The fixed rate set for this session.
    pub config: PricingConfig,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart with the default rate set.
    pub fn new() -> Self {
        Cart::with_config(PricingConfig::default())
    }

    /// Creates an empty cart with an explicit rate set.
    pub fn with_config(config: PricingConfig) -> Self {
        Cart {
            items: Vec::new(),
            config,
            created_at: Utc::now(),
        }
    }

    /// Appends an item to the cart.
    ///
    /// No validation happens here: a negative price or quantity goes in
    /// as-is and flows through the arithmetic.
    pub fn add_item(&mut self, item: LineItem) {
        debug!(name = %item.name(), total = %item.line_total(), "item added");
        self.items.push(item);
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculates the subtotal: the sum of line totals in insertion order.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Applies membership and big-spender discounts to a subtotal.
    ///
    /// Membership comes off first; the big-spender threshold is then
    /// checked against the already-reduced value. A post-membership
    /// subtotal of exactly the threshold does NOT trigger the flat
    /// reduction (strictly-greater comparison).
    pub fn apply_discounts(&self, subtotal: Money, is_member: bool) -> Money {
        let mut subtotal = subtotal;

        if is_member {
            subtotal = subtotal.discount_by(self.config.member_discount);
        }
        if subtotal > BIG_SPENDER_THRESHOLD {
            subtotal -= self.config.big_spender_discount;
        }

        subtotal
    }

    /// Calculates the final total.
    ///
    /// Pure given the item list and rates; no error conditions. The stage
    /// order is fixed: discounts, then tax on the discounted subtotal,
    /// then the coupon on the post-tax total.
    pub fn calculate_total(&self, is_member: bool, has_coupon: bool) -> Money {
        let subtotal = self.subtotal();
        let subtotal = self.apply_discounts(subtotal, is_member);
        let mut total = subtotal + subtotal.tax(self.config.tax_rate);
        if has_coupon {
            total = total.discount_by(self.config.coupon_discount);
        }
        total
    }

    /// Runs the pipeline and returns the stage breakdown.
    ///
    /// This is [`Cart::calculate_total`] plus the final sign check: a
    /// negative total (possible because inputs are never sign-validated)
    /// comes back as [`CheckoutError::NegativeTotal`] instead of a price.
    pub fn checkout(&self, is_member: bool, has_coupon: bool) -> CheckoutResult<CheckoutTotals> {
        let subtotal = self.subtotal();
        let discounted = self.apply_discounts(subtotal, is_member);
        let tax = discounted.tax(self.config.tax_rate);
        let taxed = discounted + tax;
        let total = if has_coupon {
            taxed.discount_by(self.config.coupon_discount)
        } else {
            taxed
        };

        debug!(
            subtotal = %subtotal,
            discounted = %discounted,
            tax = %tax,
            total = %total,
            is_member,
            has_coupon,
            "checkout pipeline complete"
        );

        if total.is_negative() {
            return Err(CheckoutError::NegativeTotal { total });
        }

        Ok(CheckoutTotals {
            subtotal,
            discount: subtotal - discounted,
            tax,
            coupon: taxed - total,
            total,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Rate;

    fn item(name: &str, cents: i64, qty: i64) -> LineItem {
        LineItem::new(name, Money::from_cents(cents), qty)
    }

    /// The fixed demo cart: Apple $1.50×10, Banana $0.50×5, Laptop $1000×1.
    fn demo_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(item("Apple", 150, 10));
        cart.add_item(item("Banana", 50, 5));
        let mut laptop = item("Laptop", 100_000, 1);
        laptop.category = "electronics".to_string();
        cart.add_item(laptop);
        cart
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("Apple", 150, 10).line_total().cents(), 1500);
        assert_eq!(item("Nothing", 999, 0).line_total().cents(), 0);
        // Negative inputs propagate, no rejection
        assert_eq!(item("Refund", -500, 3).line_total().cents(), -1500);
    }

    #[test]
    fn test_item_defaults() {
        let it = item("Apple", 150, 10);
        assert_eq!(it.category, "general");
        assert!(it.env_fee.is_zero());
    }

    #[test]
    fn test_promo_price_is_sixty_percent() {
        // 40% off $15.00 = $9.00
        assert_eq!(item("Apple", 150, 10).promo_price().cents(), 900);
    }

    #[test]
    fn test_subtotal_sums_in_any_order() {
        let cart = demo_cart();
        assert_eq!(cart.subtotal().cents(), 101_750);

        let mut reversed = Cart::new();
        reversed.add_item(item("Laptop", 100_000, 1));
        reversed.add_item(item("Banana", 50, 5));
        reversed.add_item(item("Apple", 150, 10));
        assert_eq!(reversed.subtotal(), cart.subtotal());
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let cart = demo_cart();
        let names: Vec<&str> = cart.items().iter().map(LineItem::name).collect();
        assert_eq!(names, ["Apple", "Banana", "Laptop"]);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_quantity(), 16);
    }

    #[test]
    fn test_member_discount_applied_before_threshold_check() {
        let cart = demo_cart();
        // 5% off $1017.50 = $966.62 (half-up), then the flat $10
        let reduced = cart.apply_discounts(cart.subtotal(), true);
        assert_eq!(reduced.cents(), 95_662);

        // Non-member: only the flat reduction
        let reduced = cart.apply_discounts(cart.subtotal(), false);
        assert_eq!(reduced.cents(), 100_750);
    }

    #[test]
    fn test_big_spender_boundary_is_strict() {
        let cart = Cart::new();

        // Exactly $100.00 after membership: no flat reduction
        let at = cart.apply_discounts(Money::from_cents(10_000), false);
        assert_eq!(at.cents(), 10_000);

        // One cent over: reduction applies
        let over = cart.apply_discounts(Money::from_cents(10_001), false);
        assert_eq!(over.cents(), 9_001);
    }

    #[test]
    fn test_threshold_reads_post_membership_value() {
        let cart = Cart::new();
        // $105.00 drops to $99.75 after the 5% membership discount,
        // which is under the threshold, so no flat $10 comes off.
        let reduced = cart.apply_discounts(Money::from_cents(10_500), true);
        assert_eq!(reduced.cents(), 9_975);
    }

    #[test]
    fn test_worked_example_member_with_coupon() {
        // $1017.50 -> member 5% -> $966.62 -> big spender -> $956.62
        // -> +8% tax -> $1033.15 -> -15% coupon -> $878.18
        let cart = demo_cart();
        assert_eq!(cart.calculate_total(true, true).cents(), 87_818);
    }

    #[test]
    fn test_tax_on_discounted_subtotal_coupon_on_taxed_total() {
        let cart = demo_cart();
        let totals = cart.checkout(true, true).unwrap();

        assert_eq!(totals.subtotal.cents(), 101_750);
        assert_eq!(totals.discount.cents(), 6_088); // $50.88 + $10.00
        // 8% of the discounted $956.62, not of the raw subtotal
        assert_eq!(totals.tax.cents(), 7_653);
        // 15% of the post-tax $1033.15
        assert_eq!(totals.coupon.cents(), 15_497);
        assert_eq!(totals.total.cents(), 87_818);
        assert_eq!(
            (totals.subtotal - totals.discount + totals.tax - totals.coupon),
            totals.total
        );
    }

    #[test]
    fn test_no_member_no_coupon() {
        let cart = demo_cart();
        // $1017.50 -> flat $10 only -> $1007.50 -> +8% tax -> $1088.10
        assert_eq!(cart.calculate_total(false, false).cents(), 108_810);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());

        let totals = cart.checkout(true, true).unwrap();
        assert!(totals.total.is_zero());
        assert!(totals.tax.is_zero());
    }

    #[test]
    fn test_negative_total_reported_as_error() {
        let mut cart = Cart::new();
        cart.add_item(item("Bogus refund", -5_000, 10));

        let err = cart.checkout(true, true).unwrap_err();
        assert!(matches!(err, CheckoutError::NegativeTotal { total } if total.is_negative()));
    }

    #[test]
    fn test_varied_rate_set() {
        // The pipeline is not welded to the store defaults
        let config = PricingConfig {
            tax_rate: Rate::from_bps(1000),
            member_discount: Rate::from_bps(0),
            big_spender_discount: Money::from_cents(500),
            coupon_discount: Rate::from_bps(5000),
            currency: "USD".to_string(),
        };
        let mut cart = Cart::with_config(config);
        cart.add_item(item("Widget", 20_000, 1));

        // $200 -> -$5 flat -> $195 -> +10% -> $214.50 -> half off -> $107.25
        assert_eq!(cart.calculate_total(true, true).cents(), 10_725);
    }
}

//! # Pricing Configuration
//!
//! The fixed rate set the checkout pipeline runs with.
//!
//! Rates live in one value rather than as scattered constants so tests can
//! run the pipeline against varied rate sets. The store defaults are in
//! [`PricingConfig::default`].

use serde::{Deserialize, Serialize};

use crate::money::{Money, Rate};

/// The discount and tax parameters for a checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Sales tax, applied to the post-discount subtotal.
    pub tax_rate: Rate,

    /// Membership percentage, applied to the subtotal first.
    pub member_discount: Rate,

    /// Flat reduction once the post-membership subtotal passes
    /// [`crate::BIG_SPENDER_THRESHOLD`].
    pub big_spender_discount: Money,

    /// Coupon percentage, applied to the post-tax total.
    pub coupon_discount: Rate,

    /// ISO 4217 currency code. Informational only; no conversion happens.
    pub currency: String,
}

impl Default for PricingConfig {
    /// The store's fixed rate set: 8% tax, 5% membership, $10 big-spender
    /// reduction, 15% coupon, USD.
    fn default() -> Self {
        PricingConfig {
            tax_rate: Rate::from_bps(800),
            member_discount: Rate::from_bps(500),
            big_spender_discount: Money::from_major_minor(10, 0),
            coupon_discount: Rate::from_bps(1500),
            currency: "USD".to_string(),
        }
    }
}

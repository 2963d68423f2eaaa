//! # Receipt Module
//!
//! Pure formatting for the one line of output the session produces.
//!
//! The displayed amount is truncated to whole dollars: fractional cents are
//! discarded, never rounded, so $878.18 prints as `$878`.

use crate::cart::CheckoutTotals;
use crate::money::Money;

/// The exact text shown when checkout reports a negative total.
pub const ERROR_LINE: &str = "Error in calculation!";

/// Formats the total line for a completed checkout.
///
/// ```rust
/// use till_core::money::Money;
/// use till_core::receipt;
///
/// assert_eq!(
///     receipt::format_total(Money::from_cents(87818)),
///     "The total price is: $878"
/// );
/// ```
pub fn format_total(total: Money) -> String {
    format!("The total price is: ${}", total.dollars())
}

/// Formats the total line from a checkout breakdown.
pub fn total_line(totals: &CheckoutTotals) -> String {
    format_total(totals.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_not_rounds() {
        assert_eq!(
            format_total(Money::from_cents(87_818)),
            "The total price is: $878"
        );
        // $99.99 truncates down, never up
        assert_eq!(
            format_total(Money::from_cents(9_999)),
            "The total price is: $99"
        );
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(format_total(Money::zero()), "The total price is: $0");
    }

    #[test]
    fn test_error_line_text() {
        assert_eq!(ERROR_LINE, "Error in calculation!");
    }
}

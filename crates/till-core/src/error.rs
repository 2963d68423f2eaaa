//! # Error Types
//!
//! Checkout errors for till-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending amount)
//! 3. Errors are enum variants, never String
//!
//! The pipeline itself is made of total functions; the single error case is
//! the final sign check after the coupon step. Malformed inputs (negative
//! price or quantity) are never rejected at entry, only their downstream
//! effect is caught if it drives the total below zero.

use thiserror::Error;

use crate::money::Money;

/// Checkout errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The final total came out below zero.
    ///
    /// ## When This Occurs
    /// - An item carries a negative price or quantity large enough to
    ///   outweigh the rest of the cart
    ///
    /// The caller shows the error line instead of a price.
    #[error("checkout produced a negative total: {total}")]
    NegativeTotal { total: Money },
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

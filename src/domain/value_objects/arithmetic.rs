//! # Checked Arithmetic
//!
//! Safe Decimal arithmetic for price accumulation.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`hundredths`] - Const constructor for multipliers
//! - [`round_to_cents`] - Rounds a money amount to two decimal places
//! - [`multiplier_adjustment`] - Premium or discount produced by a multiplier
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::value_objects::arithmetic::multiplier_adjustment;
//! use rust_decimal::Decimal;
//!
//! // A 1.25 rush multiplier on a 500 subtotal adds 125.
//! let fee = multiplier_adjustment(Decimal::new(500, 0), Decimal::new(125, 2)).unwrap();
//! assert_eq!(fee, Decimal::new(125, 0));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places kept on computed money amounts.
pub const MONEY_SCALE: u32 = 2;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Invalid value provided (e.g., negative when positive required).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Provides arithmetic methods that return `Result` instead of
/// panicking on overflow.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Builds a Decimal from a count of hundredths (`125` is `1.25`).
///
/// Usable in `const` context, which keeps catalog multipliers static.
#[inline]
#[must_use]
pub const fn hundredths(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, MONEY_SCALE)
}

/// Rounds a money amount to cents, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use quote_configurator::domain::value_objects::arithmetic::round_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_cents(Decimal::new(10_005, 3)), Decimal::new(1_001, 2));
/// ```
#[inline]
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `(multiplier - 1) * base`, rounded to cents.
///
/// Positive for rush multipliers above one, negative for discounts below
/// one, zero for a neutral multiplier.
///
/// # Errors
///
/// Returns `ArithmeticError::InvalidValue` if the multiplier is not positive,
/// or `ArithmeticError::Overflow` if the product overflows.
pub fn multiplier_adjustment(base: Decimal, multiplier: Decimal) -> ArithmeticResult<Decimal> {
    if multiplier <= Decimal::ZERO {
        return Err(ArithmeticError::InvalidValue("multiplier must be positive"));
    }
    let factor = multiplier.safe_sub(Decimal::ONE)?;
    Ok(round_to_cents(base.safe_mul(factor)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::InvalidValue("negative").to_string(),
                "invalid value: negative"
            );
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_add_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(50, 0);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(150, 0));
        }

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_add(Decimal::ONE),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_sub_allows_negative_results() {
            let a = Decimal::new(50, 0);
            let b = Decimal::new(100, 0);
            assert_eq!(a.safe_sub(b).unwrap(), Decimal::new(-50, 0));
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }
    }

    mod hundredths_tests {
        use super::*;

        #[test]
        fn builds_scaled_value() {
            assert_eq!(hundredths(125), Decimal::new(125, 2));
            assert_eq!(hundredths(100), Decimal::ONE);
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn rounds_half_cent_away_from_zero() {
            assert_eq!(round_to_cents(Decimal::new(1_125, 3)), Decimal::new(113, 2));
            assert_eq!(
                round_to_cents(Decimal::new(-1_125, 3)),
                Decimal::new(-113, 2)
            );
        }

        #[test]
        fn leaves_whole_cents_alone() {
            assert_eq!(round_to_cents(Decimal::new(1_999, 2)), Decimal::new(1_999, 2));
        }
    }

    mod adjustment {
        use super::*;

        #[test]
        fn rush_multiplier_adds_premium() {
            let fee = multiplier_adjustment(Decimal::new(500, 0), Decimal::new(125, 2)).unwrap();
            assert_eq!(fee, Decimal::new(125, 0));
        }

        #[test]
        fn discount_multiplier_is_negative() {
            let discount =
                multiplier_adjustment(Decimal::new(200, 0), Decimal::new(9, 1)).unwrap();
            assert_eq!(discount, Decimal::new(-20, 0));
        }

        #[test]
        fn neutral_multiplier_is_zero() {
            let none = multiplier_adjustment(Decimal::new(750, 0), Decimal::ONE).unwrap();
            assert!(none.is_zero());
        }

        #[test]
        fn non_positive_multiplier_rejected() {
            assert!(matches!(
                multiplier_adjustment(Decimal::new(1, 0), Decimal::ZERO),
                Err(ArithmeticError::InvalidValue(_))
            ));
        }

        #[test]
        fn result_is_rounded_to_cents() {
            // 0.15 * 99.99 = 14.9985
            let fee =
                multiplier_adjustment(Decimal::new(9_999, 2), Decimal::new(115, 2)).unwrap();
            assert_eq!(fee, Decimal::new(1_500, 2));
        }
    }
}

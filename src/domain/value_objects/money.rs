//! # Money
//!
//! Price and estimate types.
//!
//! - [`OptionPrice`] - catalog price of one option: a fixed amount or a
//!   custom-quote marker. "Free" (`Fixed(0)`) and "unpriceable"
//!   (`CustomQuote`) are distinct variants, never conflated.
//! - [`Estimate`] - a displayed total: an amount, or `Custom Quote` when any
//!   selection could not be priced.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::value_objects::money::Estimate;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(Estimate::Amount(Decimal::new(1080, 0)).to_string(), "$1,080.00");
//! assert_eq!(Estimate::CustomQuote.to_string(), "Custom Quote");
//! ```

use crate::domain::value_objects::arithmetic::{MONEY_SCALE, round_to_cents};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog price of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum OptionPrice {
    /// A known, non-negative amount.
    Fixed(Decimal),
    /// Cannot be priced automatically; requires manual follow-up.
    CustomQuote,
}

impl OptionPrice {
    /// Fixed price in whole currency units.
    #[inline]
    #[must_use]
    pub const fn dollars(amount: u32) -> Self {
        Self::Fixed(Decimal::from_parts(amount, 0, 0, false, 0))
    }

    /// Returns the amount, or `None` for a custom quote.
    #[inline]
    #[must_use]
    pub const fn amount(self) -> Option<Decimal> {
        match self {
            Self::Fixed(amount) => Some(amount),
            Self::CustomQuote => None,
        }
    }

    /// Returns true if this option needs a custom quote.
    #[inline]
    #[must_use]
    pub const fn is_custom_quote(self) -> bool {
        matches!(self, Self::CustomQuote)
    }
}

impl fmt::Display for OptionPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(amount) => f.write_str(&format_money(*amount)),
            Self::CustomQuote => write!(f, "Custom Quote"),
        }
    }
}

/// A total as presented to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Estimate {
    /// A computed amount.
    Amount(Decimal),
    /// At least one selection requires a custom quote.
    CustomQuote,
}

impl Estimate {
    /// Builds an estimate, masking the amount when a custom quote is pending.
    #[inline]
    #[must_use]
    pub const fn new(amount: Decimal, has_custom_quote: bool) -> Self {
        if has_custom_quote {
            Self::CustomQuote
        } else {
            Self::Amount(amount)
        }
    }

    /// Returns the amount, or `None` for a custom quote.
    #[inline]
    #[must_use]
    pub const fn amount(self) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(amount),
            Self::CustomQuote => None,
        }
    }

    /// Returns true if this estimate is a custom quote.
    #[inline]
    #[must_use]
    pub const fn is_custom_quote(self) -> bool {
        matches!(self, Self::CustomQuote)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => f.write_str(&format_money(*amount)),
            Self::CustomQuote => write!(f, "Custom Quote"),
        }
    }
}

/// Formats an amount as dollars with thousands separators and cents.
///
/// # Examples
///
/// ```
/// use quote_configurator::domain::value_objects::money::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(1_234_567, 1)), "$123,456.70");
/// assert_eq!(format_money(Decimal::new(-20, 0)), "-$20.00");
/// ```
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_to_cents(amount);
    rounded.rescale(MONEY_SCALE);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}

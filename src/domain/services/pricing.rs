//! # Service Pricing Calculator
//!
//! A single pure function, [`compute_pricing`], prices any service from its
//! catalog and the current [`Selections`].
//!
//! # Algorithm
//!
//! 1. Every priced dimension contributes the sum of its selected options,
//!    split into one-time and monthly buckets by each option's recurrence.
//!    Ids the catalog does not list contribute nothing.
//! 2. A custom-quote option contributes nothing and sets `has_custom_quote`.
//! 3. The timeline dimension is applied last. Its multiplier `m` produces an
//!    adjustment of `(m - 1) * subtotal`, rounded to cents, where the
//!    subtotal depends on the catalog's [`PricingPolicy`]:
//!    - [`PricingPolicy::OneTimeRush`]: one-time subtotal; total investment
//!      equals the one-time total.
//!    - [`PricingPolicy::CommittedTerm`]: monthly subtotal; total investment
//!      is the one-time total plus the monthly total for each committed month.
//!
//! Arithmetic failures never escape: they are logged and the result
//! degrades to a custom quote.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::catalog::catalog_for;
//! use quote_configurator::domain::entities::Selections;
//! use quote_configurator::domain::services::compute_pricing;
//! use quote_configurator::domain::value_objects::{DimensionKey, ServiceType};
//! use rust_decimal::Decimal;
//!
//! let mut selections = Selections::new();
//! selections.set_single(DimensionKey::ProjectType, "landing-page");
//! selections.set_single(DimensionKey::Timeline, "rush");
//!
//! let pricing = compute_pricing(catalog_for(ServiceType::Website), &selections);
//! assert_eq!(pricing.rush_fee(), Decimal::from(125));
//! assert_eq!(pricing.one_time_total, Decimal::from(625));
//! assert_eq!(pricing.one_time_estimate().to_string(), "$625.00");
//! ```

use crate::domain::catalog::{PricingPolicy, ServiceCatalog};
use crate::domain::entities::Selections;
use crate::domain::value_objects::arithmetic::multiplier_adjustment;
use crate::domain::value_objects::{
    ArithmeticResult, CheckedArithmetic, DimensionRole, Estimate, OptionPrice,
};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Term length used when a committed-term service has no duration selected.
pub const DEFAULT_TERM_MONTHS: u32 = 1;

/// Derived pricing of one service configuration.
///
/// Always a pure function of the selections; never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Sum of one-time option prices.
    pub one_time_subtotal: Decimal,
    /// Sum of monthly option prices.
    pub monthly_subtotal: Decimal,
    /// Timeline effect: positive for a rush premium, negative for a term discount.
    pub timeline_adjustment: Decimal,
    /// One-time amount due.
    pub one_time_total: Decimal,
    /// Monthly recurring amount.
    pub monthly_total: Decimal,
    /// Overall commitment.
    pub total_investment: Decimal,
    /// Committed months, for committed-term services.
    pub term_months: Option<u32>,
    /// At least one selection cannot be priced automatically.
    pub has_custom_quote: bool,
}

impl PricingResult {
    /// A result carrying no numeric information.
    #[must_use]
    pub fn custom_quote() -> Self {
        Self {
            has_custom_quote: true,
            ..Self::default()
        }
    }

    /// Premium added for a faster timeline, or zero.
    #[inline]
    #[must_use]
    pub fn rush_fee(&self) -> Decimal {
        self.timeline_adjustment.max(Decimal::ZERO)
    }

    /// Discount granted for a longer commitment, as a positive amount, or zero.
    #[inline]
    #[must_use]
    pub fn term_discount(&self) -> Decimal {
        (-self.timeline_adjustment).max(Decimal::ZERO)
    }

    /// One-time total as presented.
    #[must_use]
    pub const fn one_time_estimate(&self) -> Estimate {
        Estimate::new(self.one_time_total, self.has_custom_quote)
    }

    /// Monthly total as presented.
    #[must_use]
    pub const fn monthly_estimate(&self) -> Estimate {
        Estimate::new(self.monthly_total, self.has_custom_quote)
    }

    /// Total investment as presented.
    #[must_use]
    pub const fn total_estimate(&self) -> Estimate {
        Estimate::new(self.total_investment, self.has_custom_quote)
    }
}

/// Prices a service configuration.
#[must_use]
pub fn compute_pricing(catalog: &ServiceCatalog, selections: &Selections) -> PricingResult {
    match accumulate(catalog, selections) {
        Ok(result) => result,
        Err(error) => {
            tracing::error!(
                service = %catalog.service,
                %error,
                "pricing arithmetic failed, falling back to custom quote"
            );
            PricingResult {
                term_months: default_term(catalog.policy),
                ..PricingResult::custom_quote()
            }
        }
    }
}

fn default_term(policy: PricingPolicy) -> Option<u32> {
    match policy {
        PricingPolicy::OneTimeRush => None,
        PricingPolicy::CommittedTerm => Some(DEFAULT_TERM_MONTHS),
    }
}

fn accumulate(catalog: &ServiceCatalog, selections: &Selections) -> ArithmeticResult<PricingResult> {
    let mut one_time_subtotal = Decimal::ZERO;
    let mut monthly_subtotal = Decimal::ZERO;
    let mut has_custom_quote = false;

    let priced = catalog
        .dimensions
        .iter()
        .filter(|dimension| dimension.role == DimensionRole::Priced);
    for dimension in priced {
        for option in selections.effective_options(dimension) {
            match option.price {
                OptionPrice::CustomQuote => has_custom_quote = true,
                OptionPrice::Fixed(amount) if option.recurrence.is_monthly() => {
                    monthly_subtotal = monthly_subtotal.safe_add(amount)?;
                }
                OptionPrice::Fixed(amount) => {
                    one_time_subtotal = one_time_subtotal.safe_add(amount)?;
                }
            }
        }
    }

    let timeline = catalog
        .timeline_dimension()
        .and_then(|dimension| selections.effective_options(dimension).next());
    if timeline.is_some_and(|option| option.is_custom_quote()) {
        has_custom_quote = true;
    }
    let multiplier = timeline.map_or(Decimal::ONE, |option| option.multiplier);

    let result = match catalog.policy {
        PricingPolicy::OneTimeRush => {
            let adjustment = multiplier_adjustment(one_time_subtotal, multiplier)?;
            let one_time_total = one_time_subtotal.safe_add(adjustment)?;
            PricingResult {
                one_time_subtotal,
                monthly_subtotal,
                timeline_adjustment: adjustment,
                one_time_total,
                monthly_total: monthly_subtotal,
                total_investment: one_time_total,
                term_months: None,
                has_custom_quote,
            }
        }
        PricingPolicy::CommittedTerm => {
            let adjustment = multiplier_adjustment(monthly_subtotal, multiplier)?;
            let monthly_total = monthly_subtotal.safe_add(adjustment)?;
            let months = timeline
                .and_then(|option| option.term_months)
                .unwrap_or(DEFAULT_TERM_MONTHS);
            let recurring = monthly_total.safe_mul(Decimal::from(months))?;
            PricingResult {
                one_time_subtotal,
                monthly_subtotal,
                timeline_adjustment: adjustment,
                one_time_total: one_time_subtotal,
                monthly_total,
                total_investment: one_time_subtotal.safe_add(recurring)?,
                term_months: Some(months),
                has_custom_quote,
            }
        }
    };

    Ok(result)
}

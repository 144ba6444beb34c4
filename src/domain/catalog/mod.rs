//! # Option Catalogs
//!
//! Static, per-service tables of selectable options.
//!
//! Every [`ServiceType`] maps to exactly one [`ServiceCatalog`] through the
//! exhaustive [`catalog_for`] match, so adding a service forces a catalog.
//! A catalog lists its [`Dimension`]s in wizard order; each dimension takes
//! one wizard step and the step after the last dimension is the summary.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::catalog::catalog_for;
//! use quote_configurator::domain::value_objects::{DimensionKey, ServiceType};
//!
//! let website = catalog_for(ServiceType::Website);
//! let landing = website.option(DimensionKey::ProjectType, "landing-page").unwrap();
//! assert_eq!(landing.label, "Landing Page");
//! assert_eq!(website.summary_step(), website.max_steps());
//! ```

mod brand;
mod creative;
mod digital;
mod marketing;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::hundredths;
use crate::domain::value_objects::{
    DimensionKey, DimensionRole, OptionPrice, Recurrence, SelectionMode, ServiceType,
};
use rust_decimal::Decimal;
use serde::Serialize;

pub use brand::{BRAND_APPLICATIONS, BRAND_STRATEGY, CONTENT_STRATEGY, VISUAL_IDENTITY};
pub use creative::{ANIMATION, IMAGE, SOUND};
pub use digital::{APP, WEBSITE};
pub use marketing::{EMAIL_MARKETING, PAID_MEDIA, SOCIAL_MEDIA};

/// First wizard step.
pub const FIRST_STEP: u8 = 1;

/// One selectable choice within a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingOption {
    /// Stable key, unique within its dimension.
    pub id: &'static str,
    /// Display text.
    pub label: &'static str,
    /// Price, or custom quote.
    pub price: OptionPrice,
    /// Factor applied to a subtotal; only read on timeline dimensions.
    pub multiplier: Decimal,
    /// Whether the price is charged once or monthly.
    pub recurrence: Recurrence,
    /// Commitment length in months, for duration options.
    pub term_months: Option<u32>,
}

impl PricingOption {
    /// A one-time option priced in whole dollars.
    #[must_use]
    pub const fn fixed(id: &'static str, label: &'static str, dollars: u32) -> Self {
        Self {
            id,
            label,
            price: OptionPrice::dollars(dollars),
            multiplier: Decimal::ONE,
            recurrence: Recurrence::OneTime,
            term_months: None,
        }
    }

    /// A monthly-recurring option priced in whole dollars.
    #[must_use]
    pub const fn monthly(id: &'static str, label: &'static str, dollars: u32) -> Self {
        Self {
            recurrence: Recurrence::Monthly,
            ..Self::fixed(id, label, dollars)
        }
    }

    /// An option that cannot be priced automatically.
    #[must_use]
    pub const fn quote(id: &'static str, label: &'static str) -> Self {
        Self {
            price: OptionPrice::CustomQuote,
            ..Self::fixed(id, label, 0)
        }
    }

    /// A delivery-speed option carrying a multiplier in hundredths.
    #[must_use]
    pub const fn speed(id: &'static str, label: &'static str, multiplier: u32) -> Self {
        Self {
            multiplier: hundredths(multiplier),
            ..Self::fixed(id, label, 0)
        }
    }

    /// A commitment-length option carrying a month count and a multiplier.
    #[must_use]
    pub const fn term(id: &'static str, label: &'static str, months: u32, multiplier: u32) -> Self {
        Self {
            multiplier: hundredths(multiplier),
            term_months: Some(months),
            ..Self::fixed(id, label, 0)
        }
    }

    /// Returns true if this option needs a custom quote.
    #[inline]
    #[must_use]
    pub const fn is_custom_quote(&self) -> bool {
        self.price.is_custom_quote()
    }
}

/// One independent axis of choice within a service wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimension {
    /// Dimension identifier.
    pub key: DimensionKey,
    /// Display text.
    pub label: &'static str,
    /// Single or multi-select.
    pub mode: SelectionMode,
    /// Priced or timeline.
    pub role: DimensionRole,
    /// Options in display order.
    pub options: &'static [PricingOption],
}

impl Dimension {
    /// A single-select priced dimension.
    #[must_use]
    pub const fn single(
        key: DimensionKey,
        label: &'static str,
        options: &'static [PricingOption],
    ) -> Self {
        Self {
            key,
            label,
            mode: SelectionMode::Single,
            role: DimensionRole::Priced,
            options,
        }
    }

    /// A multi-select add-on dimension.
    #[must_use]
    pub const fn multiple(
        key: DimensionKey,
        label: &'static str,
        options: &'static [PricingOption],
    ) -> Self {
        Self {
            mode: SelectionMode::Multiple,
            ..Self::single(key, label, options)
        }
    }

    /// A single-select timeline or duration dimension.
    #[must_use]
    pub const fn timeline(
        key: DimensionKey,
        label: &'static str,
        options: &'static [PricingOption],
    ) -> Self {
        Self {
            role: DimensionRole::Timeline,
            ..Self::single(key, label, options)
        }
    }

    /// Looks up an option by id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&'static PricingOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Returns true if several options may be selected.
    #[inline]
    #[must_use]
    pub const fn is_multi_select(&self) -> bool {
        matches!(self.mode, SelectionMode::Multiple)
    }
}

/// Which subtotal the timeline multiplier adjusts, and how the total
/// investment is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingPolicy {
    /// One-shot project: the timeline multiplier scales the one-time
    /// subtotal (rush fee); total investment is the one-time total.
    OneTimeRush,
    /// Ongoing engagement: the duration multiplier scales the monthly
    /// subtotal (term discount); total investment is the one-time total
    /// plus the monthly total times the committed months.
    CommittedTerm,
}

/// The option catalog of one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCatalog {
    /// Service this catalog prices.
    pub service: ServiceType,
    /// Pricing policy for the timeline dimension.
    pub policy: PricingPolicy,
    /// Dimensions in wizard order.
    pub dimensions: &'static [Dimension],
}

impl ServiceCatalog {
    /// Looks up a dimension by key.
    #[must_use]
    pub fn dimension(&self, key: DimensionKey) -> Option<&'static Dimension> {
        self.dimensions.iter().find(|dimension| dimension.key == key)
    }

    /// Looks up an option by dimension and id.
    #[must_use]
    pub fn option(&self, key: DimensionKey, id: &str) -> Option<&'static PricingOption> {
        self.dimension(key).and_then(|dimension| dimension.option(id))
    }

    /// Looks up an option, reporting which reference was invalid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownDimension` if the service has no such
    /// dimension, or `DomainError::UnknownOption` if the id is not listed.
    pub fn require_option(
        &self,
        key: DimensionKey,
        id: &str,
    ) -> DomainResult<(&'static Dimension, &'static PricingOption)> {
        let dimension = self.dimension(key).ok_or(DomainError::UnknownDimension {
            service: self.service,
            dimension: key,
        })?;
        let option = dimension
            .option(id)
            .ok_or_else(|| DomainError::unknown_option(self.service, key, id))?;
        Ok((dimension, option))
    }

    /// Returns the timeline or duration dimension, if the service has one.
    #[must_use]
    pub fn timeline_dimension(&self) -> Option<&'static Dimension> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.role == DimensionRole::Timeline)
    }

    /// Number of wizard steps, summary included.
    #[must_use]
    pub fn max_steps(&self) -> u8 {
        u8::try_from(self.dimensions.len())
            .map_or(u8::MAX, |count| count.saturating_add(FIRST_STEP))
    }

    /// The summary step, which is always the last one.
    #[inline]
    #[must_use]
    pub fn summary_step(&self) -> u8 {
        self.max_steps()
    }

    /// Clamps a step number into `[1, max_steps]`.
    #[must_use]
    pub fn clamp_step(&self, step: i64) -> u8 {
        let clamped = step.clamp(i64::from(FIRST_STEP), i64::from(self.max_steps()));
        u8::try_from(clamped).unwrap_or(FIRST_STEP)
    }

    /// Returns the dimension edited at the given step, or `None` on the summary.
    #[must_use]
    pub fn dimension_at_step(&self, step: u8) -> Option<&'static Dimension> {
        let index = usize::from(step.checked_sub(FIRST_STEP)?);
        self.dimensions.get(index)
    }

    /// Returns the step at which a dimension is edited.
    #[must_use]
    pub fn step_of(&self, key: DimensionKey) -> Option<u8> {
        let index = self.dimensions.iter().position(|d| d.key == key)?;
        u8::try_from(index).ok()?.checked_add(FIRST_STEP)
    }
}

/// Returns the catalog for a service.
#[must_use]
pub fn catalog_for(service: ServiceType) -> &'static ServiceCatalog {
    match service {
        ServiceType::Website => &WEBSITE,
        ServiceType::App => &APP,
        ServiceType::Animation => &ANIMATION,
        ServiceType::Image => &IMAGE,
        ServiceType::Sound => &SOUND,
        ServiceType::PaidMedia => &PAID_MEDIA,
        ServiceType::SocialMedia => &SOCIAL_MEDIA,
        ServiceType::EmailMarketing => &EMAIL_MARKETING,
        ServiceType::BrandStrategy => &BRAND_STRATEGY,
        ServiceType::VisualIdentity => &VISUAL_IDENTITY,
        ServiceType::BrandApplications => &BRAND_APPLICATIONS,
        ServiceType::ContentStrategy => &CONTENT_STRATEGY,
    }
}

/// Standard commitment lengths shared by the retainer-style services.
pub(crate) const COMMITMENT_TERMS: &[PricingOption] = &[
    PricingOption::term("1-month", "1 Month", 1, 100),
    PricingOption::term("3-months", "3 Months", 3, 95),
    PricingOption::term("6-months", "6 Months", 6, 90),
    PricingOption::term("12-months", "12 Months", 12, 85),
];

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_service_maps_to_its_own_catalog() {
        for service in ServiceType::ALL {
            assert_eq!(catalog_for(service).service, service);
        }
    }

    #[test]
    fn dimension_keys_unique_within_catalog() {
        for service in ServiceType::ALL {
            let catalog = catalog_for(service);
            let keys: HashSet<DimensionKey> = catalog.dimensions.iter().map(|d| d.key).collect();
            assert_eq!(keys.len(), catalog.dimensions.len(), "{service}");
        }
    }

    #[test]
    fn option_ids_unique_within_dimension() {
        for service in ServiceType::ALL {
            for dimension in catalog_for(service).dimensions {
                let ids: HashSet<&str> = dimension.options.iter().map(|o| o.id).collect();
                assert_eq!(ids.len(), dimension.options.len(), "{service}/{}", dimension.key);
            }
        }
    }

    #[test]
    fn every_service_has_exactly_one_timeline_dimension() {
        for service in ServiceType::ALL {
            let count = catalog_for(service)
                .dimensions
                .iter()
                .filter(|d| d.role == DimensionRole::Timeline)
                .count();
            assert_eq!(count, 1, "{service}");
        }
    }

    #[test]
    fn timeline_dimensions_are_single_select_with_positive_multipliers() {
        for service in ServiceType::ALL {
            let timeline = catalog_for(service).timeline_dimension().unwrap();
            assert!(!timeline.is_multi_select());
            assert!(timeline.options.iter().all(|o| o.multiplier > Decimal::ZERO));
        }
    }

    #[test]
    fn priced_options_are_non_negative() {
        for service in ServiceType::ALL {
            for dimension in catalog_for(service).dimensions {
                for option in dimension.options {
                    if let Some(amount) = option.price.amount() {
                        assert!(amount >= Decimal::ZERO, "{}", option.id);
                    }
                }
            }
        }
    }

    #[test]
    fn committed_term_services_use_term_options() {
        for service in ServiceType::ALL {
            let catalog = catalog_for(service);
            let timeline = catalog.timeline_dimension().unwrap();
            let has_terms = timeline.options.iter().all(|o| o.term_months.is_some());
            match catalog.policy {
                PricingPolicy::CommittedTerm => {
                    assert!(has_terms, "{service}");
                    assert_eq!(timeline.key, DimensionKey::Duration);
                }
                PricingPolicy::OneTimeRush => {
                    assert_eq!(timeline.key, DimensionKey::Timeline);
                }
            }
        }
    }

    #[test]
    fn steps_follow_dimension_order() {
        let website = catalog_for(ServiceType::Website);
        assert_eq!(website.step_of(DimensionKey::ProjectType), Some(1));
        assert_eq!(
            website.dimension_at_step(1).unwrap().key,
            DimensionKey::ProjectType
        );
        assert!(website.dimension_at_step(website.summary_step()).is_none());
        assert!(website.dimension_at_step(0).is_none());
        assert_eq!(
            usize::from(website.max_steps()),
            website.dimensions.len() + 1
        );
    }

    #[test]
    fn clamp_step_bounds() {
        let app = catalog_for(ServiceType::App);
        assert_eq!(app.clamp_step(-4), 1);
        assert_eq!(app.clamp_step(0), 1);
        assert_eq!(app.clamp_step(3), 3);
        assert_eq!(app.clamp_step(999), app.max_steps());
    }

    #[test]
    fn require_option_reports_invalid_reference() {
        let website = catalog_for(ServiceType::Website);
        assert!(matches!(
            website.require_option(DimensionKey::Volume, "standard"),
            Err(DomainError::UnknownDimension { .. })
        ));
        assert!(matches!(
            website.require_option(DimensionKey::Timeline, "yesterday"),
            Err(DomainError::UnknownOption { .. })
        ));
        let (dimension, option) = website
            .require_option(DimensionKey::Timeline, "rush")
            .unwrap();
        assert_eq!(dimension.role, DimensionRole::Timeline);
        assert_eq!(option.multiplier, Decimal::new(125, 2));
    }

    #[test]
    fn commitment_terms_discount_longer_terms() {
        let multipliers: Vec<Decimal> = COMMITMENT_TERMS.iter().map(|o| o.multiplier).collect();
        assert!(multipliers.windows(2).all(|w| w[0] > w[1]));
    }
}

//! # Quote Snapshot
//!
//! The read-only projection of one service configuration that the unified
//! quote stores: totals, key labels and the custom-quote flag. It never
//! carries the selection map itself; editing goes back through the wizard.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::catalog::catalog_for;
//! use quote_configurator::domain::entities::{QuoteSnapshot, Selections};
//! use quote_configurator::domain::services::compute_pricing;
//! use quote_configurator::domain::value_objects::{DimensionKey, ServiceType};
//!
//! let catalog = catalog_for(ServiceType::App);
//! let mut selections = Selections::new();
//! selections.set_single(DimensionKey::Platform, "native-both");
//!
//! let pricing = compute_pricing(catalog, &selections);
//! let snapshot = QuoteSnapshot::capture(catalog, &selections, &pricing);
//!
//! assert!(snapshot.has_custom_quote());
//! assert_eq!(snapshot.one_time_estimate().to_string(), "Custom Quote");
//! assert_eq!(snapshot.highlights()[0].value, "Native iOS + Android");
//! ```

use crate::domain::catalog::ServiceCatalog;
use crate::domain::entities::Selections;
use crate::domain::services::pricing::PricingResult;
use crate::domain::value_objects::{Estimate, ServiceCategory, ServiceType, Timestamp};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A labelled summary line, e.g. `Platform: iOS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Highlight {
    /// Dimension label.
    pub dimension: String,
    /// Selected option labels, comma separated.
    pub value: String,
}

/// Summary of one configured service inside the unified quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    service_type: ServiceType,
    category: ServiceCategory,
    label: String,
    highlights: Vec<Highlight>,
    one_time_total: Decimal,
    monthly_total: Decimal,
    total_investment: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    term_months: Option<u32>,
    has_custom_quote: bool,
    saved_at: Timestamp,
}

impl QuoteSnapshot {
    /// Projects a priced configuration into a snapshot stamped now.
    #[must_use]
    pub fn capture(
        catalog: &ServiceCatalog,
        selections: &Selections,
        pricing: &PricingResult,
    ) -> Self {
        let highlights = catalog
            .dimensions
            .iter()
            .filter_map(|dimension| {
                let labels: Vec<&str> = selections
                    .effective_options(dimension)
                    .map(|option| option.label)
                    .collect();
                (!labels.is_empty()).then(|| Highlight {
                    dimension: dimension.label.to_owned(),
                    value: labels.join(", "),
                })
            })
            .collect();

        Self {
            service_type: catalog.service,
            category: catalog.service.category(),
            label: catalog.service.label().to_owned(),
            highlights,
            one_time_total: pricing.one_time_total,
            monthly_total: pricing.monthly_total,
            total_investment: pricing.total_investment,
            term_months: pricing.term_months,
            has_custom_quote: pricing.has_custom_quote,
            saved_at: Timestamp::now(),
        }
    }

    /// Replaces the save time.
    #[must_use]
    pub fn with_saved_at(mut self, saved_at: Timestamp) -> Self {
        self.saved_at = saved_at;
        self
    }

    /// Returns the service type.
    #[inline]
    #[must_use]
    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns the category the service is grouped under in summaries.
    #[inline]
    #[must_use]
    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    /// Returns the service display name.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the key selections in wizard order.
    #[inline]
    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Returns the numeric one-time total.
    #[inline]
    #[must_use]
    pub fn one_time_total(&self) -> Decimal {
        self.one_time_total
    }

    /// Returns the numeric monthly total.
    #[inline]
    #[must_use]
    pub fn monthly_total(&self) -> Decimal {
        self.monthly_total
    }

    /// Returns the numeric total investment.
    #[inline]
    #[must_use]
    pub fn total_investment(&self) -> Decimal {
        self.total_investment
    }

    /// Returns the committed months, for committed-term services.
    #[inline]
    #[must_use]
    pub fn term_months(&self) -> Option<u32> {
        self.term_months
    }

    /// Returns true if any selection needs a custom quote.
    #[inline]
    #[must_use]
    pub fn has_custom_quote(&self) -> bool {
        self.has_custom_quote
    }

    /// Returns when the snapshot was taken.
    #[inline]
    #[must_use]
    pub fn saved_at(&self) -> Timestamp {
        self.saved_at
    }

    /// One-time total as presented.
    #[must_use]
    pub fn one_time_estimate(&self) -> Estimate {
        Estimate::new(self.one_time_total, self.has_custom_quote)
    }

    /// Monthly total as presented.
    #[must_use]
    pub fn monthly_estimate(&self) -> Estimate {
        Estimate::new(self.monthly_total, self.has_custom_quote)
    }

    /// Total investment as presented.
    #[must_use]
    pub fn total_estimate(&self) -> Estimate {
        Estimate::new(self.total_investment, self.has_custom_quote)
    }

    /// Returns true if both snapshots describe the same quote, ignoring
    /// when they were taken.
    #[must_use]
    pub fn same_quote(&self, other: &Self) -> bool {
        self.service_type == other.service_type
            && self.category == other.category
            && self.label == other.label
            && self.highlights == other.highlights
            && self.one_time_total == other.one_time_total
            && self.monthly_total == other.monthly_total
            && self.total_investment == other.total_investment
            && self.term_months == other.term_months
            && self.has_custom_quote == other.has_custom_quote
    }
}

//! # Unified Quote Aggregator
//!
//! The session-wide registry of configured services.
//!
//! Each service contributes at most one [`QuoteSnapshot`]. Saving under an
//! already-configured service overwrites the entry in place, so the list
//! keeps the order in which services were first configured. Clearing an
//! absent service is a no-op.
//!
//! The aggregator is a cheap handle: clones share the same registry, which
//! lets every wizard store push into the one instance the summary reads.
//! State is written to the key-value store under [`UNIFIED_QUOTE_KEY`] after
//! each change; write failures are logged and otherwise ignored.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_configurator::application::services::UnifiedQuoteAggregator;
//! use quote_configurator::domain::catalog::catalog_for;
//! use quote_configurator::domain::entities::{QuoteSnapshot, Selections};
//! use quote_configurator::domain::services::compute_pricing;
//! use quote_configurator::domain::value_objects::ServiceType;
//! use quote_configurator::infrastructure::persistence::InMemoryKeyValueStore;
//!
//! let aggregator = UnifiedQuoteAggregator::load(Arc::new(InMemoryKeyValueStore::new()));
//! let catalog = catalog_for(ServiceType::Website);
//! let selections = Selections::new();
//! let snapshot = QuoteSnapshot::capture(catalog, &selections, &compute_pricing(catalog, &selections));
//!
//! aggregator.save_service_config(snapshot);
//! assert!(aggregator.is_configured(ServiceType::Website));
//! assert!(!aggregator.get_available_services().contains(&ServiceType::Website));
//! ```

use crate::domain::entities::QuoteSnapshot;
use crate::domain::value_objects::{
    ArithmeticResult, CheckedArithmetic, Estimate, QuoteRequestId, ServiceCategory, ServiceType,
    Timestamp,
};
use crate::infrastructure::persistence::{KeyValueStore, KeyValueStoreExt};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Storage key of the aggregator state.
pub const UNIFIED_QUOTE_KEY: &str = "unified-quote";

/// Persisted form of the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnifiedQuoteState {
    /// Snapshots in insertion order.
    #[serde(default)]
    pub configured: Vec<QuoteSnapshot>,
}

/// Sums across every configured service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedTotals {
    /// Sum of one-time totals.
    pub one_time: Decimal,
    /// Sum of monthly totals.
    pub monthly: Decimal,
    /// Sum of total investments.
    pub total_investment: Decimal,
    /// Any service needs a custom quote.
    pub has_custom_quote: bool,
    /// Number of configured services.
    pub service_count: usize,
}

impl CombinedTotals {
    /// One-time sum as presented.
    #[must_use]
    pub const fn one_time_estimate(&self) -> Estimate {
        Estimate::new(self.one_time, self.has_custom_quote)
    }

    /// Monthly sum as presented.
    #[must_use]
    pub const fn monthly_estimate(&self) -> Estimate {
        Estimate::new(self.monthly, self.has_custom_quote)
    }

    /// Total investment as presented.
    #[must_use]
    pub const fn total_estimate(&self) -> Estimate {
        Estimate::new(self.total_investment, self.has_custom_quote)
    }

    fn sum(snapshots: &[QuoteSnapshot]) -> ArithmeticResult<Self> {
        let mut totals = Self {
            service_count: snapshots.len(),
            ..Self::default()
        };
        for snapshot in snapshots {
            totals.one_time = totals.one_time.safe_add(snapshot.one_time_total())?;
            totals.monthly = totals.monthly.safe_add(snapshot.monthly_total())?;
            totals.total_investment = totals
                .total_investment
                .safe_add(snapshot.total_investment())?;
            totals.has_custom_quote |= snapshot.has_custom_quote();
        }
        Ok(totals)
    }
}

/// Serializable multi-service quote, ready for a submission transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Request identifier.
    pub id: QuoteRequestId,
    /// When the request was assembled.
    pub generated_at: Timestamp,
    /// Configured services in display-priority order.
    pub services: Vec<QuoteSnapshot>,
    /// Combined totals.
    pub totals: CombinedTotals,
}

/// Shared registry of per-service quote snapshots.
#[derive(Debug, Clone)]
pub struct UnifiedQuoteAggregator {
    configured: Arc<RwLock<Vec<QuoteSnapshot>>>,
    storage: Arc<dyn KeyValueStore>,
}

impl UnifiedQuoteAggregator {
    /// Opens the aggregator persisted in `storage`, empty if nothing is stored.
    ///
    /// Unreadable state is logged and treated as empty. If the stored list
    /// names a service twice, the later snapshot wins.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = match storage.load::<UnifiedQuoteState>(UNIFIED_QUOTE_KEY) {
            Ok(state) => state.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable unified quote");
                UnifiedQuoteState::default()
            }
        };

        let mut configured: Vec<QuoteSnapshot> = Vec::with_capacity(state.configured.len());
        for snapshot in state.configured {
            match configured
                .iter_mut()
                .find(|existing| existing.service_type() == snapshot.service_type())
            {
                Some(existing) => *existing = snapshot,
                None => configured.push(snapshot),
            }
        }
        debug!(services = configured.len(), "unified quote restored");

        Self {
            configured: Arc::new(RwLock::new(configured)),
            storage,
        }
    }

    /// Inserts or overwrites the snapshot of its service.
    ///
    /// Returns true if the stored state changed. Saving a snapshot that
    /// describes the same quote as the stored one keeps the stored one,
    /// including its save time.
    pub fn save_service_config(&self, snapshot: QuoteSnapshot) -> bool {
        let service = snapshot.service_type();
        let mut configured = self.configured.write();

        match configured
            .iter_mut()
            .find(|existing| existing.service_type() == service)
        {
            Some(existing) if existing.same_quote(&snapshot) => {
                debug!(%service, "snapshot unchanged, skipping save");
                return false;
            }
            Some(existing) => *existing = snapshot,
            None => configured.push(snapshot),
        }

        info!(%service, services = configured.len(), "service saved to unified quote");
        self.persist(&configured);
        true
    }

    /// Removes the snapshot of a service. Returns true if one existed.
    pub fn clear_service_config(&self, service: ServiceType) -> bool {
        let mut configured = self.configured.write();
        let before = configured.len();
        configured.retain(|snapshot| snapshot.service_type() != service);
        if configured.len() == before {
            debug!(%service, "service not configured, nothing to clear");
            return false;
        }

        info!(%service, services = configured.len(), "service cleared from unified quote");
        self.persist(&configured);
        true
    }

    /// Returns the snapshot of a service.
    #[must_use]
    pub fn get(&self, service: ServiceType) -> Option<QuoteSnapshot> {
        self.configured
            .read()
            .iter()
            .find(|snapshot| snapshot.service_type() == service)
            .cloned()
    }

    /// Returns true if the service has a snapshot.
    #[must_use]
    pub fn is_configured(&self, service: ServiceType) -> bool {
        self.configured
            .read()
            .iter()
            .any(|snapshot| snapshot.service_type() == service)
    }

    /// Returns every snapshot in insertion order.
    #[must_use]
    pub fn get_all_configured_services(&self) -> Vec<QuoteSnapshot> {
        self.configured.read().clone()
    }

    /// Returns every service without a snapshot, in catalog order.
    #[must_use]
    pub fn get_available_services(&self) -> Vec<ServiceType> {
        let configured = self.configured.read();
        ServiceType::ALL
            .into_iter()
            .filter(|service| {
                !configured
                    .iter()
                    .any(|snapshot| snapshot.service_type() == *service)
            })
            .collect()
    }

    /// Returns every snapshot ordered by service display priority.
    #[must_use]
    pub fn configured_by_priority(&self) -> Vec<QuoteSnapshot> {
        let mut snapshots = self.get_all_configured_services();
        snapshots.sort_by_key(|snapshot| snapshot.service_type().display_priority());
        snapshots
    }

    /// Returns snapshots grouped by service category, in category order.
    ///
    /// Categories without a configured service are left out; each group is
    /// ordered by display priority.
    #[must_use]
    pub fn configured_by_category(&self) -> Vec<(ServiceCategory, Vec<QuoteSnapshot>)> {
        let snapshots = self.configured_by_priority();
        ServiceCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let group: Vec<_> = snapshots
                    .iter()
                    .filter(|snapshot| snapshot.category() == category)
                    .cloned()
                    .collect();
                (!group.is_empty()).then_some((category, group))
            })
            .collect()
    }

    /// Returns the services of a category that have no snapshot yet.
    #[must_use]
    pub fn available_in(&self, category: ServiceCategory) -> Vec<ServiceType> {
        let configured = self.configured.read();
        category
            .services()
            .into_iter()
            .filter(|service| {
                !configured
                    .iter()
                    .any(|snapshot| snapshot.service_type() == *service)
            })
            .collect()
    }

    /// Returns the number of configured services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configured.read().len()
    }

    /// Returns true if no service is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sums every snapshot's totals.
    ///
    /// An overflowing sum is logged and reported as a custom quote.
    #[must_use]
    pub fn totals(&self) -> CombinedTotals {
        let configured = self.configured.read();
        CombinedTotals::sum(&configured).unwrap_or_else(|e| {
            error!(error = %e, "combined totals overflowed, reporting custom quote");
            CombinedTotals {
                has_custom_quote: true,
                service_count: configured.len(),
                ..CombinedTotals::default()
            }
        })
    }

    /// Assembles the outbound quote request.
    #[must_use]
    pub fn to_quote_request(&self) -> QuoteRequest {
        QuoteRequest {
            id: QuoteRequestId::new_v4(),
            generated_at: Timestamp::now(),
            services: self.configured_by_priority(),
            totals: self.totals(),
        }
    }

    fn persist(&self, configured: &[QuoteSnapshot]) {
        let state = UnifiedQuoteState {
            configured: configured.to_vec(),
        };
        if let Err(e) = self.storage.save(UNIFIED_QUOTE_KEY, &state) {
            warn!(error = %e, "failed to persist unified quote");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::catalog::catalog_for;
    use crate::domain::entities::Selections;
    use crate::domain::services::compute_pricing;
    use crate::domain::value_objects::DimensionKey;
    use crate::infrastructure::persistence::InMemoryKeyValueStore;

    fn snapshot(service: ServiceType, entries: &[(DimensionKey, &str)]) -> QuoteSnapshot {
        let catalog = catalog_for(service);
        let mut selections = Selections::new();
        for (key, id) in entries {
            selections.set_single(*key, *id);
        }
        QuoteSnapshot::capture(catalog, &selections, &compute_pricing(catalog, &selections))
    }

    fn website() -> QuoteSnapshot {
        snapshot(
            ServiceType::Website,
            &[(DimensionKey::ProjectType, "landing-page")],
        )
    }

    fn app() -> QuoteSnapshot {
        snapshot(ServiceType::App, &[(DimensionKey::Platform, "ios")])
    }

    fn aggregator() -> (InMemoryKeyValueStore, UnifiedQuoteAggregator) {
        let store = InMemoryKeyValueStore::new();
        let aggregator = UnifiedQuoteAggregator::load(Arc::new(store.clone()));
        (store, aggregator)
    }

    mod save {
        use super::*;

        #[test]
        fn inserts_new_service() {
            let (_, aggregator) = aggregator();
            assert!(aggregator.save_service_config(website()));
            assert_eq!(aggregator.len(), 1);
        }

        #[test]
        fn overwrite_keeps_position() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(website());
            aggregator.save_service_config(app());

            let rush = snapshot(
                ServiceType::Website,
                &[
                    (DimensionKey::ProjectType, "landing-page"),
                    (DimensionKey::Timeline, "rush"),
                ],
            );
            assert!(aggregator.save_service_config(rush));

            let all = aggregator.get_all_configured_services();
            assert_eq!(all.len(), 2);
            assert_eq!(all[0].service_type(), ServiceType::Website);
            assert_eq!(all[0].one_time_total(), Decimal::from(625));
            assert_eq!(all[1].service_type(), ServiceType::App);
        }

        #[test]
        fn equal_snapshot_is_a_no_op() {
            let (_, aggregator) = aggregator();
            let first = website().with_saved_at(Timestamp::from_millis(1_000).unwrap());
            aggregator.save_service_config(first.clone());

            assert!(!aggregator.save_service_config(website()));
            assert_eq!(aggregator.get(ServiceType::Website), Some(first));
        }

        #[test]
        fn persists_after_change() {
            let (store, aggregator) = aggregator();
            aggregator.save_service_config(website());

            let state: UnifiedQuoteState = store.load(UNIFIED_QUOTE_KEY).unwrap().unwrap();
            assert_eq!(state.configured.len(), 1);
        }
    }

    mod clear {
        use super::*;

        #[test]
        fn removes_entry() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(website());
            aggregator.save_service_config(app());

            assert!(aggregator.clear_service_config(ServiceType::Website));
            let remaining: Vec<_> = aggregator
                .get_all_configured_services()
                .iter()
                .map(QuoteSnapshot::service_type)
                .collect();
            assert_eq!(remaining, vec![ServiceType::App]);
        }

        #[test]
        fn absent_service_is_a_no_op() {
            let (store, aggregator) = aggregator();
            assert!(!aggregator.clear_service_config(ServiceType::Website));
            assert!(aggregator.is_empty());
            assert!(store.is_empty());
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn available_excludes_configured() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(app());

            let available = aggregator.get_available_services();
            assert_eq!(available.len(), ServiceType::ALL.len() - 1);
            assert!(!available.contains(&ServiceType::App));
        }

        #[test]
        fn groups_by_category() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(snapshot(ServiceType::EmailMarketing, &[]));
            aggregator.save_service_config(app());
            aggregator.save_service_config(website());

            let groups: Vec<_> = aggregator
                .configured_by_category()
                .into_iter()
                .map(|(category, group)| {
                    let services: Vec<_> = group.iter().map(QuoteSnapshot::service_type).collect();
                    (category, services)
                })
                .collect();
            assert_eq!(
                groups,
                vec![
                    (
                        ServiceCategory::Digital,
                        vec![ServiceType::Website, ServiceType::App]
                    ),
                    (ServiceCategory::Marketing, vec![ServiceType::EmailMarketing]),
                ]
            );
        }

        #[test]
        fn available_in_category_excludes_configured() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(app());

            assert_eq!(
                aggregator.available_in(ServiceCategory::Digital),
                vec![ServiceType::Website]
            );
            assert_eq!(aggregator.available_in(ServiceCategory::Creative).len(), 3);
        }

        #[test]
        fn priority_order_differs_from_insertion_order() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(snapshot(ServiceType::PaidMedia, &[]));
            aggregator.save_service_config(snapshot(ServiceType::BrandStrategy, &[]));
            aggregator.save_service_config(website());

            let order: Vec<_> = aggregator
                .configured_by_priority()
                .iter()
                .map(QuoteSnapshot::service_type)
                .collect();
            assert_eq!(
                order,
                vec![
                    ServiceType::BrandStrategy,
                    ServiceType::Website,
                    ServiceType::PaidMedia
                ]
            );
        }

        #[test]
        fn totals_sum_every_service() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(website());
            aggregator.save_service_config(app());
            aggregator.save_service_config(snapshot(
                ServiceType::EmailMarketing,
                &[
                    (DimensionKey::Volume, "standard"),
                    (DimensionKey::Duration, "6-months"),
                ],
            ));

            let totals = aggregator.totals();
            assert_eq!(totals.service_count, 3);
            assert_eq!(totals.one_time, Decimal::from(8500));
            assert_eq!(totals.monthly, Decimal::from(180));
            assert_eq!(totals.total_investment, Decimal::from(8500 + 1080));
            assert_eq!(totals.total_estimate().to_string(), "$9,580.00");
        }

        #[test]
        fn custom_quote_masks_combined_totals() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(website());
            aggregator.save_service_config(snapshot(
                ServiceType::App,
                &[(DimensionKey::Platform, "native-both")],
            ));

            let totals = aggregator.totals();
            assert!(totals.has_custom_quote);
            assert_eq!(totals.one_time, Decimal::from(500));
            assert_eq!(totals.one_time_estimate(), Estimate::CustomQuote);
        }

        #[test]
        fn quote_request_serializes() {
            let (_, aggregator) = aggregator();
            aggregator.save_service_config(app());
            aggregator.save_service_config(website());

            let request = aggregator.to_quote_request();
            assert_eq!(request.services[0].service_type(), ServiceType::Website);

            let json = serde_json::to_value(&request).unwrap();
            assert_eq!(json["totals"]["serviceCount"], 2);
            let back: QuoteRequest = serde_json::from_value(json).unwrap();
            assert_eq!(back, request);
        }
    }

    mod restore {
        use super::*;

        #[test]
        fn load_restores_insertion_order() {
            let (store, aggregator) = aggregator();
            aggregator.save_service_config(app());
            aggregator.save_service_config(website());

            let restored = UnifiedQuoteAggregator::load(Arc::new(store));
            assert_eq!(
                restored.get_all_configured_services(),
                aggregator.get_all_configured_services()
            );
        }

        #[test]
        fn reopening_keeps_persisted_entries_on_next_change() {
            let (store, aggregator) = aggregator();
            aggregator.save_service_config(app());

            let reopened = UnifiedQuoteAggregator::load(Arc::new(store.clone()));
            reopened.save_service_config(website());

            let persisted: UnifiedQuoteState = store.load(UNIFIED_QUOTE_KEY).unwrap().unwrap();
            let services: Vec<_> = persisted
                .configured
                .iter()
                .map(QuoteSnapshot::service_type)
                .collect();
            assert_eq!(services, vec![ServiceType::App, ServiceType::Website]);
        }

        #[test]
        fn duplicate_entries_collapse() {
            let store = InMemoryKeyValueStore::new();
            let older = website().with_saved_at(Timestamp::from_millis(0).unwrap());
            let newer = snapshot(
                ServiceType::Website,
                &[(DimensionKey::ProjectType, "e-commerce")],
            );
            store
                .save(
                    UNIFIED_QUOTE_KEY,
                    &UnifiedQuoteState {
                        configured: vec![older, app(), newer.clone()],
                    },
                )
                .unwrap();

            let restored = UnifiedQuoteAggregator::load(Arc::new(store));
            assert_eq!(restored.len(), 2);
            assert_eq!(restored.get(ServiceType::Website), Some(newer));
        }

        #[test]
        fn unreadable_state_starts_empty() {
            let store = InMemoryKeyValueStore::new();
            store
                .set(UNIFIED_QUOTE_KEY, serde_json::json!({"configured": 7}))
                .unwrap();

            let restored = UnifiedQuoteAggregator::load(Arc::new(store));
            assert!(restored.is_empty());
        }
    }
}

//! # Service Configuration Store
//!
//! Owns the wizard state of one service: the current step and the
//! selections, plus the pricing derived from them.
//!
//! Every mutation validates its reference against the service catalog,
//! silently ignores anything the catalog does not offer, recomputes the
//! pricing and persists `{currentStep, selections}` under the service's
//! `"<service>-builder"` key. Navigation clamps into `[1, max_steps]`;
//! landing on the summary step pushes the current snapshot into the
//! [`UnifiedQuoteAggregator`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_configurator::application::services::{
//!     ServiceConfigurationStore, UnifiedQuoteAggregator,
//! };
//! use quote_configurator::domain::value_objects::{DimensionKey, ServiceType};
//! use quote_configurator::infrastructure::persistence::InMemoryKeyValueStore;
//! use rust_decimal::Decimal;
//!
//! let storage = Arc::new(InMemoryKeyValueStore::new());
//! let aggregator = UnifiedQuoteAggregator::load(storage.clone());
//! let mut store = ServiceConfigurationStore::load(ServiceType::EmailMarketing, storage, aggregator.clone());
//!
//! store.select_option(DimensionKey::Volume, "standard");
//! store.select_option(DimensionKey::Duration, "6-months");
//! assert_eq!(store.pricing().total_investment, Decimal::from(1080));
//!
//! store.set_step(i64::from(store.max_steps()));
//! assert!(aggregator.is_configured(ServiceType::EmailMarketing));
//! ```

use crate::application::services::unified_quote::UnifiedQuoteAggregator;
use crate::domain::catalog::{Dimension, FIRST_STEP, ServiceCatalog, catalog_for};
use crate::domain::entities::{Choice, QuoteSnapshot, Selections};
use crate::domain::services::{PricingResult, compute_pricing};
use crate::domain::value_objects::{DimensionKey, ServiceType};
use crate::infrastructure::persistence::{KeyValueStore, KeyValueStoreExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Persisted wizard state.
///
/// Selections are keyed by plain strings so that documents written by an
/// older catalog still load; unknown references are dropped on restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuilderState {
    /// Wizard step, clamped on restore.
    #[serde(default)]
    pub current_step: i64,
    /// Selected option ids by dimension identifier.
    #[serde(default)]
    pub selections: BTreeMap<String, Choice>,
}

/// Wizard state and derived pricing of one service.
#[derive(Debug)]
pub struct ServiceConfigurationStore {
    catalog: &'static ServiceCatalog,
    current_step: u8,
    selections: Selections,
    pricing: PricingResult,
    storage: Arc<dyn KeyValueStore>,
    aggregator: UnifiedQuoteAggregator,
}

impl ServiceConfigurationStore {
    /// Creates a fresh configuration at the first step.
    ///
    /// Nothing is read from or written to `storage` until the first mutation.
    #[must_use]
    pub fn new(
        service: ServiceType,
        storage: Arc<dyn KeyValueStore>,
        aggregator: UnifiedQuoteAggregator,
    ) -> Self {
        let catalog = catalog_for(service);
        let selections = Selections::new();
        Self {
            catalog,
            current_step: FIRST_STEP,
            pricing: compute_pricing(catalog, &selections),
            selections,
            storage,
            aggregator,
        }
    }

    /// Restores the configuration persisted for `service`.
    ///
    /// Unreadable state is logged and replaced by a fresh configuration.
    /// Selections the catalog no longer offers are dropped and the step is
    /// clamped into range.
    #[must_use]
    pub fn load(
        service: ServiceType,
        storage: Arc<dyn KeyValueStore>,
        aggregator: UnifiedQuoteAggregator,
    ) -> Self {
        let key = service.storage_key();
        let mut store = Self::new(service, storage, aggregator);

        let state = match store.storage.load::<BuilderState>(&key) {
            Ok(Some(state)) => state,
            Ok(None) => return store,
            Err(e) => {
                warn!(%service, error = %e, "discarding unreadable builder state");
                return store;
            }
        };

        let (selections, dropped) = Selections::from_raw(
            store.catalog,
            state
                .selections
                .iter()
                .map(|(name, choice)| (name.as_str(), choice)),
        );
        if dropped > 0 {
            warn!(%service, dropped, "dropped stale selections from builder state");
        }

        store.current_step = store.catalog.clamp_step(state.current_step);
        store.selections = selections;
        store.recompute();
        debug!(%service, step = store.current_step, "builder state restored");
        store
    }

    /// Returns the service type.
    #[inline]
    #[must_use]
    pub fn service_type(&self) -> ServiceType {
        self.catalog.service
    }

    /// Returns the service catalog.
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'static ServiceCatalog {
        self.catalog
    }

    /// Returns the current wizard step.
    #[inline]
    #[must_use]
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// Returns the number of wizard steps, summary included.
    #[inline]
    #[must_use]
    pub fn max_steps(&self) -> u8 {
        self.catalog.max_steps()
    }

    /// Returns true on the summary step.
    #[must_use]
    pub fn is_summary_step(&self) -> bool {
        self.current_step == self.catalog.summary_step()
    }

    /// Returns the dimension edited at the current step, `None` on the summary.
    #[must_use]
    pub fn current_dimension(&self) -> Option<&'static Dimension> {
        self.catalog.dimension_at_step(self.current_step)
    }

    /// Returns the current selections.
    #[inline]
    #[must_use]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Returns the pricing derived from the current selections.
    #[inline]
    #[must_use]
    pub fn pricing(&self) -> &PricingResult {
        &self.pricing
    }

    /// Projects the current configuration into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> QuoteSnapshot {
        QuoteSnapshot::capture(self.catalog, &self.selections, &self.pricing)
    }

    /// Selects an option of a single-select dimension.
    ///
    /// Ignored if the dimension or option is not in the catalog, or if the
    /// dimension is multi-select.
    pub fn select_option(&mut self, dimension: DimensionKey, option_id: &str) {
        let Some(target) = self.lookup(dimension, option_id) else {
            return;
        };
        if target.is_multi_select() {
            debug!(service = %self.service_type(), %dimension, "select on multi-select dimension ignored");
            return;
        }
        if self.selections.single(dimension) == Some(option_id) {
            return;
        }

        self.selections.set_single(dimension, option_id);
        self.after_selection_change();
    }

    /// Adds or removes an option of a multi-select dimension.
    ///
    /// Ignored if the dimension or option is not in the catalog, or if the
    /// dimension is single-select.
    pub fn toggle_add_on(&mut self, dimension: DimensionKey, option_id: &str) {
        let Some(target) = self.lookup(dimension, option_id) else {
            return;
        };
        if !target.is_multi_select() {
            debug!(service = %self.service_type(), %dimension, "toggle on single-select dimension ignored");
            return;
        }

        self.selections.toggle(dimension, option_id);
        self.after_selection_change();
    }

    /// Removes whatever is selected in a dimension.
    pub fn clear_dimension(&mut self, dimension: DimensionKey) {
        if self.selections.clear(dimension) {
            self.after_selection_change();
        }
    }

    /// Moves to a step, clamped into `[1, max_steps]`.
    ///
    /// Landing on the summary step saves the snapshot to the unified quote.
    pub fn set_step(&mut self, step: i64) {
        let step = self.catalog.clamp_step(step);
        if step != self.current_step {
            self.current_step = step;
            self.persist();
        }
        if self.is_summary_step() {
            self.save_to_unified_quote();
        }
    }

    /// Advances one step, stopping at the summary.
    pub fn next_step(&mut self) {
        self.set_step(i64::from(self.current_step) + 1);
    }

    /// Goes back one step, stopping at the first.
    pub fn previous_step(&mut self) {
        self.set_step(i64::from(self.current_step) - 1);
    }

    /// Clears selections and returns to the first step.
    ///
    /// The persisted builder state is removed. The unified quote keeps its
    /// entry for this service; clearing that is the caller's decision.
    pub fn reset_builder(&mut self) {
        self.selections = Selections::new();
        self.current_step = FIRST_STEP;
        self.recompute();

        let service = self.service_type();
        if let Err(e) = self.storage.remove(&service.storage_key()) {
            warn!(%service, error = %e, "failed to remove builder state");
        }
        info!(%service, "builder reset");
    }

    /// Writes the current snapshot into the unified quote.
    ///
    /// Returns true if the unified quote changed; repeated calls without
    /// intervening edits return false.
    pub fn save_to_unified_quote(&self) -> bool {
        self.aggregator.save_service_config(self.snapshot())
    }

    fn lookup(&self, dimension: DimensionKey, option_id: &str) -> Option<&'static Dimension> {
        match self.catalog.require_option(dimension, option_id) {
            Ok((target, _)) => Some(target),
            Err(e) => {
                debug!(error = %e, "invalid selection reference ignored");
                None
            }
        }
    }

    fn after_selection_change(&mut self) {
        self.recompute();
        self.persist();
    }

    fn recompute(&mut self) {
        self.pricing = compute_pricing(self.catalog, &self.selections);
    }

    fn persist(&self) {
        let service = self.service_type();
        let state = BuilderState {
            current_step: i64::from(self.current_step),
            selections: self.selections.to_raw(),
        };
        if let Err(e) = self.storage.save(&service.storage_key(), &state) {
            warn!(%service, error = %e, "failed to persist builder state");
        }
    }
}

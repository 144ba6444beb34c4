//! # Configurator
//!
//! The explicit registry built once at start-up and handed to whatever
//! drives the wizards. It owns the persistence backend, the single shared
//! [`UnifiedQuoteAggregator`] and one [`ServiceConfigurationStore`] per
//! service, created on first visit from any persisted state.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::application::Configurator;
//! use quote_configurator::domain::value_objects::{DimensionKey, ServiceType};
//!
//! let mut configurator = Configurator::in_memory();
//!
//! let website = configurator.builder(ServiceType::Website);
//! website.select_option(DimensionKey::ProjectType, "landing-page");
//! website.save_to_unified_quote();
//!
//! assert_eq!(configurator.aggregator().len(), 1);
//!
//! configurator.clear_service(ServiceType::Website);
//! assert!(configurator.aggregator().is_empty());
//! ```

use crate::application::error::ApplicationResult;
use crate::domain::errors::DomainError;
use crate::application::services::{ServiceConfigurationStore, UnifiedQuoteAggregator};
use crate::config::AppConfig;
use crate::domain::value_objects::ServiceType;
use crate::infrastructure::persistence::{InMemoryKeyValueStore, KeyValueStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Session-wide registry of wizard stores and the unified quote.
#[derive(Debug)]
pub struct Configurator {
    storage: Arc<dyn KeyValueStore>,
    aggregator: UnifiedQuoteAggregator,
    builders: HashMap<ServiceType, ServiceConfigurationStore>,
}

impl Configurator {
    /// Creates a registry over `storage`, restoring the persisted unified quote.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let aggregator = UnifiedQuoteAggregator::load(Arc::clone(&storage));
        Self {
            storage,
            aggregator,
            builders: HashMap::new(),
        }
    }

    /// Creates a registry backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    /// Creates a registry over the backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Persistence` if the backend cannot be opened.
    pub fn from_config(config: &AppConfig) -> ApplicationResult<Self> {
        let storage = config.build_store()?;
        info!(backend = %config.storage.backend, "configurator ready");
        Ok(Self::new(storage))
    }

    /// Returns the wizard store of a service, restoring it on first visit.
    pub fn builder(&mut self, service: ServiceType) -> &mut ServiceConfigurationStore {
        let storage = &self.storage;
        let aggregator = &self.aggregator;
        self.builders.entry(service).or_insert_with(|| {
            ServiceConfigurationStore::load(service, Arc::clone(storage), aggregator.clone())
        })
    }

    /// Returns the wizard store of a service addressed by its kebab-case id,
    /// as used in wizard routes.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if `id` names no service.
    pub fn builder_named(&mut self, id: &str) -> ApplicationResult<&mut ServiceConfigurationStore> {
        let service: ServiceType = id.parse().map_err(DomainError::from)?;
        Ok(self.builder(service))
    }

    /// Returns the wizard store of a service if it has been visited.
    #[must_use]
    pub fn visited_builder(&self, service: ServiceType) -> Option<&ServiceConfigurationStore> {
        self.builders.get(&service)
    }

    /// Clears a service entirely: resets its wizard and removes it from the
    /// unified quote.
    pub fn clear_service(&mut self, service: ServiceType) {
        match self.builders.get_mut(&service) {
            Some(builder) => builder.reset_builder(),
            None => {
                if let Err(e) = self.storage.remove(&service.storage_key()) {
                    warn!(%service, error = %e, "failed to remove builder state");
                }
            }
        }
        self.aggregator.clear_service_config(service);
    }

    /// Returns the shared unified quote.
    #[inline]
    #[must_use]
    pub fn aggregator(&self) -> &UnifiedQuoteAggregator {
        &self.aggregator
    }

    /// Returns the persistence backend.
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::config::{StorageBackend, StorageConfig};
    use crate::domain::value_objects::DimensionKey;
    use rust_decimal::Decimal;

    #[test]
    fn builder_is_created_once() {
        let mut configurator = Configurator::in_memory();
        configurator
            .builder(ServiceType::Image)
            .select_option(DimensionKey::ImageType, "product");

        assert_eq!(
            configurator
                .builder(ServiceType::Image)
                .pricing()
                .one_time_total,
            Decimal::from(300)
        );
        assert!(configurator.visited_builder(ServiceType::Sound).is_none());
    }

    #[test]
    fn builder_named_resolves_service_ids() {
        let mut configurator = Configurator::in_memory();
        let builder = configurator.builder_named("paid-media").unwrap();
        assert_eq!(builder.service_type(), ServiceType::PaidMedia);
        assert!(configurator.visited_builder(ServiceType::PaidMedia).is_some());

        let err = configurator.builder_named("hologram").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Parse(_))
        ));
        assert_eq!(err.to_string(), "domain error: invalid ServiceType value: hologram");
    }

    #[test]
    fn builders_share_one_aggregator() {
        let mut configurator = Configurator::in_memory();
        configurator.builder(ServiceType::Website).save_to_unified_quote();
        configurator.builder(ServiceType::App).save_to_unified_quote();

        assert_eq!(configurator.aggregator().len(), 2);
    }

    #[test]
    fn clear_service_resets_and_removes() {
        let mut configurator = Configurator::in_memory();
        let sound = configurator.builder(ServiceType::Sound);
        sound.select_option(DimensionKey::SoundType, "jingle");
        sound.save_to_unified_quote();

        configurator.clear_service(ServiceType::Sound);
        assert!(!configurator.aggregator().is_configured(ServiceType::Sound));
        assert!(
            configurator
                .visited_builder(ServiceType::Sound)
                .unwrap()
                .selections()
                .is_empty()
        );
    }

    #[test]
    fn clear_unvisited_service_removes_persisted_state() {
        let storage = InMemoryKeyValueStore::new();
        {
            let mut configurator = Configurator::new(Arc::new(storage.clone()));
            configurator
                .builder(ServiceType::App)
                .select_option(DimensionKey::Platform, "ios");
        }
        assert!(storage.contains_key("app-builder"));

        let mut configurator = Configurator::new(Arc::new(storage.clone()));
        configurator.clear_service(ServiceType::App);
        assert!(!storage.contains_key("app-builder"));
    }

    #[test]
    fn state_survives_restart_on_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::File,
                directory: dir.path().to_path_buf(),
            },
            ..AppConfig::default()
        };

        {
            let mut configurator = Configurator::from_config(&config).unwrap();
            let email = configurator.builder(ServiceType::EmailMarketing);
            email.select_option(DimensionKey::Volume, "standard");
            email.select_option(DimensionKey::Duration, "6-months");
            email.set_step(i64::from(email.max_steps()));
        }

        let mut configurator = Configurator::from_config(&config).unwrap();
        let saved = configurator
            .aggregator()
            .get(ServiceType::EmailMarketing)
            .unwrap();
        assert_eq!(saved.total_investment(), Decimal::from(1080));

        let email = configurator.builder(ServiceType::EmailMarketing);
        assert!(email.is_summary_step());
        assert_eq!(email.pricing().monthly_total, Decimal::from(180));
    }
}

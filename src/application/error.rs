//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Wizard and aggregator operations never fail: invalid references are
//! ignored and storage failures are logged. These errors only surface at the
//! edges of a [`Configurator`](crate::application::Configurator): loading
//! configuration, opening the backend and resolving service ids.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)           - Identifier parsing and catalog lookups
//! ├── Persistence(PersistenceError) - Storage backend failures
//! └── Config(ConfigError)           - Configuration loading failures
//! ```
//!
//! # Examples
//!
//! ```
//! use quote_configurator::application::error::ApplicationError;
//! use quote_configurator::config::ConfigError;
//!
//! let err: ApplicationError = ConfigError::invalid("storage.directory is empty").into();
//! assert!(err.to_string().contains("storage.directory"));
//! ```

use crate::config::ConfigError;
use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::PersistenceError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from parsing or lookups.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Storage backend error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ApplicationError {
    /// Returns true if this error came from the storage backend.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DimensionKey, ServiceType};

    #[test]
    fn wraps_each_layer() {
        let domain: ApplicationError =
            DomainError::unknown_option(ServiceType::App, DimensionKey::Platform, "wasm").into();
        assert!(domain.to_string().starts_with("domain error:"));

        let persistence: ApplicationError = PersistenceError::invalid_key("a/b").into();
        assert!(persistence.is_persistence());

        let config: ApplicationError = ConfigError::invalid("bad").into();
        assert!(!config.is_persistence());
    }
}

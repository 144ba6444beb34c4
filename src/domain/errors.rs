//! # Domain Errors
//!
//! Error types for the domain layer.
//!
//! Pricing and selection never fail (invalid references are ignored and
//! unpriceable selections become custom quotes); these errors only surface
//! from parsing identifiers and from strict catalog lookups.

use crate::domain::value_objects::enums::ParseEnumError;
use crate::domain::value_objects::{DimensionKey, ServiceType};
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An enum could not be parsed from its string form.
    #[error(transparent)]
    Parse(#[from] ParseEnumError),

    /// The dimension is not part of the service's catalog.
    #[error("dimension {dimension} is not offered for {service}")]
    UnknownDimension {
        /// Service whose catalog was searched.
        service: ServiceType,
        /// Requested dimension.
        dimension: DimensionKey,
    },

    /// The option id is not listed in the dimension.
    #[error("option {option_id} is not listed under {service}/{dimension}")]
    UnknownOption {
        /// Service whose catalog was searched.
        service: ServiceType,
        /// Dimension searched.
        dimension: DimensionKey,
        /// Requested option id.
        option_id: String,
    },
}

impl DomainError {
    /// Creates an unknown option error.
    #[must_use]
    pub fn unknown_option(
        service: ServiceType,
        dimension: DimensionKey,
        option_id: impl Into<String>,
    ) -> Self {
        Self::UnknownOption {
            service,
            dimension,
            option_id: option_id.into(),
        }
    }

    /// Returns true if this error is an invalid selection reference.
    #[must_use]
    pub fn is_invalid_reference(&self) -> bool {
        matches!(
            self,
            Self::UnknownDimension { .. } | Self::UnknownOption { .. }
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

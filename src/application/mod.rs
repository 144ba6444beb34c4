//! # Application Layer
//!
//! Wizard stores, the unified quote and the registry that wires them to a
//! persistence backend.
//!
//! - [`Configurator`]: registry created once per session
//! - [`services`]: configuration store and unified quote aggregator
//! - [`error`]: application error types

pub mod configurator;
pub mod error;
pub mod services;

pub use configurator::Configurator;
pub use error::{ApplicationError, ApplicationResult};

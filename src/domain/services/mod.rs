//! # Domain Services
//!
//! Pure computations over catalogs and selections.
//!
//! ## Services
//!
//! - [`pricing::compute_pricing`]: prices one service configuration

pub mod pricing;

pub use pricing::{DEFAULT_TERM_MONTHS, PricingResult, compute_pricing};

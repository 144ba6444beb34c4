//! # Quote Configurator
//!
//! Pricing engine behind a set of multi-service configurator wizards.
//!
//! A visitor assembles a package per service (website, app, animation,
//! paid media, brand strategy, ...) step by step, sees a live estimate, and
//! collects every configured service into one unified quote with combined
//! one-time and monthly totals.
//!
//! ## Architecture
//!
//! - [`domain`]: static option catalogs, selections, snapshots and the pure
//!   pricing calculator
//! - [`application`]: per-service wizard stores, the unified quote
//!   aggregator and the [`Configurator`](application::Configurator) registry
//! - [`infrastructure`]: key-value persistence backends
//! - [`config`] and [`telemetry`]: layered settings and tracing set-up
//!
//! ## Pricing Model
//!
//! Every option carries a whole-dollar price or is a custom quote. Priced
//! dimensions sum into one-time and monthly buckets; the timeline dimension
//! then applies a multiplier, either to the one-time subtotal (rush fee for
//! one-shot projects) or to the monthly subtotal (discount for committed
//! terms). A custom-quote selection never turns into a zero: estimates
//! render as "Custom Quote" instead.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::application::Configurator;
//! use quote_configurator::domain::value_objects::{DimensionKey, ServiceType};
//!
//! let mut configurator = Configurator::in_memory();
//!
//! let email = configurator.builder(ServiceType::EmailMarketing);
//! email.select_option(DimensionKey::Volume, "standard");
//! email.select_option(DimensionKey::Duration, "6-months");
//! assert_eq!(email.pricing().monthly_estimate().to_string(), "$180.00");
//! assert_eq!(email.pricing().total_estimate().to_string(), "$1,080.00");
//! email.save_to_unified_quote();
//!
//! let totals = configurator.aggregator().totals();
//! assert_eq!(totals.service_count, 1);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

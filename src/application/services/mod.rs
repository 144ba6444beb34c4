//! # Application Services
//!
//! Stateful services driving the wizards.
//!
//! - [`ServiceConfigurationStore`]: wizard state of one service
//! - [`UnifiedQuoteAggregator`]: snapshots of every configured service

pub mod configuration_store;
pub mod unified_quote;

pub use configuration_store::{BuilderState, ServiceConfigurationStore};
pub use unified_quote::{
    CombinedTotals, QuoteRequest, UNIFIED_QUOTE_KEY, UnifiedQuoteAggregator, UnifiedQuoteState,
};

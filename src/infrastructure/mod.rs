//! # Infrastructure Layer
//!
//! Adapters for external concerns.
//!
//! - [`persistence`]: key-value storage backends

pub mod persistence;

//! # Domain Layer
//!
//! Catalogs, selections and pricing rules, free of any storage concern.
//!
//! - [`value_objects`]: identifiers, money and checked arithmetic
//! - [`catalog`]: the static option tables of every service
//! - [`entities`]: selection maps and quote snapshots
//! - [`services`]: the pricing calculator
//! - [`errors`]: domain error types

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};

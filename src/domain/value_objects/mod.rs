//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ServiceType`]: The configurable services
//! - [`DimensionKey`]: Pricing dimensions within a service
//! - [`QuoteRequestId`]: UUID of an exported quote request
//!
//! ## Money
//!
//! - [`OptionPrice`]: Fixed price or custom-quote marker
//! - [`Estimate`]: Displayed total, masked when a custom quote is pending
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - `ServiceCategory`: Grouping of services
//! - `Recurrence`: One-time or monthly
//! - `SelectionMode`: Single or multiple
//! - `DimensionRole`: Priced or timeline

pub mod arithmetic;
pub mod dimension;
pub mod enums;
pub mod ids;
pub mod money;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use dimension::DimensionKey;
pub use enums::{
    DimensionRole, ParseEnumError, Recurrence, SelectionMode, ServiceCategory, ServiceType,
};
pub use ids::QuoteRequestId;
pub use money::{Estimate, OptionPrice};
pub use timestamp::Timestamp;

//! # Domain Entities
//!
//! State that changes as a visitor works through a wizard.
//!
//! - [`Selections`]: selected option ids per dimension
//! - [`QuoteSnapshot`]: summary of one configured service

pub mod selections;
pub mod snapshot;

pub use selections::{Choice, Selections};
pub use snapshot::{Highlight, QuoteSnapshot};

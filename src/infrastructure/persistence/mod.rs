//! # Persistence Layer
//!
//! Durable key-value storage for wizard state and the unified quote.
//!
//! ## Port
//!
//! - [`KeyValueStore`]: `get` / `set` / `remove` of JSON documents
//!
//! ## Implementations
//!
//! - [`InMemoryKeyValueStore`]: process-local map
//! - [`JsonFileStore`]: one JSON file per key

pub mod in_memory;
pub mod json_file;
pub mod traits;

pub use in_memory::InMemoryKeyValueStore;
pub use json_file::JsonFileStore;
pub use traits::{KeyValueStore, KeyValueStoreExt, PersistenceError, PersistenceResult};

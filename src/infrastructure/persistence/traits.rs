//! # Key-Value Store Traits
//!
//! Port definitions for persistence abstraction.
//!
//! Wizard state and the unified quote survive restarts through a small
//! key-value contract: `get`, `set` and `remove` of JSON documents under
//! stable keys such as `"unified-quote"` or `"website-builder"`.
//! Implementations can use memory, the file system, or anything else.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::infrastructure::persistence::{
//!     InMemoryKeyValueStore, KeyValueStore, KeyValueStoreExt,
//! };
//!
//! let store = InMemoryKeyValueStore::new();
//! store.save("answer", &42_u32).unwrap();
//! assert_eq!(store.load::<u32>("answer").unwrap(), Some(42));
//! assert!(store.remove("answer").unwrap());
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error type for persistence operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The key cannot be used by this backend.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Reading or writing the underlying medium failed.
    #[error("I/O error for key {key}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PersistenceError {
    /// Creates an invalid key error.
    #[must_use]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is an invalid key error.
    #[must_use]
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Durable JSON key-value storage.
///
/// Writes are last-write-wins: two configurators sharing a backend simply
/// overwrite each other's documents.
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Reads the document stored under `key`.
    ///
    /// Returns `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backend cannot be read.
    fn get(&self, key: &str) -> PersistenceResult<Option<Value>>;

    /// Stores a document under `key`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backend cannot be written.
    fn set(&self, key: &str, value: Value) -> PersistenceResult<()>;

    /// Removes the document under `key`.
    ///
    /// Returns true if a document existed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backend cannot be written.
    fn remove(&self, key: &str) -> PersistenceResult<bool>;
}

/// Typed helpers over [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Reads and decodes the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Serialization` if the stored document does
    /// not decode as `T`, or any error from [`KeyValueStore::get`].
    fn load<T: DeserializeOwned>(&self, key: &str) -> PersistenceResult<Option<T>> {
        self.get(key)?
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| PersistenceError::serialization(format!("{key}: {e}")))
            })
            .transpose()
    }

    /// Encodes and stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Serialization` if `value` cannot be
    /// encoded, or any error from [`KeyValueStore::set`].
    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> PersistenceResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| PersistenceError::serialization(format!("{key}: {e}")))?;
        self.set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

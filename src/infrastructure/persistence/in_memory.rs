//! # In-Memory Key-Value Store
//!
//! In-memory implementation of [`KeyValueStore`].
//!
//! Uses a thread-safe `HashMap`. State lives as long as the store (and its
//! clones); suitable for tests and for sessions that need no durability.

use crate::infrastructure::persistence::traits::{KeyValueStore, PersistenceResult};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory implementation of [`KeyValueStore`].
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryKeyValueStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a document is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the stored keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Removes every document.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<Value>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> PersistenceResult<()> {
        self.entries.write().insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set("website-builder", json!({"currentStep": 2})).unwrap();

        assert_eq!(
            store.get("website-builder").unwrap(),
            Some(json!({"currentStep": 2}))
        );
        assert!(store.contains_key("website-builder"));
    }

    #[test]
    fn set_overwrites() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", json!(1)).unwrap();
        store.set("k", json!(2)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k").unwrap(), Some(json!(2)));
    }

    #[test]
    fn remove_reports_presence() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", json!(null)).unwrap();

        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
    }

    #[test]
    fn clones_share_state() {
        let store = InMemoryKeyValueStore::new();
        let other = store.clone();
        store.set("b", json!("x")).unwrap();
        store.set("a", json!("y")).unwrap();

        assert_eq!(other.keys(), vec!["a".to_owned(), "b".to_owned()]);
        other.clear();
        assert!(store.is_empty());
    }
}

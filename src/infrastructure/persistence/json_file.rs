//! # JSON File Key-Value Store
//!
//! File-system implementation of [`KeyValueStore`]: one pretty-printed
//! `<key>.json` document per key inside a directory.
//!
//! Keys are restricted to ASCII letters, digits, `-` and `_` so a key can
//! never escape the directory. Writes go to a temporary sibling first and
//! are renamed into place.

use crate::infrastructure::persistence::traits::{
    KeyValueStore, PersistenceError, PersistenceResult,
};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Longest accepted key.
pub const MAX_KEY_LEN: usize = 128;

const EXTENSION: &str = "json";

/// File-per-key implementation of [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `directory`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the directory cannot be created.
    pub fn open(directory: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)
            .map_err(|e| PersistenceError::io(directory.display().to_string(), e))?;
        Ok(Self { directory })
    }

    /// Returns the root directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        validate_key(key)?;
        Ok(self.directory.join(format!("{key}.{EXTENSION}")))
    }
}

fn validate_key(key: &str) -> PersistenceResult<()> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::invalid_key(key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<Value>> {
        let path = self.path_for(key)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistenceError::io(key, e)),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| PersistenceError::serialization(format!("{key}: {e}")))
    }

    fn set(&self, key: &str, value: Value) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        let contents = serde_json::to_string_pretty(&value)
            .map_err(|e| PersistenceError::serialization(format!("{key}: {e}")))?;
        let staging = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&staging, contents).map_err(|e| PersistenceError::io(key, e))?;
        fs::rename(&staging, &path).map_err(|e| PersistenceError::io(key, e))
    }

    fn remove(&self, key: &str) -> PersistenceResult<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PersistenceError::io(key, e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("state")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_directory() {
        let (_dir, store) = store();
        assert!(store.directory().is_dir());
    }

    #[test]
    fn missing_key_reads_none() {
        let (_dir, store) = store();
        assert_eq!(store.get("unified-quote").unwrap(), None);
    }

    #[test]
    fn set_get_remove() {
        let (_dir, store) = store();
        let doc = json!({"configured": []});

        store.set("unified-quote", doc.clone()).unwrap();
        assert!(store.directory().join("unified-quote.json").is_file());
        assert_eq!(store.get("unified-quote").unwrap(), Some(doc));

        assert!(store.remove("unified-quote").unwrap());
        assert!(!store.remove("unified-quote").unwrap());
        assert_eq!(store.get("unified-quote").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let (_dir, store) = store();
        let long = "k".repeat(MAX_KEY_LEN + 1);

        for key in ["", "../escape", "a/b", "dot.ted", long.as_str()] {
            let err = store.set(key, json!(1)).unwrap_err();
            assert!(err.is_invalid_key(), "{key}");
        }
    }

    #[test]
    fn corrupt_document_is_a_serialization_error() {
        let (_dir, store) = store();
        fs::write(store.directory().join("website-builder.json"), "{not json").unwrap();

        let err = store.get("website-builder").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn reopening_sees_previous_writes() {
        let (dir, store) = store();
        store.set("app-builder", json!({"currentStep": 3})).unwrap();

        let reopened = JsonFileStore::open(dir.path().join("state")).unwrap();
        assert_eq!(
            reopened.get("app-builder").unwrap(),
            Some(json!({"currentStep": 3}))
        );
    }
}

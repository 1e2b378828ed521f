//! File-backed key-value store.
//!
//! [`FileKeyValueStore`] persists the whole key-value map as one JSON file.
//! Every operation re-reads the file and every write rewrites it in full —
//! there is no in-memory cache, so the store always reflects the latest
//! on-disk state even when several processes share the file (last write
//! wins, no cross-process locking).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{StorageError, StorageResult};
use crate::traits::KeyValueStore;

/// A [`KeyValueStore`] backed by a single JSON file.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not created until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full map from disk.
    ///
    /// A missing file is an empty map. A corrupt file is also treated as an
    /// empty map (with a warning): reads degrade to absent keys and the
    /// next write replaces the file wholesale. Other I/O errors propagate.
    fn read_map(&self) -> StorageResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::Io(e)),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt store file; treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    /// Write the full map to disk, creating parent directories as needed.
    fn write_map(&self, map: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let mut map = self.read_map()?;
        let existed = map.remove(key).is_some();
        if existed {
            self.write_map(&map)?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileKeyValueStore {
        FileKeyValueStore::new(dir.path().join("store.json"))
    }

    #[test]
    fn get_from_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.get("cart").unwrap().is_none());
    }

    #[test]
    fn set_creates_file_and_get_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("cart", "[1,2]").unwrap();
        assert!(store.path().exists());
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        FileKeyValueStore::new(&path).set("k", "v").unwrap();

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn remove_deletes_key_and_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileKeyValueStore::new(&path);
        assert!(store.get("cart").unwrap().is_none());

        // The next write replaces the corrupt file with a valid one.
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/store.json");
        let store = FileKeyValueStore::new(&path);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}

//! File-backed key/value backend
//!
//! All keys live in one JSON object (`store.json`) inside the data directory.
//! The document is read once when the store is opened and rewritten in full
//! on every `set`, through a temporary file and a rename so a crash never
//! leaves a half-written document behind.

use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Name of the store document inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

/// Durable store persisted as a single JSON document
#[derive(Debug)]
pub struct FileStore {
    /// Path to the JSON document
    path: PathBuf,
    /// Cached copy of the document
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store under `data_dir`
    pub fn open(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let path = data_dir.join(STORE_FILE_NAME);
        let entries = Self::load_entries(&path)?;

        tracing::debug!(path = ?path, keys = entries.len(), "Opened file store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, treating a missing or corrupt file as empty.
    ///
    /// An existing file that cannot be used is moved aside first, so the
    /// next write never replaces the only copy of the user's data. When it
    /// cannot be moved aside the store refuses to open.
    fn load_entries(path: &Path) -> StoreResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let problem = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => return Ok(entries),
                Err(e) => format!("corrupt: {}", e),
            },
            Err(e) => format!("unreadable: {}", e),
        };

        let backup = Self::backup_path(path);
        tracing::warn!(
            path = ?path,
            backup = ?backup,
            problem = %problem,
            "Store file unusable, starting empty"
        );
        std::fs::rename(path, &backup)?;

        Ok(BTreeMap::new())
    }

    /// First free `store.json.corrupt`, `store.json.corrupt.1`, ... path
    fn backup_path(path: &Path) -> PathBuf {
        let first = path.with_extension("json.corrupt");
        if !first.exists() {
            return first;
        }

        (1u32..)
            .map(|n| path.with_extension(format!("json.corrupt.{}", n)))
            .find(|candidate| !candidate.exists())
            .unwrap_or(first)
    }

    /// Write the whole document atomically
    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");

        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        // The cache only changes once the document is on disk
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *entries = updated;

        tracing::trace!(key = %key, bytes = value.len(), "Persisted store key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_empty_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(store.get("todos").is_none());
        // Nothing is written until the first set
        assert!(!store.path().exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();

        store.set("theme", "dark").unwrap();
        assert!(nested.join(STORE_FILE_NAME).exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();

        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("notes", "line one\nline two").unwrap();
            store.set("theme", "dark").unwrap();
        }

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("notes").as_deref(), Some("line one\nline two"));
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_document_is_json_object_of_strings() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("todos", "[]").unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let doc: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(doc.get("todos").map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_corrupt_file_starts_empty_and_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(&path, "{{{ definitely not json").unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("todos").is_none());
        assert!(dir.path().join("store.json.corrupt").exists());

        // Next write replaces the corrupt document
        store.set("theme", "light").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("notes", "draft").unwrap();

        assert!(!dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_unreadable_file_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        let original = vec![b'{', 0xFF, 0xFE, b'}'];
        std::fs::write(&path, &original).unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("theme").is_none());
        store.set("theme", "dark").unwrap();

        let backup = std::fs::read(dir.path().join("store.json.corrupt")).unwrap();
        assert_eq!(backup, original);
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_repeated_corruption_keeps_every_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);

        std::fs::write(&path, "first broken").unwrap();
        FileStore::open(dir.path()).unwrap();
        std::fs::write(&path, "second broken").unwrap();
        FileStore::open(dir.path()).unwrap();

        let first = std::fs::read_to_string(dir.path().join("store.json.corrupt")).unwrap();
        let second = std::fs::read_to_string(dir.path().join("store.json.corrupt.1")).unwrap();
        assert_eq!(first, "first broken");
        assert_eq!(second, "second broken");
    }

    #[test]
    fn test_failed_write_leaves_cache_unchanged() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("theme", "light").unwrap();

        // A directory in the temp file's place makes the write fail
        std::fs::create_dir(dir.path().join("store.json.tmp")).unwrap();

        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}

//! Key-value string store with file locking.
//!
//! Values are opaque strings keyed by name, the same shape as browser local
//! storage. The file-backed store keeps every key in one JSON object on disk.

use crate::{Error, Result};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Key holding the serialized medication list
pub const MEDS_KEY: &str = "meds";

/// Key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Whole-value string storage
pub trait KeyValueStore {
    /// Read a value; `None` when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used by tests and dry runs
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path (the file is created on first write)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every entry with a shared lock
    ///
    /// A missing or empty file is an empty store. An unreadable or
    /// unparseable file is an error.
    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read = reader.read_to_string(&mut contents);
        file.unlock()?;
        read?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| Error::Store(format!("store {:?} is unreadable: {}", self.path, e)))
    }

    /// Atomically replace the store file: locked temp file, fsync, rename
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::Store(format!("store path {:?} has no parent", self.path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(entries)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} store keys to {:?}", entries.len(), self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    /// Reads never fail: a store that cannot be read has no values
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.read_entries() {
            Ok(mut entries) => Ok(entries.remove(key)),
            Err(e) => {
                tracing::warn!("{}. Treating as empty.", e);
                Ok(None)
            }
        }
    }

    /// Writes keep every other key, so they refuse to replace a file that
    /// could not be read
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(MEDS_KEY).unwrap(), None);

        store.set(MEDS_KEY, "[]").unwrap();
        assert_eq!(store.get(MEDS_KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_roundtrip_keeps_other_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::new(&path);
        store.set(THEME_KEY, "dark").unwrap();
        store.set(MEDS_KEY, "[]").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(THEME_KEY).unwrap(), Some("dark".to_string()));
        assert_eq!(reopened.get(MEDS_KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("nonexistent.json"));

        assert_eq!(store.get(MEDS_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupted_file_reads_empty_but_is_kept() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get(MEDS_KEY).unwrap(), None);

        assert!(matches!(store.set(THEME_KEY, "light"), Err(Error::Store(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ invalid json }");
    }

    #[test]
    fn test_file_store_empty_file_is_writable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "").unwrap();

        let mut store = FileStore::new(&path);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::new(&path);
        store.set(MEDS_KEY, "[]").unwrap();

        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "store.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only store.json, found extras: {:?}",
            extras
        );
    }
}

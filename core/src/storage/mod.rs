//! Storage slots - where the serialized configuration lives.
//!
//! A [`Storage`] is a string key-value store. The CLI uses [`FileStorage`]
//! (one JSON file per key), tests use [`MemoryStorage`], and the browser
//! frontend provides its own `localStorage` implementation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageResult;

/// Directory where slots are stored (relative to current dir)
pub const DEFAULT_STORAGE_DIR: &str = ".paypage";

/// Key-value access to persisted blobs.
///
/// `set` overwrites; there is no merge and no delete.
pub trait Storage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

// =============================================================================
// File Storage
// =============================================================================

/// Slots stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_STORAGE_DIR)
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;

        // Readers must never see a partial slot
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        log::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_missing_slot() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().join("nested"));
        assert_eq!(storage.get("yodl_config").unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrites() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::with_dir(dir.path().join("nested"));

        storage.set("yodl_config", "{\"a\":1}").unwrap();
        storage.set("yodl_config", "{\"b\":2}").unwrap();

        assert_eq!(storage.get("yodl_config").unwrap().as_deref(), Some("{\"b\":2}"));
        assert!(storage.slot_path("yodl_config").exists());
        assert!(!dir.path().join("nested/.yodl_config.json.tmp").exists());
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}

//! # JSON File Storage
//!
//! Key-value storage backed by a single JSON object file:
//!
//! ```json
//! {
//!   "attendanceRecords": "[{\"id\":\"25CL0001\", ...}]"
//! }
//! ```
//!
//! Every write rewrites the whole file through a temp file and a rename, so a
//! crash mid-write leaves the previous contents intact.

use anyhow::{anyhow, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::traits::KeyValueStorage;

#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorage {
    /// Open (or lazily create) the storage file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created storage directory: {:?}", parent);
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let items = serde_json::from_str(&content)?;
        debug!("Loaded key-value storage from {:?}", self.path);
        Ok(items)
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(items)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;
        debug!("Saved key-value storage to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
            info!("Removed storage key '{}'", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_storage() -> (JsonFileStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = JsonFileStorage::new(temp_dir.path().join("data").join("storage.json"))
            .expect("Failed to create storage");
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let (storage, _temp_dir) = setup_storage();
        assert_eq!(storage.get_item("attendanceRecords").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_values_persist_across_instances() {
        let (storage, _temp_dir) = setup_storage();
        storage.set_item("attendanceRecords", "[]").unwrap();

        let reopened = JsonFileStorage::new(storage.path()).unwrap();
        assert_eq!(reopened.get_item("attendanceRecords").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_only_touches_one_key() {
        let (storage, _temp_dir) = setup_storage();
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        storage.remove_item("a").unwrap();

        assert_eq!(storage.get_item("a").unwrap(), None);
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (storage, _temp_dir) = setup_storage();
        fs::write(storage.path(), "not json").unwrap();
        assert!(storage.get_item("a").is_err());
    }
}

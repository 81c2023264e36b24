//! In-memory key-value storage.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::KeyValueStorage;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| anyhow!("memory storage lock poisoned"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| anyhow!("memory storage lock poisoned"))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| anyhow!("memory storage lock poisoned"))?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }
}

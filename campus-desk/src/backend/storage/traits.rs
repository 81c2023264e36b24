//! # Storage Traits
//!
//! Abstraction over a browser-style key-value store so the domain layer can
//! work against different backends without modification.

use anyhow::Result;

/// String values stored under string keys. Writes replace the previous value
/// (last write wins).
pub trait KeyValueStorage: Send + Sync {
    /// Value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

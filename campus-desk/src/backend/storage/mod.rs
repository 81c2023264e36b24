//! # Storage
//!
//! Key-value persistence for the attendance tracker. The domain layer only sees
//! the [`KeyValueStorage`] trait; the in-memory backend serves tests and the
//! JSON-file backend keeps data across runs.

pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;

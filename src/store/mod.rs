//! Local configuration store
//!
//! A flat key-value view over a JSON document. Keys are dot-delimited paths
//! (`console.org`) into nested objects, so a whole subtree can be read,
//! overwritten or deleted with a single key.

mod file;
mod memory;
mod tree;

use serde_json::Value;

use crate::error::Result;

pub use file::FileConfigStore;
pub use memory::MemoryConfigStore;

/// Key-value access to persisted configuration
pub trait ConfigStore {
    /// Read the value stored at `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` at `key`, creating intermediate objects as needed
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove `key` and everything below it. Missing keys are not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

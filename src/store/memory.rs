//! In-memory config store

use serde_json::{Map, Value};

use crate::error::Result;

use super::tree::{delete_path, get_path, set_path};
use super::ConfigStore;

/// Config store that keeps its document in memory only
#[derive(Debug, Clone)]
pub struct MemoryConfigStore {
    root: Value,
}

impl Default for MemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// The whole document
    pub fn document(&self) -> &Value {
        &self.root
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        get_path(&self.root, key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        set_path(&mut self.root, key, value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        delete_path(&mut self.root, key);
        Ok(())
    }
}

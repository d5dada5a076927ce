//! Config file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::config::store as store_config;
use crate::error::{ConsoleError, Result};

use super::tree::{delete_path, get_path, set_path};
use super::ConfigStore;

/// Config store backed by a single JSON file (~/.consolectl/config.json)
///
/// The document is read once on open; every mutation rewrites the file.
pub struct FileConfigStore {
    config_path: PathBuf,
    root: Value,
}

impl FileConfigStore {
    /// Open the store at the default config path
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_config_path())
    }

    /// Open the store at `path`.
    /// A missing file yields an empty store; corrupt JSON is an error.
    pub fn open(path: PathBuf) -> Result<Self> {
        let root = Self::load(&path)?;
        Ok(Self {
            config_path: path,
            root,
        })
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(store_config::DIR_NAME)
            .join(store_config::FILE_NAME)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn load(path: &Path) -> Result<Value> {
        if !path.exists() {
            debug!("Config file {} not found, starting empty", path.display());
            return Ok(Value::Object(Map::new()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let root: Value = serde_json::from_str(&content).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e
            ))
        })?;

        if !root.is_object() {
            return Err(ConsoleError::Config(format!(
                "Config {} must contain a JSON object",
                path.display()
            )));
        }

        Ok(root)
    }

    /// Write the document to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConsoleError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.root)
            .map_err(|e| ConsoleError::Config(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Set 0600 permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                ConsoleError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        get_path(&self.root, key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        set_path(&mut self.root, key, value);
        self.save()
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if delete_path(&mut self.root, key) {
            self.save()
        } else {
            Ok(())
        }
    }
}

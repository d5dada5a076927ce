//! Common utilities for output formatters

use serde::Serialize;

use crate::error::Result;

/// Pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// YAML document without the trailing newline
pub fn to_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let yaml = serde_yml::to_string(data)?;
    Ok(yaml.trim_end().to_string())
}

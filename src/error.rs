use std::fmt;

use crate::selection::Level;

/// Custom error type for console operations
#[derive(Debug)]
pub enum ConsoleError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A console read failed; carries the entity that could not be retrieved
    RemoteFetch { entity: String },
    /// One or more required selection levels are unset
    IncompleteSelection(Vec<Level>),
    /// A requested entity does not exist
    NotFound(String),
    /// Failed to write a downloaded artifact
    Filesystem(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// YAML serialization error
    Yaml(String),
    /// Configuration error
    Config(String),
    /// Interactive prompt failed
    Prompt(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ConsoleError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ConsoleError::RemoteFetch { entity } => write!(f, "Error retrieving {}", entity),
            ConsoleError::IncompleteSelection(levels) => {
                let missing: Vec<String> = levels
                    .iter()
                    .map(|level| format!("No {} selected", level.label()))
                    .collect();
                write!(f, "{}", missing.join(", "))
            }
            ConsoleError::NotFound(msg) => write!(f, "{}", msg),
            ConsoleError::Filesystem(msg) => write!(f, "{}", msg),
            ConsoleError::TokenNotFound(msg) => write!(f, "{}", msg),
            ConsoleError::Credentials(msg) => write!(f, "{}", msg),
            ConsoleError::Json(msg) => write!(f, "JSON error: {}", msg),
            ConsoleError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            ConsoleError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ConsoleError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        ConsoleError::Http(err)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for ConsoleError {
    fn from(err: serde_yml::Error) -> Self {
        ConsoleError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Filesystem(err.to_string())
    }
}

impl From<dialoguer::Error> for ConsoleError {
    fn from(err: dialoguer::Error) -> Self {
        ConsoleError::Prompt(err.to_string())
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

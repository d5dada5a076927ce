//! Access token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{credentials, store as store_config};
use crate::error::{ConsoleError, Result};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct ConsoleCredentials {
    credentials: HashMap<String, ConsoleCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct ConsoleCredential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: Self::default_credentials_path(),
        }
    }

    /// Use a specific credentials file instead of ~/.consolectl/credentials.json
    #[cfg(test)]
    pub(crate) fn with_credentials_path(mut self, path: PathBuf) -> Self {
        self.credentials_path = Some(path);
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (CONSOLE_ACCESS_TOKEN, CONSOLE_TOKEN - in order)
    /// 3. Credentials file entry for the host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_credentials_file()
    }

    fn read_from_credentials_file(&self) -> Result<String> {
        let credentials_path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| ConsoleError::TokenNotFound(self.token_not_found_message(None)))?;

        let content = match fs::read_to_string(credentials_path) {
            Ok(content) => content,
            Err(_) => {
                return Err(ConsoleError::TokenNotFound(
                    self.token_not_found_message(Some(credentials_path)),
                ));
            }
        };

        let creds: ConsoleCredentials = serde_json::from_str(&content).map_err(|e| {
            ConsoleError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    credentials_path.display(),
                    self.host
                );
                cred.token.clone()
            })
            .ok_or_else(|| {
                ConsoleError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
            })
    }

    /// Single-line message listing every place that was checked
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No access token found for host '{}'. Pass --token or set one of [{}]{}",
            self.host, env_vars, creds_info
        )
    }

    fn default_credentials_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| {
            p.join(store_config::DIR_NAME)
                .join(credentials::FILE_NAME)
        })
    }
}

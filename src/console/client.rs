//! Console HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{ConsoleError, Result};

/// Console API client
pub struct ConsoleClient {
    client: Client,
    token: String,
    api_key: String,
    host: String,
}

impl ConsoleClient {
    /// Create a new console client
    ///
    /// `host` is either a bare host name (`developer.console.io`) or a full
    /// base URL (`http://127.0.0.1:8080`), which is then used verbatim.
    pub fn new(token: String, api_key: String, host: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            api_key,
            host,
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header(api::API_KEY_HEADER, &self.api_key)
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(ConsoleError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// GET `path` and decode the body
    pub(crate) async fn fetch<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// GET a single resource by path; `None` for 404
    pub(crate) async fn fetch_optional<T>(&self, path: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            404 => Ok(None),
            _ => self
                .parse_api_response(response, resource_label)
                .await
                .map(Some),
        }
    }
}

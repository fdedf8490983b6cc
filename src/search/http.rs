//! HTTP backend
//!
//! Sends the search request with reqwest. The query is added through reqwest's query
//! serializer, so `&`, `#` and spaces reach the backend intact.

use crate::config::BackendConfig;
use crate::search::provider::{BackendStatus, SearchBackend};
use crate::types::{SearchError, SearchResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

const SEARCH_PATH: &str = "search/";

pub struct HttpSearchBackend {
    client: Client,
    base_url: Url,
}

impl HttpSearchBackend {
    /// Create a backend client from configuration
    pub fn new(config: &BackendConfig) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| SearchError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: parse_base_url(&config.url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(path)
            .map_err(|e| SearchError::Other(format!("invalid endpoint {path}: {e}")))
    }
}

/// Parse the base URL, forcing a trailing slash so relative joins keep any path prefix.
fn parse_base_url(raw: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| SearchError::Other(format!("invalid backend URL {raw:?}: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let url = self.endpoint(SEARCH_PATH)?;
        info!(query = %query, "Sending search request");

        let response = self
            .client
            .get(url)
            .query(&[("query", query), ("expand", "true")])
            .send()
            .await
            .map_err(|e| {
                warn!("Search request failed to send: {}", e);
                SearchError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Backend rejected search request");
            return Err(SearchError::Backend {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(SearchError::from)?;
        debug!(bytes = body.len(), "Search response received");

        SearchResponse::from_slice(&body)
    }

    async fn health(&self) -> BackendStatus {
        let response = match self.client.get(self.base_url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Health check failed: {}", e);
                return BackendStatus::Unreachable;
            }
        };

        if response.status().is_success() {
            BackendStatus::Ready
        } else {
            debug!(status = response.status().as_u16(), "Health check returned error status");
            BackendStatus::Unreachable
        }
    }
}

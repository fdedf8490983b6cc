use crate::types::{SearchError, SearchResponse};
use async_trait::async_trait;

/// Reachability of the backend, as last checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Ready,
    Unreachable,
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search with query expansion enabled.
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;

    /// Check the backend root endpoint.
    async fn health(&self) -> BackendStatus;
}

//! Search Module
//!
//! Talks to the remote search backend:
//! - `GET /search/?query=...&expand=true` returns results, expanded queries and related items
//! - `GET /` answers `{"message": "API is running"}` and serves as a health check
//!
//! The [`SearchBackend`] trait is the seam between the orchestrator and the network.

pub mod http;
pub mod provider;

pub use http::HttpSearchBackend;
pub use provider::{BackendStatus, SearchBackend};

// kgsearch - terminal client for a knowledge-graph backed search service

pub mod config;
pub mod orchestrator;
pub mod output;
pub mod search;
pub mod tui;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use orchestrator::{InteractionState, SearchOrchestrator, SearchTicket};
pub use search::{BackendStatus, HttpSearchBackend, SearchBackend};
pub use types::{RelatedItem, SearchError, SearchResponse};

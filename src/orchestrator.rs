//! Search Orchestrator
//!
//! Owns the interaction state and maps each search outcome into it.
//!
//! A search is split in two halves so the TUI can run the network call on a background
//! task: [`SearchOrchestrator::begin`] clears the state and hands out a ticket,
//! [`SearchOrchestrator::complete`] applies the outcome for that ticket. Only the most
//! recently issued ticket is applied; outcomes of superseded searches are dropped.

use crate::search::SearchBackend;
use crate::types::{RelatedItem, SearchError, SearchResponse};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Everything the results view needs after a search settles
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionState {
    pub results: Vec<Value>,
    pub expanded_queries: Vec<String>,
    pub related_items: Vec<RelatedItem>,
    /// Empty when there is no error
    pub error: String,
}

impl InteractionState {
    fn clear(&mut self) {
        self.results.clear();
        self.expanded_queries.clear();
        self.related_items.clear();
        self.error.clear();
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// True when nothing at all would be displayed
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
            && self.expanded_queries.is_empty()
            && self.related_items.is_empty()
            && self.error.is_empty()
    }
}

/// Handle for one submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    state: InteractionState,
    generation: u64,
    pending: Option<u64>,
    last_query: Option<String>,
    completed_at: Option<DateTime<Local>>,
}

impl SearchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Whether the latest submitted search is still waiting for its outcome
    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    /// Start a search: reset all four state fields and issue a new ticket.
    pub fn begin(&mut self, query: &str) -> SearchTicket {
        self.state.clear();
        self.generation += 1;
        self.pending = Some(self.generation);
        self.last_query = Some(query.to_string());

        info!(query = %query, generation = self.generation, "Search started");
        SearchTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of a search.
    ///
    /// Returns `false` (and leaves the state untouched) when the ticket was superseded
    /// by a later `begin` or has already been completed.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchResponse, SearchError>,
    ) -> bool {
        if self.pending != Some(ticket.generation) {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Dropping outcome of superseded search"
            );
            return false;
        }
        self.pending = None;
        self.completed_at = Some(Local::now());

        match outcome {
            Ok(response) => {
                info!(
                    generation = ticket.generation,
                    results = response.results.len(),
                    expanded = response.expanded_queries.len(),
                    related = response.related_items.len(),
                    "Search completed"
                );
                self.state.results = response.results;
                self.state.expanded_queries = response.expanded_queries;
                self.state.related_items = response.related_items;
            }
            Err(e) => {
                warn!(generation = ticket.generation, "Search failed: {}", e);
                self.state.error = e.user_message();
            }
        }
        true
    }

    /// Run a complete search against `backend`, waiting for the outcome.
    pub async fn search<B>(&mut self, backend: &B, query: &str)
    where
        B: SearchBackend + ?Sized,
    {
        let ticket = self.begin(query);
        let outcome = backend.search(query).await;
        self.complete(ticket, outcome);
    }
}

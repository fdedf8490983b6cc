//! Application State
//!
//! Contains the main application state and logic for the TUI.

use crate::config::Config;
use crate::orchestrator::{SearchOrchestrator, SearchTicket};
use crate::search::{BackendStatus, SearchBackend};
use crate::tui::event::AppAction;
use crate::tui::widgets::{results, QueryInput};
use crate::types::{SearchError, SearchResponse};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Rows taken by header, search box and status bar, plus the results border
const CHROME_HEIGHT: u16 = 3 + 3 + 1 + 2;

/// Columns taken by the results border
const CHROME_WIDTH: u16 = 2;

/// Current view/screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Search,
    Help,
}

/// Events from background tasks
#[derive(Debug)]
pub enum AppEvent {
    SearchCompleted {
        ticket: SearchTicket,
        outcome: Result<SearchResponse, SearchError>,
    },
    BackendStatus(BackendStatus),
}

/// Main application state
pub struct App {
    pub config: Config,

    // UI State
    pub view: View,
    pub should_quit: bool,
    /// Quit was requested mid-search and waits for a second Ctrl+Q
    pub quit_pending: bool,
    pub input: QueryInput,
    pub scroll_offset: u16,
    pub max_scroll: u16,

    // Search State
    pub orchestrator: SearchOrchestrator,
    pub backend_status: BackendStatus,
    backend: Arc<dyn SearchBackend>,

    // Async communication
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, backend: Arc<dyn SearchBackend>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(100);

        Self {
            config,
            view: View::Search,
            should_quit: false,
            quit_pending: false,
            input: QueryInput::new(),
            scroll_offset: 0,
            max_scroll: 0,
            orchestrator: SearchOrchestrator::new(),
            backend_status: BackendStatus::Unknown,
            backend,
            event_rx,
            event_tx,
        }
    }

    /// Drain pending background events without waiting
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for one background event and apply it. Returns `false` once the channel closes.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchCompleted { ticket, outcome } => {
                if self.orchestrator.complete(ticket, outcome) {
                    self.scroll_offset = 0;
                }
            }
            AppEvent::BackendStatus(status) => {
                debug!(?status, "Backend status updated");
                self.backend_status = status;
            }
        }
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: AppAction) {
        if !matches!(action, AppAction::Quit | AppAction::Tick) {
            self.quit_pending = false;
        }

        match action {
            AppAction::Quit => {
                // A search in flight needs a second Ctrl+Q
                if self.orchestrator.is_searching() && !self.quit_pending {
                    self.quit_pending = true;
                    return;
                }
                self.should_quit = true;
            }
            AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::Submit => {
                if self.view == View::Search {
                    self.submit_search();
                }
            }
            AppAction::CheckBackend => self.check_backend(),
            AppAction::ToggleHelp => {
                self.view = if self.view == View::Help {
                    View::Search
                } else {
                    View::Help
                };
            }
            AppAction::Escape => {
                self.view = View::Search;
            }
            AppAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppAction::ScrollDown => {
                if self.scroll_offset < self.max_scroll {
                    self.scroll_offset += 1;
                }
            }
            AppAction::ScrollPageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            AppAction::ScrollPageDown => {
                self.scroll_offset = (self.scroll_offset + 10).min(self.max_scroll);
            }
            AppAction::Input(key) => {
                if self.view == View::Help {
                    // Any key closes help
                    self.view = View::Search;
                } else {
                    self.input.handle_key(key);
                }
            }
            AppAction::Tick => {}
        }
    }

    /// Submit the search box. Blank drafts are ignored.
    fn submit_search(&mut self) {
        let Some(query) = self.input.submit() else {
            return;
        };

        let ticket = self.orchestrator.begin(&query);
        self.scroll_offset = 0;
        self.max_scroll = 0;

        let backend = Arc::clone(&self.backend);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let outcome = backend.search(&query).await;
            tx.send(AppEvent::SearchCompleted { ticket, outcome }).await.ok();
        });
    }

    /// Check backend health in the background
    pub fn check_backend(&mut self) {
        info!("Checking backend status");
        let backend = Arc::clone(&self.backend);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let status = backend.health().await;
            tx.send(AppEvent::BackendStatus(status)).await.ok();
        });
    }

    /// Recompute the scroll limit for a terminal of `terminal_width` x `terminal_height`
    pub fn calculate_scroll_bounds(&mut self, terminal_width: u16, terminal_height: u16) {
        let content_height = results::results_height(
            self.orchestrator.state(),
            self.orchestrator.is_searching(),
            terminal_width.saturating_sub(CHROME_WIDTH),
        );
        let content_height = u16::try_from(content_height).unwrap_or(u16::MAX);
        self.update_scroll_bounds(content_height, terminal_height.saturating_sub(CHROME_HEIGHT));
    }

    /// Update max scroll based on content
    pub fn update_scroll_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.max_scroll = content_height.saturating_sub(viewport_height);
        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
        }
    }
}

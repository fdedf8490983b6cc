//! Terminal User Interface Module
//!
//! Interactive front end for the search backend, built with Ratatui.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  🔎 kgsearch Knowledge Graph Search  ● http://localhost:8000    │
//! ├─ Search ────────────────────────────────────────────────────────┤
//! │ Enter your search query...                                      │
//! ├─ Results ───────────────────────────────────────────────────────┤
//! │ Related Items:                                                  │
//! │ • Title                                                         │
//! │   Description                                                   │
//! └─────────────────────────────────────────────────────────────────┘
//!  Ready │ [Enter] Search [Ctrl+R] Check backend [Ctrl+Q] Quit [F1] Help
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, AppEvent, View};
pub use event::{AppAction, EventHandler};

use crate::search::SearchBackend;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run(config: crate::config::Config, backend: Arc<dyn SearchBackend>) -> anyhow::Result<()> {
    info!(backend = %config.backend.url, "Starting TUI mode");

    let mut terminal = init_terminal()?;

    let mut app = App::new(config, backend);
    app.check_backend();

    let mut events = EventHandler::new(TICK_RATE);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> anyhow::Result<()> {
    loop {
        let size = terminal.size()?;
        app.calculate_scroll_bounds(size.width, size.height);

        terminal.draw(|frame| ui::render(frame, app))?;

        // Apply finished searches and health checks
        app.poll_events();

        // Ticks arrive every TICK_RATE, so this never blocks for long
        let Some(action) = events.next().await else {
            break;
        };

        app.handle_action(action);

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}

//! UI Rendering
//!
//! Main UI layout and rendering logic for the TUI.

use crate::search::BackendStatus;
use crate::tui::app::{App, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    app.input.render(frame, chunks[1], app.view == View::Search);
    widgets::render_results(
        frame,
        chunks[2],
        app.orchestrator.state(),
        app.orchestrator.is_searching(),
        app.scroll_offset,
    );
    render_status_bar(frame, chunks[3], app);

    if app.view == View::Help {
        render_help(frame);
    }
}

/// Render the header with the backend status indicator
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let status_dot = match app.backend_status {
        BackendStatus::Ready => Span::styled(Icons::STATUS, Theme::success()),
        BackendStatus::Unreachable => Span::styled(Icons::STATUS, Theme::error()),
        BackendStatus::Unknown => Span::styled(Icons::STATUS, Theme::text_dim()),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ", Icons::SEARCH)),
        Span::styled("kgsearch", Theme::title()),
        Span::styled(" Knowledge Graph Search", Theme::text_secondary()),
        Span::raw("  "),
        status_dot,
        Span::raw(" "),
        Span::styled(app.config.backend.url.clone(), Theme::text_dim()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    frame.render_widget(title, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let orchestrator = &app.orchestrator;
    let state = orchestrator.state();

    let status = if app.quit_pending {
        Span::styled("Search running, Ctrl+Q again to quit", Theme::error())
    } else if orchestrator.is_searching() {
        Span::styled("Searching...", Theme::active())
    } else if state.has_error() {
        Span::styled("Search failed", Theme::error())
    } else if let (Some(query), Some(at)) = (orchestrator.last_query(), orchestrator.completed_at()) {
        Span::styled(
            format!("{} related for \"{}\" at {}", state.related_items.len(), query, at.format("%H:%M:%S")),
            Theme::success(),
        )
    } else {
        Span::styled("Ready", Theme::text_secondary())
    };

    let shortcuts = vec![
        Span::styled(" [Enter]", Theme::shortcut_key()),
        Span::styled(" Search ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+R]", Theme::shortcut_key()),
        Span::styled(" Check backend ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+Q]", Theme::shortcut_key()),
        Span::styled(" Quit ", Theme::shortcut_desc()),
        Span::styled("[F1]", Theme::shortcut_key()),
        Span::styled(" Help", Theme::shortcut_desc()),
    ];

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help modal
fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let shortcut = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(key, Theme::shortcut_key()),
            Span::styled(desc, Theme::text()),
        ])
    };

    let help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
        shortcut("Enter        ", "Search for the query"),
        shortcut("Ctrl+R       ", "Check backend status"),
        shortcut("Ctrl+Q       ", "Quit application"),
        shortcut("Ctrl+C       ", "Force quit"),
        shortcut("↑/↓          ", "Scroll results"),
        shortcut("PageUp/Down  ", "Scroll page"),
        shortcut("Esc          ", "Close help"),
        shortcut("F1           ", "Show this help"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Theme::text_dim())),
    ];

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::search::SearchBackend;
    use crate::tui::event::AppAction;
    use crate::types::{RelatedItem, SearchError, SearchResponse};
    use async_trait::async_trait;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    struct NoBackend;

    #[async_trait]
    impl SearchBackend for NoBackend {
        async fn search(&self, _query: &str) -> Result<SearchResponse, SearchError> {
            Err(SearchError::Connection("offline".into()))
        }

        async fn health(&self) -> BackendStatus {
            BackendStatus::Unreachable
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new(Config::default(), Arc::new(NoBackend));
        let view = draw(&app);

        assert!(view.contains("Enter your search query..."));
        assert!(view.contains("Ready"));
        assert!(!view.contains("Related Items:"));
    }

    #[test]
    fn test_related_items_drawn() {
        let mut app = App::new(Config::default(), Arc::new(NoBackend));
        let ticket = app.orchestrator.begin("scarf");
        app.orchestrator.complete(
            ticket,
            Ok(SearchResponse {
                related_items: vec![RelatedItem::new("Beanie", "Knitted hat")],
                ..Default::default()
            }),
        );

        let view = draw(&app);
        assert!(view.contains("Related Items:"));
        assert!(view.contains("Beanie"));
        assert!(view.contains("Knitted hat"));
        assert!(view.find("Beanie") < view.find("Knitted hat"));
    }

    #[test]
    fn test_error_drawn() {
        let mut app = App::new(Config::default(), Arc::new(NoBackend));
        let ticket = app.orchestrator.begin("scarf");
        app.orchestrator
            .complete(ticket, Err(SearchError::Connection("offline".into())));

        let view = draw(&app);
        assert!(view.contains("Connection problem: Unable to reach the backend."));
        assert!(view.contains("Search failed"));
    }

    #[test]
    fn test_searching_indicator() {
        let mut app = App::new(Config::default(), Arc::new(NoBackend));
        app.orchestrator.begin("scarf");

        assert!(draw(&app).contains("Searching..."));
    }

    #[test]
    fn test_quit_prompt_drawn() {
        let mut app = App::new(Config::default(), Arc::new(NoBackend));
        app.orchestrator.begin("scarf");
        app.handle_action(AppAction::Quit);

        assert!(draw(&app).contains("Ctrl+Q again to quit"));
        assert!(!app.should_quit);
    }
}

//! Query Input Widget
//!
//! Single-line search box. Enter submits instead of inserting a newline.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::{Input, Key, TextArea};

pub const PLACEHOLDER: &str = "Enter your search query...";

pub struct QueryInput {
    textarea: TextArea<'static>,
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryInput {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        let mut textarea = TextArea::new(vec![text.to_string()]);
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Theme::placeholder());
        textarea.move_cursor(tui_textarea::CursorMove::End);
        Self { textarea }
    }

    /// Current draft, exactly as typed
    pub fn text(&self) -> String {
        self.textarea.lines().concat()
    }

    /// Feed a key to the editor. Line breaks are swallowed.
    pub fn handle_key(&mut self, input: impl Into<Input>) {
        match input.into() {
            Input { key: Key::Enter, .. } => {}
            Input {
                key: Key::Char('m' | 'j'),
                ctrl: true,
                ..
            } => {}
            input => {
                self.textarea.input(input);
            }
        }
    }

    /// The query to search for, or `None` when the draft is blank.
    ///
    /// The draft is returned untrimmed and stays in the box.
    pub fn submit(&self) -> Option<String> {
        let text = self.text();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(if focused {
                Theme::border_focused()
            } else {
                Theme::border()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(&self.textarea, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_str(input: &mut QueryInput, s: &str) {
        for c in s.chars() {
            input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_blank_draft_is_discarded() {
        assert_eq!(QueryInput::new().submit(), None);

        let mut input = QueryInput::new();
        type_str(&mut input, "   \t ");
        assert_eq!(input.submit(), None);
    }

    #[test]
    fn test_submit_returns_raw_text_and_keeps_draft() {
        let mut input = QueryInput::new();
        type_str(&mut input, "  red dress ");

        assert_eq!(input.submit().as_deref(), Some("  red dress "));
        assert_eq!(input.text(), "  red dress ");
    }

    #[test]
    fn test_enter_does_not_break_line() {
        let mut input = QueryInput::new();
        type_str(&mut input, "red");
        input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        input.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));
        type_str(&mut input, " dress");

        assert_eq!(input.text(), "red dress");
    }

    #[test]
    fn test_backspace_edits() {
        let mut input = QueryInput::with_text("boots");
        input.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input.text(), "boot");
    }
}

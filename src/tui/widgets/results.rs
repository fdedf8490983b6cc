//! Results Widget
//!
//! Pure rendering of the interaction state: error line, primary results, related items.

use crate::orchestrator::InteractionState;
use crate::tui::theme::{Icons, Theme};
use crate::types::RelatedItem;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

pub const RELATED_HEADING: &str = "Related Items:";

/// Primary results are collected but not displayed yet.
pub fn primary_results_lines(_results: &[Value]) -> Vec<Line<'static>> {
    Vec::new()
}

/// Heading plus title and description per item, in input order. Empty input yields no lines.
pub fn related_items_lines(items: &[RelatedItem]) -> Vec<Line<'static>> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(items.len() * 2 + 1);
    lines.push(Line::from(Span::styled(RELATED_HEADING, Theme::heading())));

    for item in items {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", Icons::BULLET), Theme::bullet()),
            Span::styled(item.title.clone(), Theme::item_title()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(item.description.clone(), Theme::text()),
        ]));
    }

    lines
}

/// Every line of the results pane for `state`
pub fn results_lines(state: &InteractionState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if state.has_error() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", Icons::ERROR), Theme::error()),
            Span::styled(state.error.clone(), Theme::error()),
        ]));
        lines.push(Line::from(""));
    }

    lines.extend(primary_results_lines(&state.results));
    lines.extend(related_items_lines(&state.related_items));
    lines
}

/// The results pane body, wrapped to the pane width
fn results_paragraph(state: &InteractionState, searching: bool) -> Paragraph<'static> {
    let mut lines = results_lines(state);
    if lines.is_empty() && searching {
        lines.push(Line::from(Span::styled("Searching...", Theme::text_dim())));
    }

    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// Rows the pane body occupies once wrapped to `width` columns
pub fn results_height(state: &InteractionState, searching: bool, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    results_paragraph(state, searching).line_count(width)
}

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    state: &InteractionState,
    searching: bool,
    scroll_offset: u16,
) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = results_paragraph(state, searching).scroll((scroll_offset, 0));
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_single_related_item() {
        let lines = related_items_lines(&[RelatedItem::new("A", "B")]);
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(text, vec!["Related Items:", "• A", "  B"]);
    }

    #[test]
    fn test_empty_related_items_render_nothing() {
        assert!(related_items_lines(&[]).is_empty());
        assert!(results_lines(&InteractionState::default()).is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let items = vec![
            RelatedItem::new("Scarf", "Wool"),
            RelatedItem::new("Scarf", "Wool"),
            RelatedItem::new("Gloves", "Leather"),
        ];
        let text: Vec<String> = related_items_lines(&items).iter().map(plain).collect();
        assert_eq!(
            text,
            vec!["Related Items:", "• Scarf", "  Wool", "• Scarf", "  Wool", "• Gloves", "  Leather"]
        );
    }

    #[test]
    fn test_primary_results_not_rendered() {
        let state = InteractionState {
            results: vec![json!({"item": {"title": "hidden"}})],
            ..Default::default()
        };
        assert!(results_lines(&state).is_empty());
    }

    #[test]
    fn test_height_counts_wrapped_rows() {
        let state = InteractionState {
            related_items: vec![RelatedItem::new("Coat", "x".repeat(100))],
            ..Default::default()
        };
        // Heading, title, then a 102-column description over 50 columns
        assert!(results_height(&state, false, 50) >= 5);
        assert_eq!(results_height(&state, false, 200), 3);
        assert_eq!(results_height(&InteractionState::default(), false, 50), 0);
        assert_eq!(results_height(&InteractionState::default(), true, 50), 1);
    }

    #[test]
    fn test_error_precedes_sections() {
        let state = InteractionState {
            error: "Backend could not process the request".into(),
            ..Default::default()
        };
        let lines = results_lines(&state);
        assert!(plain(&lines[0]).contains("Backend could not process the request"));
    }
}

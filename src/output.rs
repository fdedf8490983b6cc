//! Output formatting for one-shot searches.
//!
//! Human-readable output mirrors the TUI: the error line if any, then related items.
//! JSON output carries the whole interaction state for scripting.

use crate::orchestrator::InteractionState;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    #[serde(flatten)]
    state: &'a InteractionState,
}

/// Formats the interaction state as pretty JSON.
pub fn format_json(query: &str, state: &InteractionState) -> String {
    let output = JsonOutput { query, state };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the interaction state for terminal output.
pub fn format_human(state: &InteractionState) -> String {
    let mut out = String::new();

    if state.has_error() {
        let _ = writeln!(out, "Error: {}", state.error);
    }

    if !state.related_items.is_empty() {
        out.push_str("Related Items:\n");
        for item in &state.related_items {
            let _ = writeln!(out, "  - {}", item.title);
            let _ = writeln!(out, "    {}", item.description);
        }
    }

    out
}

//! TUI Widgets
//!
//! The search box and the results pane.

pub mod query_input;
pub mod results;

pub use query_input::QueryInput;
pub use results::render_results;

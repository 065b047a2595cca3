//! Ratatui widgets for the typeahead TUI.

pub mod results_panel;
pub mod search_input;
pub mod status_bar;

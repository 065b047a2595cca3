//! Status bar — one line at the bottom: source, machine state, key hints.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use typeahead_core::Snapshot;

const HINTS: &str = "↑↓ highlight · ⏎ pick · Esc close/reset · Tab focus · ^C quit";

pub struct StatusBar<'a> {
    snapshot: &'a Snapshot,
    source: &'a str,
    chosen: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(snapshot: &'a Snapshot, source: &'a str, theme: &'a Theme) -> Self {
        Self { snapshot, source, chosen: None, theme }
    }

    /// Label of the last picked hit.
    pub fn chosen(mut self, label: Option<&'a str>) -> Self {
        self.chosen = label;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.status_bar);

        let hints_width = u16::try_from(HINTS.chars().count()).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(hints_width)])
            .split(area);

        let mut left = vec![Span::raw(format!(" [{}] {}", self.source, self.snapshot))];
        if let Some(label) = self.chosen {
            left.push(Span::raw(format!(" · picked {label:?}")));
        }
        Paragraph::new(Line::from(left)).render(chunks[0], buf);
        Paragraph::new(Line::from(Span::styled(HINTS, self.theme.status_hint)))
            .render(chunks[1], buf);
    }
}

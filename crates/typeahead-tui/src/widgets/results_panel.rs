//! Results panel — the drop-down list of hits under the search input.
//!
//! Rows render the hit's highlighted form, with spans between the source's
//! highlight tags drawn in the theme's `matched` style. The panel shows at
//! most `max_rows` hits at once and scrolls so the highlighted row stays in
//! view.
//!
//! # Mouse mapping
//!
//! The inner area and scroll offset of the last render are cached in
//! [`ResultsPanelState`], so [`ResultsPanelState::row_at`] can turn a pointer
//! position into a hit index between frames.

use std::cell::Cell;

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use typeahead_core::Hit;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultsPanelState {
    /// Index of the first visible hit.
    offset: Cell<usize>,
    /// Inner (border-less) area of the last render; zero-sized when hidden.
    last_inner: Cell<Rect>,
}

impl ResultsPanelState {
    pub fn offset(&self) -> usize {
        self.offset.get()
    }

    /// Hit index under terminal cell (`column`, `row`), if the panel was
    /// rendered there last frame. The caller still checks it against the
    /// current hit count.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.last_inner.get();
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        Some(self.offset.get() + usize::from(row - inner.y))
    }

    /// Forget the last render, e.g. when the panel is not drawn this frame.
    pub fn hide(&self) {
        self.last_inner.set(Rect::default());
        self.offset.set(0);
    }
}

/// First visible index so that `highlighted` is in a window of `height` rows.
fn scroll_offset(current: usize, highlighted: Option<usize>, height: usize, len: usize) -> usize {
    let mut offset = current;
    if let Some(i) = highlighted {
        if i < offset {
            offset = i;
        } else if i >= offset + height {
            offset = i + 1 - height;
        }
    }
    offset.min(len.saturating_sub(height))
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsPanel<'a> {
    state: &'a ResultsPanelState,
    hits: &'a [Hit],
    highlighted: Option<usize>,
    pre_tag: &'a str,
    post_tag: &'a str,
    theme: &'a Theme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(
        state: &'a ResultsPanelState,
        hits: &'a [Hit],
        highlighted: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            hits,
            highlighted,
            pre_tag: "<mark>",
            post_tag: "</mark>",
            theme,
        }
    }

    pub fn tags(mut self, pre: &'a str, post: &'a str) -> Self {
        self.pre_tag = pre;
        self.post_tag = post;
        self
    }

    /// Rows needed to show `hits` hits, borders included, capped at
    /// `max_rows` hits.
    pub fn height_for(hits: usize, max_rows: u16) -> u16 {
        let rows = u16::try_from(hits.max(1)).unwrap_or(u16::MAX).min(max_rows.max(1));
        rows + 2
    }

    fn row(&self, index: usize, hit: &Hit) -> Line<'a> {
        let selected = self.highlighted == Some(index);
        let base = if selected {
            self.theme.result_highlighted
        } else {
            self.theme.result_row
        };
        let matched = base.patch(self.theme.result_matched);

        let mut spans = vec![Span::styled(if selected { "› " } else { "  " }, base)];
        for segment in hit.segments(self.pre_tag, self.post_tag) {
            let style = if segment.matched { matched } else { base };
            spans.push(Span::styled(segment.text.to_string(), style));
        }
        Line::from(spans).style(base)
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Results ({})", self.hits.len());
        let block = Block::bordered().title(title).border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);
        self.state.last_inner.set(inner);

        if self.hits.is_empty() {
            self.state.offset.set(0);
            Paragraph::new(Line::from(Span::styled("no results", self.theme.result_empty)))
                .render(inner, buf);
            return;
        }

        let height = usize::from(inner.height).max(1);
        let offset = scroll_offset(self.state.offset.get(), self.highlighted, height, self.hits.len());
        self.state.offset.set(offset);

        let lines: Vec<Line> = self
            .hits
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, hit)| self.row(i, hit))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

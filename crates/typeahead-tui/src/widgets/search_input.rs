//! Search input widget — the one-line text box at the top of the screen.
//!
//! # Editing
//!
//! - [`SearchInputState::insert`] adds a character at the cursor.
//! - [`SearchInputState::backspace`] deletes the character before it.
//! - [`SearchInputState::left`] / [`SearchInputState::right`] move the cursor
//!   by one character.
//!
//! Every editing method returns whether the text changed, so the app shell
//! only sends `INPUT` when there is something new to search for.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchInputState {
    text: String,
    /// Byte offset of the cursor within `text`.
    cursor: usize,
}

impl SearchInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.remove(prev);
        self.cursor = prev;
        true
    }

    pub fn left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }

    /// Replace the whole text, cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().last().map(|(i, _)| i)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchInput<'a> {
    state: &'a SearchInputState,
    focused: bool,
    searching: bool,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    pub fn new(state: &'a SearchInputState, focused: bool, searching: bool, theme: &'a Theme) -> Self {
        Self { state, focused, searching, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = self.state.text[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let mut block = Block::bordered().title("Search").border_style(border_style);
        if self.searching {
            block = block.title_top(
                Line::from(Span::styled(" searching… ", self.theme.input_searching)).right_aligned(),
            );
        }

        let line = if self.state.text.is_empty() {
            let hint = if self.focused { "type to search" } else { "press Tab to search" };
            Line::from(Span::styled(hint, self.theme.input_placeholder))
        } else {
            Line::from(Span::styled(self.state.text.as_str(), self.theme.input_text))
        };
        Paragraph::new(line).block(block).render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

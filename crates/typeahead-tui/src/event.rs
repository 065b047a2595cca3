//! Semantic UI events — crossterm events mapped to a widget-agnostic
//! vocabulary so the app shell never matches on crossterm types.
//!
//! # Keybindings
//!
//! | Key(s)                       | Event             |
//! |------------------------------|-------------------|
//! | `Ctrl+c`                     | `Quit`            |
//! | printable char               | `Char(c)`         |
//! | `Backspace`                  | `Backspace`       |
//! | `←` / `→`                    | `CursorLeft/Right`|
//! | `Ctrl+u`                     | `ClearLine`       |
//! | `↑`, `Ctrl+p`, `Shift+Tab`   | `HighlightUp`     |
//! | `↓`, `Ctrl+n`                | `HighlightDown`   |
//! | `Enter`                      | `Enter`           |
//! | `Esc`                        | `Escape`          |
//! | `Tab`                        | `ToggleFocus`     |
//! | mouse move                   | `Hover`           |
//! | left click                   | `Click`           |
//! | wheel up / down              | `HighlightUp/Down`|
//! | terminal resize              | `Resize(w, h)`    |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// A semantic event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Exit the application.
    Quit,
    /// A printable character for the search input.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    CursorLeft,
    CursorRight,
    /// Delete the whole input line.
    ClearLine,
    /// Move the highlight towards the top of the results panel.
    HighlightUp,
    /// Move the highlight towards the bottom of the results panel.
    HighlightDown,
    /// Pick the highlighted hit.
    Enter,
    Escape,
    /// Move focus into or out of the search input.
    ToggleFocus,
    /// Pointer moved to terminal cell (column, row).
    Hover { column: u16, row: u16 },
    /// Left button pressed at terminal cell (column, row).
    Click { column: u16, row: u16 },
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to a [`UiEvent`].
///
/// Returns `None` for events with no meaning here (key releases, unbound
/// keys, focus reports, pastes, drags).
pub fn to_ui_event(event: Event) -> Option<UiEvent> {
    match event {
        Event::Resize(w, h) => Some(UiEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved => Some(UiEvent::Hover {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::Down(MouseButton::Left) => Some(UiEvent::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(UiEvent::HighlightUp),
            MouseEventKind::ScrollDown => Some(UiEvent::HighlightDown),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<UiEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(UiEvent::Quit),
        Char('u') if key.modifiers == Mod::CONTROL => Some(UiEvent::ClearLine),
        Char('p') if key.modifiers == Mod::CONTROL => Some(UiEvent::HighlightUp),
        Char('n') if key.modifiers == Mod::CONTROL => Some(UiEvent::HighlightDown),

        Up => Some(UiEvent::HighlightUp),
        Down => Some(UiEvent::HighlightDown),
        Left => Some(UiEvent::CursorLeft),
        Right => Some(UiEvent::CursorRight),

        // Some terminals report Shift+Tab as BackTab, some as Tab + SHIFT
        BackTab => Some(UiEvent::HighlightUp),
        Tab if key.modifiers == Mod::SHIFT => Some(UiEvent::HighlightUp),
        Tab if key.modifiers == Mod::NONE => Some(UiEvent::ToggleFocus),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(UiEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(UiEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(UiEvent::Enter),
        Esc => Some(UiEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

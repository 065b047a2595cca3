//! Top-level application state and the main event loop.
//!
//! [`App`] owns a [`Session`] and translates UI events into machine events:
//!
//! | UI event              | Machine event(s)                                  |
//! |-----------------------|---------------------------------------------------|
//! | typing / Backspace    | `INPUT(text)`                                     |
//! | `Ctrl+u`              | `INPUT("")` (reset)                               |
//! | `↑` / `↓`             | `OPEN` if closed with hits, then `HIGHLIGHT_PREV/NEXT` |
//! | hover over a row      | `HIGHLIGHT_SPECIFIC_INDEX(row)`                   |
//! | `Enter` / click a row | fill input with the hit, `CLOSE`                  |
//! | `Esc`                 | `ESCAPE`                                          |
//! | `Tab` (focus toggle)  | `CLOSE` on blur, `OPEN` on focus                  |
//!
//! Whenever the search region resets to `Initial` the input text is cleared,
//! so an `ESCAPE` on a closed panel empties the box.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    event::{self, UiEvent},
    theme::Theme,
    widgets::{
        results_panel::{ResultsPanel, ResultsPanelState},
        search_input::{SearchInput, SearchInputState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position, Rect},
    Frame, Terminal,
};
use std::{cell::Cell, io, time::Duration};
use typeahead_core::{
    config::Config, Event as MachineEvent, PanelState, RegionState, SearchState, Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keystrokes go to the search input.
    Input,
    /// The input is blurred; the panel stays closed until focus returns.
    Away,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    session: Session,
    input: SearchInputState,
    panel: ResultsPanelState,
    focus: Focus,
    theme: Theme,
    config: Config,
    /// Label of the last picked hit.
    chosen: Option<String>,
    /// Input box area of the last render, for click-to-focus.
    input_area: Cell<Rect>,
    quit: bool,
}

impl App {
    pub fn new(session: Session, config: Config, theme: Theme) -> Self {
        Self {
            session,
            input: SearchInputState::default(),
            panel: ResultsPanelState::default(),
            focus: Focus::Input,
            theme,
            config,
            chosen: None,
            input_area: Cell::new(Rect::default()),
            quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply search completions that arrived since the last call.
    pub fn tick(&mut self) -> usize {
        self.session.drain_arrivals()
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        let mouse = self.config.ui.mouse;
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        if mouse {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.tick();
            terminal.draw(|frame| self.draw(frame))?;

            if self.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                if let Some(ev) = event::to_ui_event(raw) {
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: UiEvent) {
        if !matches!(event, UiEvent::Hover { .. }) {
            tracing::debug!(focus = ?self.focus, event = ?event, "ui event");
        }

        match event {
            UiEvent::Quit => self.quit = true,

            UiEvent::Char(c) => {
                self.focus_input();
                self.input.insert(c);
                self.send_input();
            }
            UiEvent::Backspace => {
                if self.focus == Focus::Input && self.input.backspace() {
                    self.send_input();
                }
            }
            UiEvent::ClearLine => {
                if self.focus == Focus::Input && self.input.clear() {
                    self.send_input();
                }
            }
            UiEvent::CursorLeft => self.input.left(),
            UiEvent::CursorRight => self.input.right(),

            UiEvent::HighlightUp => self.move_highlight(MachineEvent::HighlightPrev),
            UiEvent::HighlightDown => self.move_highlight(MachineEvent::HighlightNext),

            UiEvent::Enter => self.choose(),
            UiEvent::Escape => self.send(MachineEvent::Escape),

            UiEvent::ToggleFocus => match self.focus {
                Focus::Input => self.blur(),
                Focus::Away => self.focus_input(),
            },

            UiEvent::Hover { column, row } => {
                if let Some(index) = self.hit_under(column, row) {
                    if self.session.machine().context().highlighted_index != Some(index) {
                        self.send(MachineEvent::HighlightSpecificIndex(index));
                    }
                }
            }
            UiEvent::Click { column, row } => {
                if let Some(index) = self.hit_under(column, row) {
                    self.send(MachineEvent::HighlightSpecificIndex(index));
                    self.choose();
                } else if self.input_area.get().contains(Position::new(column, row)) {
                    self.focus_input();
                } else {
                    self.blur();
                }
            }

            // Terminal resize is handled automatically by ratatui
            UiEvent::Resize(_, _) => {}
        }
    }

    fn send(&mut self, event: MachineEvent) {
        let dispatch = self.session.dispatch(event);
        if dispatch.entered(RegionState::Search(SearchState::Initial)) {
            self.input.clear();
        }
    }

    fn send_input(&mut self) {
        let text = self.input.text().to_string();
        self.send(MachineEvent::Input(text));
    }

    fn focus_input(&mut self) {
        if self.focus == Focus::Away {
            self.focus = Focus::Input;
            self.send(MachineEvent::Open);
        }
    }

    fn blur(&mut self) {
        if self.focus == Focus::Input {
            self.focus = Focus::Away;
            self.send(MachineEvent::Close);
        }
    }

    fn move_highlight(&mut self, event: MachineEvent) {
        let snapshot = self.session.snapshot();
        if !snapshot.is_open() && !snapshot.context.hits.is_empty() {
            self.focus = Focus::Input;
            self.send(MachineEvent::Open);
        }
        self.send(event);
    }

    /// Put the highlighted hit into the input and close the panel.
    fn choose(&mut self) {
        let Some(hit) = self.session.machine().context().highlighted_hit().cloned() else {
            return;
        };
        let value = self.session.source().input_value(&hit);
        tracing::info!(id = %hit.id, value = %value, "hit picked");
        self.input.set(value);
        self.chosen = Some(hit.label);
        self.send(MachineEvent::Close);
    }

    fn hit_under(&self, column: u16, row: u16) -> Option<usize> {
        if self.session.machine().panel_state() != PanelState::Opened {
            return None;
        }
        self.panel
            .row_at(column, row)
            .filter(|&i| i < self.session.machine().context().hits.len())
    }

    fn panel_visible(&self) -> bool {
        let machine = self.session.machine();
        let nothing_found = machine.search_state() == SearchState::Success
            && machine.context().hits.is_empty()
            && self.focus == Focus::Input
            && !self.input.text().is_empty();
        machine.panel_state() == PanelState::Opened || nothing_found
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let snapshot = self.session.snapshot();
        let hits = &snapshot.context.hits;

        let panel_height = if self.panel_visible() {
            ResultsPanel::height_for(hits.len(), self.config.ui.panel_max_rows)
        } else {
            0
        };

        // input | results panel | spacer | status line
        let [input_area, panel_area, _, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(panel_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.input_area.set(input_area);
        let input = SearchInput::new(
            &self.input,
            self.focus == Focus::Input,
            snapshot.is_searching(),
            &self.theme,
        );
        let cursor = input.cursor_position(input_area);
        frame.render_widget(input, input_area);

        if panel_height > 0 {
            let search = &self.config.search;
            frame.render_widget(
                ResultsPanel::new(&self.panel, hits, snapshot.context.highlighted_index, &self.theme)
                    .tags(&search.highlight_pre_tag, &search.highlight_post_tag),
                panel_area,
            );
        } else {
            self.panel.hide();
        }

        frame.render_widget(
            StatusBar::new(&snapshot, self.session.source().name(), &self.theme)
                .chosen(self.chosen.as_deref()),
            status_area,
        );

        if self.focus == Focus::Input {
            frame.set_cursor_position(cursor);
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! The interaction state machine.
//!
//! Three regions run side by side over one [`Context`]:
//!
//! | Region    | States                               | Writes                |
//! |-----------|--------------------------------------|-----------------------|
//! | search    | `Initial`, `Searching`, `Success`    | `query`, `hits`       |
//! | panel     | `Closed`, `Opened`, (`Resetting`)    | —                     |
//! | highlight | `None`, `Highlighted`                | `highlighted_index`   |
//!
//! [`Machine::dispatch`] feeds one event to the regions in the fixed order
//! search → panel → highlight. A region may raise follow-up events; those go
//! on a FIFO queue that is drained before `dispatch` returns, so callers only
//! ever observe settled states.
//!
//! Entering `Searching` does not call anything. It produces an
//! [`Effect::Search`] that the caller (usually a [`Session`](crate::Session))
//! runs, later answering with [`Event::ResultsArrived`].

mod context;
mod event;
mod highlight;
mod panel;
mod request;
mod search;

pub use context::{Context, Snapshot};
pub use event::Event;
pub use highlight::HighlightState;
pub use panel::PanelState;
pub use request::{RequestId, StalePolicy};
pub use search::SearchState;

use request::{Admission, RequestLedger};
use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// Region plumbing
// ---------------------------------------------------------------------------

/// Result of stepping one region with one event.
#[derive(Debug)]
pub(crate) struct Step<S> {
    pub(crate) state: S,
    /// A transition was taken (self transitions included), so entry actions ran.
    pub(crate) entered: bool,
    pub(crate) raised: Vec<Event>,
}

impl<S> Step<S> {
    pub(crate) fn stay(state: S) -> Self {
        Self { state, entered: false, raised: Vec::new() }
    }

    pub(crate) fn enter(state: S) -> Self {
        Self { state, entered: true, raised: Vec::new() }
    }

    pub(crate) fn raise(mut self, event: Event) -> Self {
        self.raised.push(event);
        self
    }
}

/// A state of any region, as it appears in a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionState {
    Search(SearchState),
    Panel(PanelState),
    Highlight(HighlightState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: RegionState,
    pub to: RegionState,
}

/// Side effect the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the search collaborator for `query` and answer with
    /// `Event::results_for(request, hits)`.
    Search { request: RequestId, query: String },
}

/// Everything that happened while dispatching one caller event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    pub effects: Vec<Effect>,
    /// Every transition taken, in order, including transient states.
    pub transitions: Vec<Transition>,
    /// The event was a stale `ResultsArrived` and was dropped unprocessed.
    pub discarded: bool,
}

impl Dispatch {
    /// Whether any region entered `state` during this dispatch.
    pub fn entered(&self, state: RegionState) -> bool {
        self.transitions.iter().any(|t| t.to == state)
    }
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Machine {
    search: SearchState,
    panel: PanelState,
    highlight: HighlightState,
    context: Context,
    policy: StalePolicy,
    requests: RequestLedger,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

impl Machine {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            search: SearchState::Initial,
            panel: PanelState::Closed,
            highlight: HighlightState::None,
            context: Context::default(),
            policy,
            requests: RequestLedger::default(),
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn search_state(&self) -> SearchState {
        self.search
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel
    }

    pub fn highlight_state(&self) -> HighlightState {
        self.highlight
    }

    /// The request whose response is currently awaited, if any.
    pub fn live_request(&self) -> Option<RequestId> {
        self.requests.live()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            search: self.search,
            panel: self.panel,
            highlight: self.highlight,
            context: self.context.clone(),
        }
    }

    /// Process one event and every follow-up it raises.
    ///
    /// # Panics
    ///
    /// If a `HighlightSpecificIndex` (raised by the caller) is out of range
    /// for the current hits.
    pub fn dispatch(&mut self, event: Event) -> Dispatch {
        let mut dispatch = Dispatch::default();
        tracing::debug!(event = event.name(), "dispatch");

        // Only a caller `Open` withdraws a dismissal; raised ones are the
        // machine reopening on its own.
        if matches!(event, Event::Open) {
            self.requests.note_focus();
        }

        let mut reopen = true;
        if let Event::ResultsArrived { request, hits } = &event {
            match self.requests.admit(*request, self.policy) {
                Admission::Discard => {
                    tracing::debug!(
                        request = ?request,
                        live = ?self.requests.live(),
                        hits = hits.len(),
                        "discarding stale results"
                    );
                    dispatch.discarded = true;
                    return dispatch;
                }
                Admission::Commit { reopen: allowed } => reopen = allowed,
            }
        }

        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            self.process(&event, reopen, &mut queue, &mut dispatch);
        }
        dispatch
    }

    fn process(
        &mut self,
        event: &Event,
        reopen: bool,
        queue: &mut VecDeque<Event>,
        dispatch: &mut Dispatch,
    ) {
        if matches!(event, Event::Close | Event::Escape) {
            self.requests.note_dismissal();
        }

        // Search
        let from = self.search;
        let mut step = search::step(from, event, &mut self.context.query, &mut self.context.hits);
        if step.entered {
            match step.state {
                SearchState::Searching => {
                    let request = self.requests.issue();
                    let query = self.context.query.clone().unwrap_or_default();
                    dispatch.effects.push(Effect::Search { request, query });
                }
                SearchState::Initial => self.requests.invalidate(),
                SearchState::Success => {
                    self.requests.settle();
                    if !reopen {
                        step.raised.retain(|e| *e != Event::Open);
                    }
                }
            }
            record(dispatch, RegionState::Search(from), RegionState::Search(step.state));
        }
        self.search = step.state;
        queue.extend(step.raised);

        // Panel
        let has_hits = !self.context.hits.is_empty();
        let mut next = Some(panel::step(self.panel, event, has_hits));
        while let Some(step) = next.take() {
            if step.entered {
                record(dispatch, RegionState::Panel(self.panel), RegionState::Panel(step.state));
            }
            self.panel = step.state;
            queue.extend(step.raised);
            next = panel::settle(self.panel);
        }

        // Highlight
        let from = self.highlight;
        let step = highlight::step(
            from,
            event,
            &mut self.context.highlighted_index,
            self.context.hits.len(),
        );
        if step.entered {
            record(dispatch, RegionState::Highlight(from), RegionState::Highlight(step.state));
        }
        self.highlight = step.state;
        queue.extend(step.raised);
    }
}

fn record(dispatch: &mut Dispatch, from: RegionState, to: RegionState) {
    tracing::debug!(from = ?from, to = ?to, "transition");
    dispatch.transitions.push(Transition { from, to });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

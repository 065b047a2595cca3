//! Search region — `Initial → Searching → Success`.
//!
//! Owns `query` and `hits` in the shared context. Entering `Success` asks the
//! panel to open or close depending on whether anything came back, and always
//! drops the highlight since indices into the previous list no longer apply.

use super::{Event, Step};
use crate::types::Hit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    Initial,
    Searching,
    Success,
}

pub(crate) fn step(
    state: SearchState,
    event: &Event,
    query: &mut Option<String>,
    hits: &mut Vec<Hit>,
) -> Step<SearchState> {
    match event {
        Event::Input(text) if text.is_empty() => reset(state, query, hits),
        Event::Input(text) => {
            *query = Some(text.clone());
            Step::enter(SearchState::Searching)
        }
        // Accepted from any state; admission has already been decided.
        Event::ResultsArrived { hits: delivered, .. } => {
            *hits = delivered.clone();
            let panel = if hits.is_empty() { Event::Close } else { Event::Open };
            Step::enter(SearchState::Success)
                .raise(Event::ResetHighlight)
                .raise(panel)
        }
        Event::ResetSearch => reset(state, query, hits),
        _ => Step::stay(state),
    }
}

fn reset(state: SearchState, query: &mut Option<String>, hits: &mut Vec<Hit>) -> Step<SearchState> {
    if state == SearchState::Initial {
        return Step::stay(state);
    }
    *query = None;
    hits.clear();
    Step::enter(SearchState::Initial)
        .raise(Event::Close)
        .raise(Event::ResetHighlight)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

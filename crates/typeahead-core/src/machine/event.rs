//! The fixed event vocabulary accepted by [`Machine::dispatch`](super::Machine::dispatch).
//!
//! | Event                        | Raised by                                   |
//! |------------------------------|---------------------------------------------|
//! | `Input(q)`                   | caller, every committed edit of the input   |
//! | `ResultsArrived { .. }`      | session, when a search call completes       |
//! | `ResetSearch`                | caller, or the panel's `Resetting` state    |
//! | `Open`                       | caller (focus), or the search region        |
//! | `Close`                      | caller (blur, dismiss), or the search region|
//! | `Escape`                     | caller                                      |
//! | `HighlightNext` / `Prev`     | caller (arrow keys)                         |
//! | `HighlightSpecificIndex(i)`  | caller (mouse hover)                        |
//! | `ResetHighlight`             | caller, or the search/panel regions         |

use super::request::RequestId;
use crate::types::Hit;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The input text was committed. An empty string clears the search.
    Input(String),
    /// A search call finished. `request` is the token from the
    /// [`Effect::Search`](super::Effect::Search) that started it; untagged
    /// arrivals are always accepted.
    ResultsArrived {
        hits: Vec<Hit>,
        request: Option<RequestId>,
    },
    ResetSearch,
    Open,
    Close,
    Escape,
    HighlightNext,
    HighlightPrev,
    /// Highlight a specific row (mouse hover). The index must be in range.
    HighlightSpecificIndex(usize),
    ResetHighlight,
}

impl Event {
    pub fn input(query: impl Into<String>) -> Self {
        Event::Input(query.into())
    }

    /// Untagged results, as a caller without request tracking would send them.
    pub fn results(hits: Vec<Hit>) -> Self {
        Event::ResultsArrived { hits, request: None }
    }

    pub fn results_for(request: RequestId, hits: Vec<Hit>) -> Self {
        Event::ResultsArrived { hits, request: Some(request) }
    }

    /// Short name used in log lines (avoids dumping whole hit lists).
    pub fn name(&self) -> &'static str {
        match self {
            Event::Input(_) => "INPUT",
            Event::ResultsArrived { .. } => "RESULTS_ARRIVED",
            Event::ResetSearch => "RESET_SEARCH",
            Event::Open => "OPEN",
            Event::Close => "CLOSE",
            Event::Escape => "ESCAPE",
            Event::HighlightNext => "HIGHLIGHT_NEXT",
            Event::HighlightPrev => "HIGHLIGHT_PREV",
            Event::HighlightSpecificIndex(_) => "HIGHLIGHT_SPECIFIC_INDEX",
            Event::ResetHighlight => "RESET_HIGHLIGHT",
        }
    }
}

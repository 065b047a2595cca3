//! Shared context and the read-only snapshot handed to callers.

use super::{HighlightState, PanelState, SearchState};
use crate::types::Hit;
use std::fmt;

/// The record shared by all three regions.
///
/// Ownership is split by field: the search region writes `query` and `hits`,
/// the highlight region writes `highlighted_index`, the panel writes nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub query: Option<String>,
    pub hits: Vec<Hit>,
    pub highlighted_index: Option<usize>,
}

impl Context {
    pub fn highlighted_hit(&self) -> Option<&Hit> {
        self.highlighted_index.and_then(|i| self.hits.get(i))
    }
}

/// Active state of each region plus the context, after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub search: SearchState,
    pub panel: PanelState,
    pub highlight: HighlightState,
    pub context: Context,
}

impl Snapshot {
    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Opened
    }

    pub fn is_searching(&self) -> bool {
        self.search == SearchState::Searching
    }

    pub fn highlighted_hit(&self) -> Option<&Hit> {
        self.context.highlighted_hit()
    }
}

/// One-line summary, used by the status bar and debug logging:
/// `search=Success panel=Opened highlight=Highlighted(2) hits=3 query="foo"`.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search={:?} panel={:?} ", self.search, self.panel)?;
        match self.context.highlighted_index {
            Some(i) => write!(f, "highlight=Highlighted({i})")?,
            None => write!(f, "highlight=None")?,
        }
        write!(f, " hits={}", self.context.hits.len())?;
        match &self.context.query {
            Some(q) => write!(f, " query={q:?}"),
            None => write!(f, " query=-"),
        }
    }
}

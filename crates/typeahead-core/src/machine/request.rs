//! Request tokens and the stale-response policy.
//!
//! Every entry into `Searching` issues a fresh [`RequestId`]. The ledger
//! remembers which request is live so that a late response to a superseded
//! or reset search can be told apart from the one the user is waiting for.

use serde::Deserialize;
use std::fmt;

/// Monotonically increasing token attached to each search effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to do with a response whose request is no longer the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Drop superseded responses, and never let a response reopen a panel
    /// that was dismissed while it was in flight.
    #[default]
    Discard,
    /// Commit every response on arrival, in arrival order. A slow response to
    /// an older query can overwrite newer hits.
    Apply,
}

/// Outcome of checking an arrival against the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    Commit { reopen: bool },
    Discard,
}

#[derive(Debug, Default)]
pub(crate) struct RequestLedger {
    issued: u64,
    live: Option<RequestId>,
    /// The panel was dismissed while `live` was in flight.
    dismissed: bool,
}

impl RequestLedger {
    pub(crate) fn issue(&mut self) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.live = Some(id);
        self.dismissed = false;
        id
    }

    /// The search region was reset; nothing is live any more.
    pub(crate) fn invalidate(&mut self) {
        self.live = None;
        self.dismissed = false;
    }

    /// Hits were committed; the live request (if any) is answered.
    pub(crate) fn settle(&mut self) {
        self.live = None;
        self.dismissed = false;
    }

    pub(crate) fn note_dismissal(&mut self) {
        if self.live.is_some() {
            self.dismissed = true;
        }
    }

    /// The caller asked for the panel again; any earlier dismissal no longer
    /// holds back the live response.
    pub(crate) fn note_focus(&mut self) {
        self.dismissed = false;
    }

    pub(crate) fn live(&self) -> Option<RequestId> {
        self.live
    }

    pub(crate) fn admit(&self, request: Option<RequestId>, policy: StalePolicy) -> Admission {
        match (policy, request) {
            (StalePolicy::Apply, _) => Admission::Commit { reopen: true },
            (StalePolicy::Discard, None) => Admission::Commit { reopen: !self.dismissed },
            (StalePolicy::Discard, Some(id)) if self.live == Some(id) => {
                Admission::Commit { reopen: !self.dismissed }
            }
            (StalePolicy::Discard, Some(_)) => Admission::Discard,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Panel region — `Closed`, `Opened` and the pass-through `Resetting`.
//!
//! Escape is context dependent: on an open panel it is a light dismiss, on a
//! closed one it wipes the search and highlight via `Resetting`, which then
//! settles back to `Closed` inside the same dispatch.

use super::{Event, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelState {
    Closed,
    Opened,
    /// Transient; never visible in a [`Snapshot`](super::Snapshot).
    Resetting,
}

pub(crate) fn step(state: PanelState, event: &Event, has_hits: bool) -> Step<PanelState> {
    match (state, event) {
        (PanelState::Closed, Event::Open) if has_hits => Step::enter(PanelState::Opened),
        (PanelState::Closed, Event::Escape) => Step::enter(PanelState::Resetting)
            .raise(Event::ResetSearch)
            .raise(Event::ResetHighlight),
        (PanelState::Opened, Event::Close | Event::Escape) => {
            Step::enter(PanelState::Closed).raise(Event::ResetHighlight)
        }
        _ => Step::stay(state),
    }
}

/// Unconditional follow-on transition out of a transient state.
pub(crate) fn settle(state: PanelState) -> Option<Step<PanelState>> {
    match state {
        PanelState::Resetting => Some(Step::enter(PanelState::Closed)),
        PanelState::Closed | PanelState::Opened => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PanelState::Closed, Event::Open, true, PanelState::Opened)]
    #[case(PanelState::Closed, Event::Open, false, PanelState::Closed)]
    #[case(PanelState::Opened, Event::Close, true, PanelState::Closed)]
    #[case(PanelState::Opened, Event::Escape, true, PanelState::Closed)]
    #[case(PanelState::Opened, Event::Open, true, PanelState::Opened)]
    #[case(PanelState::Closed, Event::Close, true, PanelState::Closed)]
    #[case(PanelState::Closed, Event::Escape, false, PanelState::Resetting)]
    fn transitions(
        #[case] from: PanelState,
        #[case] event: Event,
        #[case] has_hits: bool,
        #[case] to: PanelState,
    ) {
        assert_eq!(step(from, &event, has_hits).state, to);
    }

    #[test]
    fn escape_while_closed_requests_full_reset() {
        let step = step(PanelState::Closed, &Event::Escape, true);
        assert_eq!(step.raised, vec![Event::ResetSearch, Event::ResetHighlight]);
    }

    #[test]
    fn resetting_settles_to_closed() {
        let settled = settle(PanelState::Resetting).expect("resetting is transient");
        assert_eq!(settled.state, PanelState::Closed);
        assert!(settle(PanelState::Closed).is_none());
    }

    #[test]
    fn open_while_open_is_not_reentered() {
        assert!(!step(PanelState::Opened, &Event::Open, true).entered);
    }
}

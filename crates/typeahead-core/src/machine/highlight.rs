//! Highlight region — `None` / `Highlighted`, owning `highlighted_index`.
//!
//! Arrow navigation wraps modulo the hit count. Hover jumps straight to the
//! given row. Navigation from `None` is guarded on there being hits at all,
//! so the modular arithmetic never sees a zero length.

use super::{Event, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightState {
    None,
    Highlighted,
}

/// # Panics
///
/// On `HighlightSpecificIndex(i)` with `i >= hit_count`. Callers map rows to
/// indices and must not hand in rows that do not exist.
pub(crate) fn step(
    state: HighlightState,
    event: &Event,
    index: &mut Option<usize>,
    hit_count: usize,
) -> Step<HighlightState> {
    match (state, event) {
        (_, Event::HighlightSpecificIndex(i)) => {
            assert!(
                *i < hit_count,
                "highlight index {i} out of range for {hit_count} hits"
            );
            *index = Some(*i);
            Step::enter(HighlightState::Highlighted)
        }
        (HighlightState::None, Event::HighlightNext | Event::HighlightPrev) if hit_count > 0 => {
            *index = Some(0);
            Step::enter(HighlightState::Highlighted)
        }
        (HighlightState::Highlighted, Event::HighlightNext | Event::HighlightPrev)
            if hit_count == 0 =>
        {
            clear(index)
        }
        (HighlightState::Highlighted, Event::HighlightNext) => {
            let current = index.unwrap_or(0);
            *index = Some((current + 1) % hit_count);
            Step::enter(HighlightState::Highlighted)
        }
        (HighlightState::Highlighted, Event::HighlightPrev) => {
            let current = index.unwrap_or(0);
            *index = Some((current + hit_count - 1) % hit_count);
            Step::enter(HighlightState::Highlighted)
        }
        (HighlightState::Highlighted, Event::ResetHighlight) => clear(index),
        _ => Step::stay(state),
    }
}

fn clear(index: &mut Option<usize>) -> Step<HighlightState> {
    *index = None;
    Step::enter(HighlightState::None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

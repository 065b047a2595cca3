//! Domain-specific assertions for typeahead harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! machine invariant was violated and in what snapshot.

use typeahead_core::{HighlightState, PanelState, Snapshot};

// ---------------------------------------------------------------------------
// State assertions
// ---------------------------------------------------------------------------

/// Assert the active state of all three regions at once.
///
/// ```rust
/// assert_regions!(machine.snapshot(), Success, Opened, None);
/// ```
#[macro_export]
macro_rules! assert_regions {
    ($snapshot:expr, $search:ident, $panel:ident, $highlight:ident) => {{
        let snap: typeahead_core::Snapshot = $snapshot;
        let expected = (
            typeahead_core::SearchState::$search,
            typeahead_core::PanelState::$panel,
            typeahead_core::HighlightState::$highlight,
        );
        let actual = (snap.search, snap.panel, snap.highlight);
        if actual != expected {
            panic!(
                "assert_regions! failed:\n  expected: {:?}\n  actual:   {:?}\n  snapshot: {}",
                expected, actual, snap
            );
        }
    }};
}

/// Assert the hit ids, in order.
#[macro_export]
macro_rules! assert_hit_ids {
    ($snapshot:expr, [$($id:expr),* $(,)?]) => {{
        let snap: &typeahead_core::Snapshot = &$snapshot;
        let actual: Vec<&str> = snap.context.hits.iter().map(|h| h.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "hit ids in snapshot {}", snap);
    }};
}

/// Assert the dispatch trace entered `state`, transient states included.
///
/// ```rust
/// assert_passed_through!(dispatch, RegionState::Panel(PanelState::Resetting));
/// ```
#[macro_export]
macro_rules! assert_passed_through {
    ($dispatch:expr, $state:expr) => {{
        let dispatch: &typeahead_core::Dispatch = &$dispatch;
        let target: typeahead_core::RegionState = $state;
        if !dispatch.entered(target) {
            panic!(
                "assert_passed_through! failed: {:?} never entered.\n  trace: {:?}",
                target, dispatch.transitions
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

/// Check every context/region invariant that must hold after any dispatch.
pub fn assert_invariants(snap: &Snapshot) {
    if let Some(i) = snap.context.highlighted_index {
        assert!(
            i < snap.context.hits.len(),
            "highlighted index {i} out of range in {snap}"
        );
    }
    if snap.context.hits.is_empty() {
        assert_eq!(snap.context.highlighted_index, None, "highlight without hits in {snap}");
        assert_eq!(snap.panel, PanelState::Closed, "panel open without hits in {snap}");
    }
    assert_ne!(snap.panel, PanelState::Resetting, "transient state observable in {snap}");
    assert_eq!(
        snap.highlight == HighlightState::Highlighted,
        snap.context.highlighted_index.is_some(),
        "highlight state and index disagree in {snap}"
    );
}

#![allow(unused)]
//! Property harness — random event sequences against the machine.
//!
//! # What this covers
//!
//! - **Context invariants** after every dispatch, for any sequence of caller
//!   events: highlight index in range, no highlight and a closed panel when
//!   there are no hits, `Resetting` never observable.
//! - **Navigation algebra**: next then prev is the identity on a highlighted
//!   list; `len` nexts return to the starting index.
//! - **Determinism**: two machines fed the same sequence end in the same
//!   snapshot with the same effects.
//! - **Stale answers**: tagged answers to live and superseded requests,
//!   interleaved with dismissals and refocus, under both policies. A
//!   discarded answer leaves the snapshot untouched; under `discard` an
//!   answer never reopens a panel dismissed while it was in flight.
//!
//! # What this does NOT cover
//!
//! - Asynchronous arrival order (see session_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test property_harness
//! PROPTEST_CASES=5000 cargo test --test property_harness
//! ```

mod common;
use common::*;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use typeahead_core::{Dispatch, Effect, Event, Machine, PanelState, RequestId, StalePolicy};

/// A caller action. Hover indices beyond the current hit count are skipped
/// rather than dispatched, since those are caller errors.
#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Input(#[proptest(strategy = "\"[a-c]{0,3}\"")] String),
    #[proptest(weight = 3)]
    Results(#[proptest(strategy = "0usize..6")] usize),
    /// Tagged answer to one of the requests issued so far, picked modulo
    /// the issued count; skipped before the first search.
    #[proptest(weight = 3)]
    Answer(
        #[proptest(strategy = "0usize..8")] usize,
        #[proptest(strategy = "0usize..6")] usize,
    ),
    ResetSearch,
    Open,
    Close,
    Escape,
    #[proptest(weight = 2)]
    Next,
    #[proptest(weight = 2)]
    Prev,
    Hover(#[proptest(strategy = "0usize..6")] usize),
    ResetHighlight,
}

impl Op {
    fn event(&self, machine: &Machine, issued: u64) -> Option<Event> {
        Some(match self {
            Op::Input(q) => Event::input(q.clone()),
            Op::Results(n) => Event::results(hits(*n)),
            Op::Answer(_, _) if issued == 0 => return None,
            Op::Answer(pick, n) => {
                let request = RequestId(1 + *pick as u64 % issued);
                Event::results_for(request, hits(*n))
            }
            Op::ResetSearch => Event::ResetSearch,
            Op::Open => Event::Open,
            Op::Close => Event::Close,
            Op::Escape => Event::Escape,
            Op::Next => Event::HighlightNext,
            Op::Prev => Event::HighlightPrev,
            Op::Hover(i) if *i < machine.context().hits.len() => Event::HighlightSpecificIndex(*i),
            Op::Hover(_) => return None,
            Op::ResetHighlight => Event::ResetHighlight,
        })
    }
}

fn policy() -> impl Strategy<Value = StalePolicy> {
    prop_oneof![Just(StalePolicy::Discard), Just(StalePolicy::Apply)]
}

/// A machine plus the number of search requests it has issued, so tagged
/// answers can target real tokens.
struct Driver {
    machine: Machine,
    issued: u64,
}

impl Driver {
    fn new(policy: StalePolicy) -> Self {
        Self { machine: Machine::new(policy), issued: 0 }
    }

    fn event(&self, op: &Op) -> Option<Event> {
        op.event(&self.machine, self.issued)
    }

    fn dispatch(&mut self, event: Event) -> Dispatch {
        let dispatch = self.machine.dispatch(event);
        self.issued += dispatch
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::Search { .. }))
            .count() as u64;
        dispatch
    }
}

fn run(machine: &mut Machine, ops: &[Op]) {
    let mut issued = 0;
    for op in ops {
        if let Some(event) = op.event(machine, issued) {
            issued += machine.dispatch(event).effects.len() as u64;
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_dispatch(
        policy in policy(),
        ops in prop::collection::vec(any::<Op>(), 0..60),
    ) {
        let mut driver = Driver::new(policy);
        for op in &ops {
            if let Some(event) = driver.event(op) {
                driver.dispatch(event);
            }
            assert_invariants(&driver.machine.snapshot());
        }
    }

    #[test]
    fn discarded_answers_change_nothing(
        policy in policy(),
        ops in prop::collection::vec(any::<Op>(), 0..60),
    ) {
        let mut driver = Driver::new(policy);
        for op in &ops {
            let Some(event) = driver.event(op) else { continue };
            let before = driver.machine.snapshot();
            let dispatch = driver.dispatch(event);
            if dispatch.discarded {
                prop_assert_eq!(policy, StalePolicy::Discard);
                prop_assert!(dispatch.transitions.is_empty());
                prop_assert!(dispatch.effects.is_empty());
                prop_assert_eq!(driver.machine.snapshot(), before);
            }
        }
    }

    #[test]
    fn answers_never_undo_a_dismissal(
        ops in prop::collection::vec(any::<Op>(), 0..60),
    ) {
        let mut driver = Driver::new(StalePolicy::Discard);
        // Set by a dismissal, withdrawn by refocus or a new search.
        let mut dismissed = false;
        for op in &ops {
            let Some(event) = driver.event(op) else { continue };
            let tagged = matches!(op, Op::Answer(..));
            let dispatch = driver.dispatch(event);
            match op {
                Op::Close | Op::Escape => dismissed = true,
                Op::Open => dismissed = false,
                Op::Input(q) if !q.is_empty() => dismissed = false,
                _ => {}
            }
            if tagged && dismissed && !dispatch.discarded {
                prop_assert_eq!(driver.machine.panel_state(), PanelState::Closed);
            }
        }
    }

    #[test]
    fn next_then_prev_is_identity(
        ops in prop::collection::vec(any::<Op>(), 0..40),
    ) {
        let mut machine = Machine::default();
        run(&mut machine, &ops);
        prop_assume!(machine.context().highlighted_index.is_some());

        let before = machine.context().highlighted_index;
        machine.dispatch(Event::HighlightNext);
        machine.dispatch(Event::HighlightPrev);
        prop_assert_eq!(machine.context().highlighted_index, before);
    }

    #[test]
    fn len_nexts_return_to_start(n in 1usize..8, start in 0usize..8) {
        let start = start % n;
        let mut machine = machine_highlighted(n, start);
        for _ in 0..n {
            machine.dispatch(Event::HighlightNext);
        }
        prop_assert_eq!(machine.context().highlighted_index, Some(start));
    }

    #[test]
    fn same_events_same_outcome(
        policy in policy(),
        ops in prop::collection::vec(any::<Op>(), 0..40),
    ) {
        let mut a = Driver::new(policy);
        let mut b = Driver::new(policy);
        for op in &ops {
            let (Some(ea), Some(eb)) = (a.event(op), b.event(op)) else { continue };
            let da = a.dispatch(ea);
            let db = b.dispatch(eb);
            prop_assert_eq!(da, db);
        }
        prop_assert_eq!(a.machine.snapshot(), b.machine.snapshot());
    }
}

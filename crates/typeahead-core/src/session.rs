//! Session — runs the machine's search effects on a tokio runtime.
//!
//! The machine stays synchronous. Each [`Effect::Search`] becomes a spawned
//! task that awaits the [`Source`] and posts the hits back on an unbounded
//! channel, tagged with the request token. The owner pulls completions back
//! in with [`Session::drain_arrivals`] (render loops) or
//! [`Session::next_arrival`] (async callers, tests).
//!
//! Superseded tasks are never cancelled; whether their hits still count is
//! the machine's [`StalePolicy`](crate::StalePolicy) decision. A source
//! future that panics is answered with no hits, so every started search
//! comes back exactly once.

use crate::machine::{Dispatch, Effect, Event, Machine, RequestId, Snapshot};
use crate::source::Source;
use crate::types::Hit;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

#[derive(Debug)]
struct Arrival {
    request: RequestId,
    hits: Vec<Hit>,
}

pub struct Session {
    machine: Machine,
    source: Arc<dyn Source>,
    runtime: Handle,
    arrivals_tx: mpsc::UnboundedSender<Arrival>,
    arrivals_rx: mpsc::UnboundedReceiver<Arrival>,
    in_flight: usize,
}

impl Session {
    pub fn new(machine: Machine, source: Arc<dyn Source>, runtime: Handle) -> Self {
        let (arrivals_tx, arrivals_rx) = mpsc::unbounded_channel();
        Self {
            machine,
            source,
            runtime,
            arrivals_tx,
            arrivals_rx,
            in_flight: 0,
        }
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn source(&self) -> &dyn Source {
        self.source.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.machine.snapshot()
    }

    /// Search calls started but not yet pulled back in.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Dispatch a caller event and start any searches it asks for.
    pub fn dispatch(&mut self, event: Event) -> Dispatch {
        let dispatch = self.machine.dispatch(event);
        for effect in &dispatch.effects {
            self.run(effect);
        }
        dispatch
    }

    /// Apply every completion that has already arrived, without waiting.
    /// Returns how many were pulled in (discarded ones included).
    pub fn drain_arrivals(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(arrival) = self.arrivals_rx.try_recv() {
            self.apply(arrival);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it. `None` when nothing is in
    /// flight.
    pub async fn next_arrival(&mut self) -> Option<Dispatch> {
        if self.in_flight == 0 {
            return None;
        }
        let arrival = self.arrivals_rx.recv().await?;
        Some(self.apply(arrival))
    }

    fn apply(&mut self, arrival: Arrival) -> Dispatch {
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::debug!(
            request = %arrival.request,
            hits = arrival.hits.len(),
            "search completed"
        );
        // Results never raise searches, but route through `dispatch` anyway so
        // effects always run.
        self.dispatch(Event::results_for(arrival.request, arrival.hits))
    }

    fn run(&mut self, effect: &Effect) {
        match effect {
            Effect::Search { request, query } => {
                tracing::debug!(request = %request, query = %query, source = self.source.name(), "search started");
                let search = self.source.suggestions(query);
                let tx = self.arrivals_tx.clone();
                let request = *request;
                self.in_flight += 1;
                self.runtime.spawn(async move {
                    let hits = match AssertUnwindSafe(search).catch_unwind().await {
                        Ok(hits) => hits,
                        Err(_) => {
                            tracing::warn!(request = %request, "search source panicked");
                            Vec::new()
                        }
                    };
                    // Receiver only goes away with the session.
                    let _ = tx.send(Arrival { request, hits });
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Test builders — ergonomic constructors for hits, record sets and
//! machines driven to a known state.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fake::faker::lorem::en::Word;
use fake::Fake;
use serde_json::json;
use typeahead_core::{Event, Hit, Machine, StalePolicy};

// ---------------------------------------------------------------------------
// HitBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Hit`] fixtures.
///
/// ```rust
/// let hit = HitBuilder::new("Amazon - Fire TV Stick")
///     .id("5477500")
///     .highlighted("Amazon - <mark>Fire</mark> TV Stick")
///     .field("brand", "Amazon")
///     .build();
/// ```
pub struct HitBuilder {
    hit: Hit,
}

impl HitBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            hit: Hit::new(label.clone(), label),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.hit.id = id.into();
        self
    }

    pub fn highlighted(mut self, marked: impl Into<String>) -> Self {
        self.hit.highlighted = Some(marked.into());
        self
    }

    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.hit.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Hit {
        self.hit
    }
}

/// `n` hits labelled `hit 0`, `hit 1`, …
pub fn hits(n: usize) -> Vec<Hit> {
    (0..n).map(|i| Hit::new(i.to_string(), format!("hit {i}"))).collect()
}

/// `n` hits with random lorem labels; ids are positional.
pub fn fake_hits(n: usize) -> Vec<Hit> {
    (0..n)
        .map(|i| {
            let label: String = Word().fake();
            Hit::new(i.to_string(), label)
        })
        .collect()
}

/// One Algolia-shaped record.
pub fn record(id: &str, name: &str) -> serde_json::Value {
    json!({ "objectID": id, "name": name })
}

// ---------------------------------------------------------------------------
// Machine drivers
// ---------------------------------------------------------------------------

/// Machine (default policy) after typing `query` and receiving `hits`.
pub fn machine_with_results(query: &str, hits: Vec<Hit>) -> Machine {
    machine_with_results_under(StalePolicy::default(), query, hits)
}

pub fn machine_with_results_under(policy: StalePolicy, query: &str, hits: Vec<Hit>) -> Machine {
    let mut machine = Machine::new(policy);
    machine.dispatch(Event::input(query));
    machine.dispatch(Event::results(hits));
    machine
}

/// Machine with `n` results and the highlight on `index`.
pub fn machine_highlighted(n: usize, index: usize) -> Machine {
    let mut machine = machine_with_results("q", hits(n));
    machine.dispatch(Event::HighlightSpecificIndex(index));
    machine
}

//! Scripted in-process [`Source`] for session tests.
//!
//! Each query is answered after a configurable delay measured on the tokio
//! clock, so with `start_paused = true` the test decides exactly which search
//! completes first.
//!
//! ```rust,no_run
//! let source = Arc::new(
//!     ScriptedSource::new()
//!         .respond("a", 300, hits(3))   // slow
//!         .respond("ab", 10, hits(1)),  // fast
//! );
//! ```

use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use typeahead_core::{Hit, Source};

#[derive(Default)]
pub struct ScriptedSource {
    script: HashMap<String, (Duration, Vec<Hit>)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `hits` after `delay_ms` milliseconds.
    pub fn respond(mut self, query: &str, delay_ms: u64, hits: Vec<Hit>) -> Self {
        self.script
            .insert(query.to_string(), (Duration::from_millis(delay_ms), hits));
        self
    }

    /// Every query the session asked for, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Source for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn suggestions(&self, query: &str) -> BoxFuture<'static, Vec<Hit>> {
        self.calls.lock().unwrap().push(query.to_string());
        let (delay, hits) = self
            .script
            .get(query)
            .cloned()
            .unwrap_or((Duration::ZERO, Vec::new()));
        async move {
            tokio::time::sleep(delay).await;
            hits
        }
        .boxed()
    }

    fn input_value(&self, hit: &Hit) -> String {
        format!("{} ({})", hit.label, hit.id)
    }
}

//! typeahead-core — the interaction state machine behind a search-as-you-type
//! input, plus the shared types every other layer speaks.
//!
//! # Architecture
//!
//! ```text
//!   UI events ──► Machine ──► Snapshot ──► render
//!                   │  ▲
//!          Effect::Search   RESULTS_ARRIVED
//!                   ▼  │
//!                  Source (async, tokio task)
//! ```
//!
//! The [`machine`] is synchronous and performs no I/O. The [`session`] module
//! glues it to a [`Source`] by running search effects on a tokio runtime and
//! feeding completions back in as events.

pub mod config;
pub mod machine;
pub mod session;
pub mod source;
pub mod types;

pub use machine::{
    Context, Dispatch, Effect, Event, HighlightState, Machine, PanelState, RegionState,
    RequestId, SearchState, Snapshot, StalePolicy, Transition,
};
pub use session::Session;
pub use source::Source;
pub use types::{Hit, Segment};

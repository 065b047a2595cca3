//! Shared test utilities for typeahead integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Async helpers are deterministic under
//! `#[tokio::test(start_paused = true)]`.

pub mod assertions;
pub mod builders;
pub mod fake_search_api;
pub mod fake_source;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

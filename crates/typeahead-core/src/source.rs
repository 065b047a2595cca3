//! The search collaborator seam.
//!
//! A [`Source`] turns a query into hits, asynchronously. It never reports an
//! error: adapters log failures and answer with an empty list, so the state
//! machine has no failure state to model.

use crate::types::Hit;
use futures::future::BoxFuture;

/// Trait implemented by each search backend.
pub trait Source: Send + Sync {
    /// Short name for logs and the status bar.
    fn name(&self) -> &str;

    /// Start a search. The returned future owns everything it needs so the
    /// session can spawn it and let the caller keep typing.
    fn suggestions(&self, query: &str) -> BoxFuture<'static, Vec<Hit>>;

    /// Text to put in the input when the user picks `hit`.
    fn input_value(&self, hit: &Hit) -> String {
        hit.label.clone()
    }
}

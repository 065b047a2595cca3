//! Search sources behind the [`Source`] trait.
//!
//! | Source    | Backend                                               |
//! |-----------|-------------------------------------------------------|
//! | `local`   | skim-style fuzzy match over a JSON records file       |
//! | `algolia` | Algolia-compatible `POST /1/indexes/*/queries` (HTTP) |
//!
//! Sources never fail towards the state machine: a transport, status or
//! decode failure is logged and answered with an empty hit list.

pub mod algolia;
pub mod error;
pub mod local;
pub mod record;

pub use algolia::AlgoliaSource;
pub use error::SourceError;
pub use local::{LocalOptions, LocalSource};

use std::path::Path;
use std::sync::Arc;
use typeahead_core::config::{Config, SourceKind};
use typeahead_core::{Hit, Source};

/// Collapse a source failure into "no hits", logging it.
pub fn absorb(source: &str, query: &str, result: Result<Vec<Hit>, SourceError>) -> Vec<Hit> {
    match result {
        Ok(hits) => {
            tracing::debug!(source, query, hits = hits.len(), "suggestions fetched");
            hits
        }
        Err(e) => {
            tracing::warn!(source, query, error = %e, "suggestion request failed");
            Vec::new()
        }
    }
}

/// Build the source selected by `[search] source`.
pub fn build_source(config: &Config) -> anyhow::Result<Arc<dyn Source>> {
    let source: Arc<dyn Source> = match config.search.source {
        SourceKind::Local => {
            let options = LocalOptions::from(&config.search);
            let local = if config.search.records.is_empty() {
                LocalSource::demo(options)
            } else {
                LocalSource::from_file(Path::new(&config.search.records), options)?
            };
            tracing::info!(records = local.len(), "using local source");
            Arc::new(local)
        }
        SourceKind::Algolia => {
            let algolia = AlgoliaSource::new(&config.algolia, &config.search)?;
            tracing::info!(endpoint = %algolia.endpoint(), index = %config.algolia.index_name, "using algolia source");
            Arc::new(algolia)
        }
    };
    Ok(source)
}

//! typeahead — search-as-you-type for the terminal.
//!
//! The workspace splits into three layers, re-exported here so integration
//! tests and benches can import them from one place:
//!
//! ```text
//!   ui (typeahead-tui) ──► machine + session (typeahead-core) ──► sources (typeahead-sources)
//! ```
//!
//! The state machine is synchronous and owns no I/O; the session runs its
//! search effects on tokio; sources answer queries from a local record file
//! or an Algolia-compatible HTTP endpoint.

pub use typeahead_core::{config, machine, session, source, types};
pub use typeahead_sources as sources;
pub use typeahead_tui as ui;

use std::path::PathBuf;
use typeahead_core::config::{Config, SourceKind};

/// Command-line overrides layered on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Load this file instead of `~/.config/typeahead/config.toml`.
    pub config: Option<PathBuf>,
    pub source: Option<SourceKind>,
    /// Records file for the local source; implies `source = local` unless a
    /// source is given explicitly.
    pub records: Option<PathBuf>,
}

/// Load the config file (or an explicit one) and apply `overrides`.
///
/// A missing or broken default config file falls back to the built-in
/// defaults with a warning; an explicit `--config` path must load.
pub fn resolve_config(overrides: &Overrides) -> anyhow::Result<Config> {
    let mut config = match &overrides.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config file unusable, using defaults");
            Config::defaults()
        }),
    };

    if let Some(records) = &overrides.records {
        config.search.records = records.display().to_string();
        config.search.source = SourceKind::Local;
    }
    if let Some(source) = overrides.source {
        config.search.source = source;
    }
    Ok(config)
}

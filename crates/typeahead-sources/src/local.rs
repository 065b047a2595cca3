//! Local source — skim-style fuzzy matching over an in-memory record set.
//!
//! Records are JSON objects; the label attribute is matched against the
//! query and matched characters are wrapped in the configured highlight
//! tags, so the front-end renders local and remote hits the same way.
//!
//! With no records file configured the source serves a small embedded
//! product catalogue, enough to try the UI offline.

use crate::{record::hit_from_record, SourceError};
use futures::future::BoxFuture;
use futures::FutureExt;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use typeahead_core::config::SearchConfig;
use typeahead_core::{Hit, Source};

const DEMO_RECORDS: &str = include_str!("demo_records.json");

/// Matching and presentation knobs, usually taken from `[search]`.
#[derive(Debug, Clone)]
pub struct LocalOptions {
    pub hits_per_page: usize,
    pub label_attribute: String,
    pub highlight_pre_tag: String,
    pub highlight_post_tag: String,
}

impl From<&SearchConfig> for LocalOptions {
    fn from(search: &SearchConfig) -> Self {
        Self {
            hits_per_page: search.hits_per_page,
            label_attribute: search.label_attribute.clone(),
            highlight_pre_tag: search.highlight_pre_tag.clone(),
            highlight_post_tag: search.highlight_post_tag.clone(),
        }
    }
}

#[derive(Clone)]
pub struct LocalSource {
    /// Pre-built hits (without highlight), one per record.
    records: Arc<Vec<Hit>>,
    options: LocalOptions,
}

impl LocalSource {
    /// Build from already-parsed records. Non-object values are skipped.
    pub fn from_values(values: Vec<Value>, options: LocalOptions) -> Self {
        let records = values
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(map) => Some(map),
                other => {
                    tracing::warn!(value = %other, "skipping non-object record");
                    None
                }
            })
            .enumerate()
            .map(|(i, map): (usize, Map<String, Value>)| {
                hit_from_record(i, map, &options.label_attribute)
            })
            .collect();
        Self { records: Arc::new(records), options }
    }

    /// Load a JSON array of records from disk.
    pub fn from_file(path: &Path, options: LocalOptions) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Records {
            path: path.to_path_buf(),
            source,
        })?;
        let values: Vec<Value> =
            serde_json::from_str(&raw).map_err(|source| SourceError::RecordsShape {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), records = values.len(), "loaded local records");
        Ok(Self::from_values(values, options))
    }

    /// The embedded demo catalogue.
    pub fn demo(options: LocalOptions) -> Self {
        let values: Vec<Value> =
            serde_json::from_str(DEMO_RECORDS).expect("embedded demo records must be a JSON array");
        Self::from_values(values, options)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rank records against `query`, best first, ties in record order.
    pub fn search(&self, query: &str) -> Vec<Hit> {
        if query.is_empty() {
            return Vec::new();
        }
        let matcher = SkimMatcherV2::default().ignore_case();

        let mut scored: Vec<(i64, usize, Vec<usize>)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(i, hit)| {
                matcher
                    .fuzzy_indices(&hit.label, query)
                    .map(|(score, indices)| (score, i, indices))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        scored
            .into_iter()
            .take(self.options.hits_per_page)
            .map(|(_, i, indices)| {
                let hit = &self.records[i];
                let marked = mark(
                    &hit.label,
                    &indices,
                    &self.options.highlight_pre_tag,
                    &self.options.highlight_post_tag,
                );
                hit.clone().with_highlighted(marked)
            })
            .collect()
    }
}

impl Source for LocalSource {
    fn name(&self) -> &str {
        "local"
    }

    fn suggestions(&self, query: &str) -> BoxFuture<'static, Vec<Hit>> {
        let hits = self.search(query);
        async move { hits }.boxed()
    }
}

/// Wrap runs of matched characters (`indices` are char positions, ascending)
/// in `pre` / `post`.
fn mark(label: &str, indices: &[usize], pre: &str, post: &str) -> String {
    let mut out = String::with_capacity(label.len() + indices.len() * (pre.len() + post.len()));
    let mut matched = indices.iter().peekable();
    let mut open = false;
    for (i, ch) in label.chars().enumerate() {
        let hit = matched.peek() == Some(&&i);
        if hit {
            matched.next();
        }
        if hit && !open {
            out.push_str(pre);
            open = true;
        } else if !hit && open {
            out.push_str(post);
            open = false;
        }
        out.push(ch);
    }
    if open {
        out.push_str(post);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

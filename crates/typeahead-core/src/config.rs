//! Configuration types for typeahead.
//!
//! [`Config::load`] reads `~/.config/typeahead/config.toml`, creating it with
//! the built-in defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::machine::StalePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
source             = "local"
records            = ""
hits_per_page      = 5
label_attribute    = "name"
highlight_pre_tag  = "<mark>"
highlight_post_tag = "</mark>"
stale_results      = "discard"

[algolia]
base_url   = "http://127.0.0.1:8108"
app_id     = ""
api_key    = ""
index_name = "instant_search"
agent      = "typeahead"

[ui]
theme          = "default"
panel_max_rows = 8
mouse          = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub algolia: AlgoliaConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which adapter answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Fuzzy match over a JSON records file.
    Local,
    /// Algolia-compatible multi-query HTTP endpoint.
    Algolia,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_source")]
    pub source: SourceKind,
    /// JSON array of records for the local source. Empty means none.
    #[serde(default)]
    pub records: String,
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: usize,
    /// Record attribute shown as the hit label.
    #[serde(default = "default_label_attribute")]
    pub label_attribute: String,
    #[serde(default = "default_highlight_pre_tag")]
    pub highlight_pre_tag: String,
    #[serde(default = "default_highlight_post_tag")]
    pub highlight_post_tag: String,
    #[serde(default)]
    pub stale_results: StalePolicy,
}

fn default_source() -> SourceKind { SourceKind::Local }
fn default_hits_per_page() -> usize { 5 }
fn default_label_attribute() -> String { "name".to_string() }
fn default_highlight_pre_tag() -> String { "<mark>".to_string() }
fn default_highlight_post_tag() -> String { "</mark>".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            records: String::new(),
            hits_per_page: default_hits_per_page(),
            label_attribute: default_label_attribute(),
            highlight_pre_tag: default_highlight_pre_tag(),
            highlight_post_tag: default_highlight_post_tag(),
            stale_results: StalePolicy::default(),
        }
    }
}

/// `[algolia]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AlgoliaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_index_name")]
    pub index_name: String,
    #[serde(default = "default_agent")]
    pub agent: String,
}

fn default_base_url() -> String { "http://127.0.0.1:8108".to_string() }
fn default_index_name() -> String { "instant_search".to_string() }
fn default_agent() -> String { "typeahead".to_string() }

impl Default for AlgoliaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: String::new(),
            api_key: String::new(),
            index_name: default_index_name(),
            agent: default_agent(),
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_panel_max_rows")]
    pub panel_max_rows: u16,
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_panel_max_rows() -> u16 { 8 }
fn default_mouse() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            panel_max_rows: default_panel_max_rows(),
            mouse: default_mouse(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/typeahead/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file on top of the built-in defaults. The file must
    /// exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("typeahead")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

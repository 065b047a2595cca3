use std::path::PathBuf;

/// Failures inside a search source. These never reach the state machine:
/// [`absorb`](crate::absorb) logs them and substitutes an empty hit list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid base URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: hyper::http::uri::InvalidUri,
    },

    #[error("unsupported URL scheme in {0:?}; only plain http is supported")]
    UnsupportedScheme(String),

    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("transport error: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),

    #[error("search API returned {status}: {body}")]
    Status {
        status: hyper::StatusCode,
        body: String,
    },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read records from {path}: {source}")]
    Records {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("records in {path} are not a JSON array: {source}")]
    RecordsShape {
        path: PathBuf,
        source: serde_json::Error,
    },
}

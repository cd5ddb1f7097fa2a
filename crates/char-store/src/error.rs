//! Store error types.

use char_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when fetching project aggregates.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The store returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A response or fixture file could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// More than one aggregate row for a single project id.
    #[error("expected at most one aggregate for project '{project_id}', got {rows}")]
    AmbiguousResult { project_id: String, rows: usize },

    /// Project id that cannot be used as a lookup key.
    #[error("invalid project id: {0:?}")]
    InvalidProjectId(String),

    /// Neither a store nor a fixture directory is configured.
    #[error("no project source configured (set store.url and store.api_key, or fixtures.dir)")]
    NotConfigured,

    /// Fixture file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

//! Cross-cutting error types for Charview.
//!
//! The mapping pipeline itself never fails; these errors come from parsing
//! user input (topic keys) and from the page layer deciding that a missing
//! project is fatal. Fetch errors live in `char-store`. A unified error is
//! deferred to `char-cli`, which converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Charview crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A topic key matched none of the five supported topics.
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

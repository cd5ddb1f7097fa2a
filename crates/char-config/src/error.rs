//! Errors raised while loading or checking the Charview config.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The layered TOML / env sources could not be merged or extracted.
    #[error("failed to load charview config: {0}")]
    Figment(#[from] figment::Error),

    /// Only one of `store.url` and `store.api_key` is set.
    #[error("store.{present} is set but store.{missing} is empty; set both or neither")]
    IncompleteStore {
        present: &'static str,
        missing: &'static str,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

//! # char-config
//!
//! Layered configuration loading for Charview using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHARVIEW_*` prefix, `__` as separator)
//! 2. Project-level `.charview/config.toml`
//! 3. User-level `~/.config/charview/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHARVIEW_STORE__URL` -> `store.url`, `CHARVIEW_FIXTURES__DIR` ->
//! `fixtures.dir`, etc. The `__` (double underscore) separates nested sections.
//!
//! # Usage
//!
//! ```no_run
//! use char_config::CharviewConfig;
//!
//! let config = CharviewConfig::load_with_dotenv().expect("config");
//!
//! if config.store.is_configured() {
//!     println!("Store URL: {}", config.store.url);
//! }
//! ```

mod error;
mod fixtures;
mod general;
mod store;

pub use error::ConfigError;
pub use fixtures::FixtureConfig;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable read into the config.
pub const ENV_PREFIX: &str = "CHARVIEW_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CharviewConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fixtures: FixtureConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CharviewConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (or the workspace root in
    /// tests), then [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".charview/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make the store unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (
            self.store.url.trim().is_empty(),
            self.store.api_key.trim().is_empty(),
        ) {
            (false, true) => {
                return Err(ConfigError::IncompleteStore {
                    present: "url",
                    missing: "api_key",
                });
            }
            (true, false) => {
                return Err(ConfigError::IncompleteStore {
                    present: "api_key",
                    missing: "url",
                });
            }
            _ => {}
        }
        if self.store.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.store.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Warnings for `CHARVIEW_*` env vars that look mistyped, i.e. present
    /// while their section still holds defaults.
    pub fn unconfigured_warnings<I>(&self, env: I) -> Vec<String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
        let mut warnings = Vec::new();

        if !self.store.is_configured() && has_env_prefix(&env_keys, "CHARVIEW_STORE") {
            warnings.push(
                "Store config appears default while CHARVIEW_STORE* env vars exist. Use double underscores (example: CHARVIEW_STORE__URL)."
                    .to_string(),
            );
        }

        if !self.fixtures.is_configured() && has_env_prefix(&env_keys, "CHARVIEW_FIXTURES") {
            warnings.push(
                "Fixtures config appears default while CHARVIEW_FIXTURES* env vars exist. Use double underscores (example: CHARVIEW_FIXTURES__DIR)."
                    .to_string(),
            );
        }

        warnings
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("charview").join("config.toml"))
    }

    /// Walks up from `CARGO_MANIFEST_DIR` (if set) looking for `.env`, then
    /// falls back to the current directory. Silently does nothing if absent.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

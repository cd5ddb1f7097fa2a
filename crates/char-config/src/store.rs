//! Project store (PostgREST / Supabase) configuration.

use serde::{Deserialize, Serialize};

fn default_aggregate_view() -> String {
    "project_aggregates".to_string()
}

fn default_list_view() -> String {
    "projects".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_base_delay_ms() -> u64 {
    200
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Project base URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// API key sent as both `apikey` and bearer token.
    #[serde(default)]
    pub api_key: String,

    /// Postgres schema selected via `Accept-Profile`. Empty means the server default.
    #[serde(default)]
    pub schema: String,

    /// View returning one aggregate row per project.
    #[serde(default = "default_aggregate_view")]
    pub aggregate_view: String,

    /// View returning the project list columns.
    #[serde(default = "default_list_view")]
    pub list_view: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts per request, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// First retry delay; doubles on each further attempt.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            schema: String::new(),
            aggregate_view: default_aggregate_view(),
            list_view: default_list_view(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl StoreConfig {
    /// Check if the store has the minimum fields for remote access.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Schema for `Accept-Profile`, if one is set.
    pub fn schema(&self) -> Option<&str> {
        let schema = self.schema.trim();
        (!schema.is_empty()).then_some(schema)
    }
}

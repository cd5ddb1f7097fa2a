//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default cards per project list page.
const fn default_page_size() -> u32 {
    12
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Project cards per page for `projects`.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Tracing filter used when `CHARVIEW_LOG` is unset (e.g. "warn", "char_store=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

//! Offline fixture source: a directory of `<project_id>.json` aggregates.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FixtureConfig {
    /// Directory holding one aggregate JSON file per project.
    #[serde(default)]
    pub dir: String,
}

impl FixtureConfig {
    pub fn is_configured(&self) -> bool {
        !self.dir.trim().is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.is_configured().then(|| Path::new(self.dir.trim()))
    }
}

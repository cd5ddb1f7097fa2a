use char_config::CharviewConfig;
use char_store::{FixtureFetcher, Source};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: CharviewConfig,
    pub source: Source,
}

impl AppContext {
    /// `--fixtures` overrides whatever source the config selects.
    pub fn init(config: CharviewConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let source = match &flags.fixtures {
            Some(dir) => Source::Fixtures(FixtureFetcher::new(dir)),
            None => Source::from_config(&config)?,
        };
        tracing::debug!(source = %source.describe(), "project source ready");
        Ok(Self { config, source })
    }
}

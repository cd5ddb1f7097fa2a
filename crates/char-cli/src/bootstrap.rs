use anyhow::Context;
use char_config::CharviewConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<CharviewConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    CharviewConfig::load().context("failed to load charview configuration")
}

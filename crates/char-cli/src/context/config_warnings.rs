use char_config::CharviewConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CharviewConfig) {
    for warning in config.unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

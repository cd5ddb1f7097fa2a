//! `.env` values flow through figment into the config.

use char_config::CharviewConfig;
use figment::Jail;

#[test]
fn dotenv_file_values_reach_config() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().expect("tempdir");
        let env_path = dir.path().join(".env");
        std::fs::write(
            &env_path,
            "CHARVIEW_STORE__URL=https://dotenv.supabase.co\nCHARVIEW_STORE__API_KEY=dotenv-key\n",
        )
        .expect("write .env");

        dotenvy::from_path(&env_path).expect("dotenv loads");

        let config = CharviewConfig::load().expect("config loads");
        assert_eq!(config.store.url, "https://dotenv.supabase.co");
        assert!(config.store.is_configured());
        Ok(())
    });
}

#[test]
fn process_env_beats_dotenv() {
    Jail::expect_with(|jail| {
        jail.set_env("CHARVIEW_STORE__URL", "https://process.supabase.co");
        jail.create_file(
            ".env",
            "CHARVIEW_STORE__URL=https://dotenv.supabase.co\nCHARVIEW_STORE__API_KEY=dotenv-key\n",
        )?;

        dotenvy::from_path(".env").expect("dotenv loads");

        let config = CharviewConfig::load().expect("config loads");
        assert_eq!(config.store.url, "https://process.supabase.co");
        Ok(())
    });
}

use figment::Jail;
use vera_config::VeraConfig;

/// Point the user-level config lookup into the jail.
fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().to_path_buf();
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("VERA_LLM__API_KEY", "sk-from-env");
        jail.set_env("VERA_RETRY__MAX_ATTEMPTS", "4");
        jail.set_env("VERA_PIPELINE__STAGE_DELAYS_MS", "[10, 20, 30, 40]");

        let config = VeraConfig::load(None).expect("config loads");
        assert_eq!(config.llm.api_key, "sk-from-env");
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.pipeline.stage_delays_ms, vec![10, 20, 30, 40]);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".vera")?;
        jail.create_file(".vera/config.toml", "[llm]\nmodel = \"from-toml\"\n")?;
        jail.set_env("VERA_LLM__MODEL", "from-env");

        let config = VeraConfig::load(None).expect("config loads");
        assert_eq!(config.llm.model, "from-env");
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded_from_project_root() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(".env", "VERA_LLM__API_KEY=sk-from-dotenv\n")?;

        let root = jail.directory().to_path_buf();
        let config = VeraConfig::load_with_dotenv(Some(root.as_path())).expect("config loads");
        assert_eq!(config.llm.api_key, "sk-from-dotenv");
        Ok(())
    });
}

use std::path::PathBuf;

use clinic_config::ClinicConfig;
use figment::Jail;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("CLINIC_STORAGE__DATA_DIR", "/tmp/clinic-data");
        jail.set_env("CLINIC_GENERAL__DEFAULT_LIMIT", "7");
        jail.set_env("CLINIC_LOGIN__DEVELOPER_ENABLED", "false");

        let config = ClinicConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/clinic-data"));
        assert_eq!(config.general.default_limit, 7);
        assert!(!config.login.developer_enabled);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".clinic")).expect("mkdir");
        jail.create_file(
            ".clinic/config.toml",
            r#"
[storage]
data_dir = "from-toml"
audit_file = "trail.jsonl"
"#,
        )?;
        jail.set_env("CLINIC_STORAGE__DATA_DIR", "from-env");

        let config = ClinicConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("from-env"));
        assert_eq!(config.storage.audit_file, "trail.jsonl");
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_nest() {
    Jail::expect_with(|jail| {
        jail.set_env("CLINIC_STORAGE_DATA_DIR", "ignored");
        let config = ClinicConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        Ok(())
    });
}

#[test]
fn zero_limit_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CLINIC_GENERAL__DEFAULT_LIMIT", "0");
        let err = ClinicConfig::load().expect_err("zero limit rejected");
        assert!(err.to_string().contains("default_limit"));
        Ok(())
    });
}

//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use std::path::PathBuf;

use clinic_config::ClinicConfig;
use clinic_core::enums::EntityType;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/var/lib/clinic"
audit_enabled = false

[storage.files]
patients = "patient_list.csv"
"#,
        )?;

        let config: ClinicConfig = Figment::from(Serialized::defaults(ClinicConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/clinic"));
        assert!(!config.storage.audit_enabled);
        assert_eq!(
            config.storage.path_for(EntityType::Patient),
            PathBuf::from("/var/lib/clinic/patient_list.csv")
        );
        assert_eq!(
            config.storage.path_for(EntityType::Referral),
            PathBuf::from("/var/lib/clinic/referrals.csv"),
            "unset file names keep their defaults"
        );
        Ok(())
    });
}

#[test]
fn loads_login_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[login]
allow_role_names = false
developer_enabled = false

[general]
default_limit = 5
"#,
        )?;

        let config: ClinicConfig = Figment::from(Serialized::defaults(ClinicConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.login.allow_role_names);
        assert!(!config.login.developer_enabled);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".clinic")).expect("mkdir");
        jail.create_file(
            ".clinic/config.toml",
            r#"
[storage]
data_dir = "records"
"#,
        )?;

        let config = ClinicConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("records"));
        Ok(())
    });
}

#[test]
fn invalid_toml_is_an_error() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".clinic")).expect("mkdir");
        jail.create_file(".clinic/config.toml", "[storage\ndata_dir = ")?;
        assert!(ClinicConfig::load().is_err());
        Ok(())
    });
}

//! # clinic-config
//!
//! Layered configuration loading for clinicdesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLINIC_*` prefix, `__` as separator)
//! 2. Project-level `.clinic/config.toml`
//! 3. User-level `~/.config/clinic/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CLINIC_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `CLINIC_LOGIN__DEVELOPER_ENABLED` -> `login.developer_enabled`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use clinic_config::ClinicConfig;
//!
//! let config = ClinicConfig::load_with_dotenv().expect("config");
//! println!("data dir: {}", config.storage.data_dir.display());
//! ```

mod error;
mod general;
mod login;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use login::LoginConfig;
pub use storage::{FileNames, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".clinic/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClinicConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ClinicConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CLINIC_").split("__"))
    }

    /// Reject values that would make every command fail later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("storage.data_dir", "must not be empty"));
        }
        for entity in clinic_core::enums::EntityType::ALL {
            if self.storage.files.for_entity(entity).trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("storage.files.{}", entity.as_str()),
                    "file name must not be empty",
                ));
            }
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::invalid("general.default_limit", "must be at least 1"));
        }
        if self.general.clinic_name.trim().is_empty() {
            return Err(ConfigError::invalid("general.clinic_name", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("clinic").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ClinicConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.general.default_limit, 50);
        assert!(config.storage.audit_enabled);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ClinicConfig = ClinicConfig::figment().extract()?;
            assert_eq!(config.storage.data_dir, PathBuf::from("data"));
            assert!(config.login.allow_role_names);
            Ok(())
        });
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = ClinicConfig::default();
        config.general.default_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
    }
}

use std::path::Path;

use anyhow::Context;
use clinic_config::ClinicConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ClinicConfig> {
    load_dotenv(flags.data_dir.as_deref())?;

    let mut config = ClinicConfig::load().context("failed to load clinic configuration")?;
    apply_overrides(&mut config, flags);
    tracing::debug!(data_dir = %config.storage.data_dir.display(), "configuration loaded");
    Ok(config)
}

fn apply_overrides(config: &mut ClinicConfig, flags: &GlobalFlags) {
    if let Some(dir) = flags.data_dir.as_deref() {
        config.storage.set_data_dir(dir);
    }
}

/// A `.env` next to an explicit data directory wins over the working
/// directory's.
fn load_dotenv(data_dir: Option<&Path>) -> anyhow::Result<()> {
    if let Some(dir) = data_dir {
        let env_path = dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}

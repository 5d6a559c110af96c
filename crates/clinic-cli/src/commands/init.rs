use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use clinic_config::{ClinicConfig, PROJECT_CONFIG_PATH};
use clinic_core::entities::{
    Appointment, Clinician, Facility, Patient, Prescription, Referral, Staff,
};
use clinic_core::enums::EntityType;
use clinic_store::ClinicStore;
use clinic_store::csv_file::write_records;
use clinic_store::record::Record;
use clinic_store::seed::seed_demo;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const SEED_ACTOR: &str = "developer";

#[derive(Debug, Serialize)]
struct InitResponse {
    clinic: String,
    data_dir: String,
    created_files: Vec<String>,
    config_file: Option<String>,
    seeded: Vec<SeedCount>,
}

#[derive(Debug, Serialize)]
struct SeedCount {
    entity: EntityType,
    count: usize,
}

/// Handle `clinic init`. Existing record files and config are left alone.
pub fn handle(args: &InitArgs, config: &ClinicConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = initialize(args, config, Path::new(PROJECT_CONFIG_PATH))?;
    output(&response, flags.format)
}

fn initialize(args: &InitArgs, config: &ClinicConfig, config_path: &Path) -> anyhow::Result<InitResponse> {
    let storage = &config.storage;
    std::fs::create_dir_all(&storage.data_dir)
        .with_context(|| format!("failed to create {}", storage.data_dir.display()))?;

    let mut created_files = Vec::new();
    for entity in EntityType::ALL {
        let path = storage.path_for(entity);
        if path.exists() {
            continue;
        }
        write_header_only(entity, &path)?;
        created_files.push(path.display().to_string());
    }

    let config_file = if args.no_config || config_path.exists() {
        None
    } else {
        write_config(config, config_path)?;
        Some(config_path.display().to_string())
    };

    let seeded = if args.demo {
        let mut store = ClinicStore::from_config(storage)?;
        seed_demo(&mut store, SEED_ACTOR)?
            .into_iter()
            .map(|(entity, count)| SeedCount { entity, count })
            .collect()
    } else {
        Vec::new()
    };

    tracing::info!(
        clinic = %config.general.clinic_name,
        data_dir = %storage.data_dir.display(),
        created = created_files.len(),
        demo = args.demo,
        "data directory initialized"
    );

    Ok(InitResponse {
        clinic: config.general.clinic_name.clone(),
        data_dir: storage.data_dir.display().to_string(),
        created_files,
        config_file,
        seeded,
    })
}

fn write_header_only(entity: EntityType, path: &Path) -> anyhow::Result<()> {
    match entity {
        EntityType::Patient => header_only::<Patient>(path),
        EntityType::Clinician => header_only::<Clinician>(path),
        EntityType::Staff => header_only::<Staff>(path),
        EntityType::Appointment => header_only::<Appointment>(path),
        EntityType::Prescription => header_only::<Prescription>(path),
        EntityType::Referral => header_only::<Referral>(path),
        EntityType::Facility => header_only::<Facility>(path),
    }
}

fn header_only<T: Record>(path: &Path) -> anyhow::Result<()> {
    write_records::<T>(path, T::HEADERS, &[])?;
    Ok(())
}

fn write_config(config: &ClinicConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let body = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

//! Where the CSV files, audit trail and session live.

use std::path::{Path, PathBuf};

use clinic_core::enums::EntityType;
use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_audit_file() -> String {
    String::from("audit.jsonl")
}

const fn default_true() -> bool {
    true
}

fn default_file(entity: EntityType) -> String {
    entity.default_file_name().to_string()
}

/// Per-entity CSV file names, relative to `data_dir`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileNames {
    #[serde(default = "FileNames::default_patients")]
    pub patients: String,
    #[serde(default = "FileNames::default_clinicians")]
    pub clinicians: String,
    #[serde(default = "FileNames::default_staff")]
    pub staff: String,
    #[serde(default = "FileNames::default_appointments")]
    pub appointments: String,
    #[serde(default = "FileNames::default_prescriptions")]
    pub prescriptions: String,
    #[serde(default = "FileNames::default_referrals")]
    pub referrals: String,
    #[serde(default = "FileNames::default_facilities")]
    pub facilities: String,
}

impl FileNames {
    fn default_patients() -> String {
        default_file(EntityType::Patient)
    }
    fn default_clinicians() -> String {
        default_file(EntityType::Clinician)
    }
    fn default_staff() -> String {
        default_file(EntityType::Staff)
    }
    fn default_appointments() -> String {
        default_file(EntityType::Appointment)
    }
    fn default_prescriptions() -> String {
        default_file(EntityType::Prescription)
    }
    fn default_referrals() -> String {
        default_file(EntityType::Referral)
    }
    fn default_facilities() -> String {
        default_file(EntityType::Facility)
    }

    #[must_use]
    pub fn for_entity(&self, entity: EntityType) -> &str {
        match entity {
            EntityType::Patient => &self.patients,
            EntityType::Clinician => &self.clinicians,
            EntityType::Staff => &self.staff,
            EntityType::Appointment => &self.appointments,
            EntityType::Prescription => &self.prescriptions,
            EntityType::Referral => &self.referrals,
            EntityType::Facility => &self.facilities,
        }
    }
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            patients: Self::default_patients(),
            clinicians: Self::default_clinicians(),
            staff: Self::default_staff(),
            appointments: Self::default_appointments(),
            prescriptions: Self::default_prescriptions(),
            referrals: Self::default_referrals(),
            facilities: Self::default_facilities(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub files: FileNames,

    /// Whether mutations are appended to the JSONL audit trail.
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Audit trail file name, relative to `data_dir`.
    #[serde(default = "default_audit_file")]
    pub audit_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: FileNames::default(),
            audit_enabled: true,
            audit_file: default_audit_file(),
        }
    }
}

impl StorageConfig {
    /// Absolute-or-relative path of the CSV file for `entity`.
    #[must_use]
    pub fn path_for(&self, entity: EntityType) -> PathBuf {
        self.data_dir.join(self.files.for_entity(entity))
    }

    /// Audit trail path, or `None` when auditing is disabled.
    #[must_use]
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.audit_enabled
            .then(|| self.data_dir.join(&self.audit_file))
    }

    /// File holding the logged-in identity between commands.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(".clinic-session.json")
    }

    /// Lock file taken by mutating commands.
    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.data_dir.join(".clinic.write.lock")
    }

    /// Output directory for rendered referral letters.
    #[must_use]
    pub fn letters_dir(&self) -> PathBuf {
        self.data_dir.join("letters")
    }

    /// Replace the data directory, e.g. from a `--data-dir` flag.
    pub fn set_data_dir(&mut self, dir: &Path) {
        self.data_dir = dir.to_path_buf();
    }
}

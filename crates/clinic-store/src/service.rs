//! Store orchestrating every repository plus the audit trail.
//!
//! `ClinicStore` owns one `CsvRepository` per record type and an
//! `AuditTrail`. Record operations are implemented as `impl ClinicStore`
//! blocks in `repos/`.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use clinic_config::StorageConfig;
use clinic_core::entities::{
    Appointment, Clinician, Facility, Patient, Prescription, Referral, Staff,
};
use clinic_core::enums::{AuditOp, EntityType};

use crate::audit::AuditTrail;
use crate::error::StoreError;
use crate::repository::CsvRepository;

/// CSV file location for each record type.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub patients: PathBuf,
    pub clinicians: PathBuf,
    pub staff: PathBuf,
    pub appointments: PathBuf,
    pub prescriptions: PathBuf,
    pub referrals: PathBuf,
    pub facilities: PathBuf,
}

impl StorePaths {
    /// Default file names under `dir`.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::from_fn(|entity| dir.join(entity.default_file_name()))
    }

    #[must_use]
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::from_fn(|entity| storage.path_for(entity))
    }

    fn from_fn(path_for: impl Fn(EntityType) -> PathBuf) -> Self {
        Self {
            patients: path_for(EntityType::Patient),
            clinicians: path_for(EntityType::Clinician),
            staff: path_for(EntityType::Staff),
            appointments: path_for(EntityType::Appointment),
            prescriptions: path_for(EntityType::Prescription),
            referrals: path_for(EntityType::Referral),
            facilities: path_for(EntityType::Facility),
        }
    }
}

/// Every CSV-backed repository, with mutations recorded to the audit trail.
///
/// Every mutation method follows this protocol:
/// 1. Validate input and status transitions
/// 2. Persist to the CSV file (append for creates, rewrite otherwise)
/// 3. Append an audit record
pub struct ClinicStore {
    pub(crate) patients: CsvRepository<Patient>,
    pub(crate) clinicians: CsvRepository<Clinician>,
    pub(crate) staff: CsvRepository<Staff>,
    pub(crate) appointments: CsvRepository<Appointment>,
    pub(crate) prescriptions: CsvRepository<Prescription>,
    pub(crate) referrals: CsvRepository<Referral>,
    pub(crate) facilities: CsvRepository<Facility>,
    audit: AuditTrail,
}

impl ClinicStore {
    /// Load every CSV file. Pass `None` for `audit_path` to disable the
    /// audit trail.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any file cannot be parsed or the audit
    /// directory cannot be created.
    pub fn open(paths: &StorePaths, audit_path: Option<PathBuf>) -> Result<Self, StoreError> {
        let audit = match audit_path {
            Some(path) => AuditTrail::new(path)?,
            None => AuditTrail::disabled(),
        };
        let store = Self {
            patients: CsvRepository::load(&paths.patients)?,
            clinicians: CsvRepository::load(&paths.clinicians)?,
            staff: CsvRepository::load(&paths.staff)?,
            appointments: CsvRepository::load(&paths.appointments)?,
            prescriptions: CsvRepository::load(&paths.prescriptions)?,
            referrals: CsvRepository::load(&paths.referrals)?,
            facilities: CsvRepository::load(&paths.facilities)?,
            audit,
        };
        tracing::info!(
            patients = store.patients.len(),
            clinicians = store.clinicians.len(),
            staff = store.staff.len(),
            appointments = store.appointments.len(),
            prescriptions = store.prescriptions.len(),
            referrals = store.referrals.len(),
            facilities = store.facilities.len(),
            "clinic store opened"
        );
        Ok(store)
    }

    /// Open using the configured data directory and file names.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open`].
    pub fn from_config(storage: &StorageConfig) -> Result<Self, StoreError> {
        Self::open(&StorePaths::from_config(storage), storage.audit_path())
    }

    /// An in-memory store with no files and no audit trail.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            patients: CsvRepository::detached(),
            clinicians: CsvRepository::detached(),
            staff: CsvRepository::detached(),
            appointments: CsvRepository::detached(),
            prescriptions: CsvRepository::detached(),
            referrals: CsvRepository::detached(),
            facilities: CsvRepository::detached(),
            audit: AuditTrail::disabled(),
        }
    }

    /// Re-read every CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any file cannot be parsed.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.patients.reload()?;
        self.clinicians.reload()?;
        self.staff.reload()?;
        self.appointments.reload()?;
        self.prescriptions.reload()?;
        self.referrals.reload()?;
        self.facilities.reload()?;
        Ok(())
    }

    #[must_use]
    pub const fn patients(&self) -> &CsvRepository<Patient> {
        &self.patients
    }

    #[must_use]
    pub const fn clinicians(&self) -> &CsvRepository<Clinician> {
        &self.clinicians
    }

    #[must_use]
    pub const fn staff(&self) -> &CsvRepository<Staff> {
        &self.staff
    }

    #[must_use]
    pub const fn appointments(&self) -> &CsvRepository<Appointment> {
        &self.appointments
    }

    #[must_use]
    pub const fn prescriptions(&self) -> &CsvRepository<Prescription> {
        &self.prescriptions
    }

    #[must_use]
    pub const fn referrals(&self) -> &CsvRepository<Referral> {
        &self.referrals
    }

    #[must_use]
    pub const fn facilities(&self) -> &CsvRepository<Facility> {
        &self.facilities
    }

    #[must_use]
    pub const fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    /// Access the audit trail mutably (e.g., to disable during seeding).
    pub const fn audit_mut(&mut self) -> &mut AuditTrail {
        &mut self.audit
    }

    /// Whether every repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
            && self.clinicians.is_empty()
            && self.staff.is_empty()
            && self.appointments.is_empty()
            && self.prescriptions.is_empty()
            && self.referrals.is_empty()
            && self.facilities.is_empty()
    }

    /// Record count per entity type.
    #[must_use]
    pub fn counts(&self) -> Vec<(EntityType, usize)> {
        EntityType::ALL
            .iter()
            .map(|&entity| (entity, self.count(entity)))
            .collect()
    }

    fn count(&self, entity: EntityType) -> usize {
        match entity {
            EntityType::Patient => self.patients.len(),
            EntityType::Clinician => self.clinicians.len(),
            EntityType::Staff => self.staff.len(),
            EntityType::Appointment => self.appointments.len(),
            EntityType::Prescription => self.prescriptions.len(),
            EntityType::Referral => self.referrals.len(),
            EntityType::Facility => self.facilities.len(),
        }
    }

    /// Append an audit record with `payload` serialized as its data.
    pub(crate) fn record_audit<P: Serialize>(
        &self,
        actor: &str,
        op: AuditOp,
        entity: EntityType,
        id: &str,
        payload: &P,
    ) -> Result<(), StoreError> {
        let data = serde_json::to_value(payload)?;
        self.audit.log(actor, op, entity, id, data)
    }

    /// Whether `id` names an existing facility. Empty IDs count as present.
    pub(crate) fn facility_known(&self, id: &str) -> bool {
        id.is_empty() || self.facilities.contains(id)
    }
}

/// Local calendar date used for defaulted date fields.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::samples;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_empty_dir_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ClinicStore::open(&StorePaths::in_dir(dir.path()), None).unwrap();
        assert!(store.is_empty());
        assert!(!store.audit().is_enabled());
    }

    #[test]
    fn from_config_uses_configured_names() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut storage = StorageConfig::default();
        storage.set_data_dir(dir.path());
        storage.files.patients = "people.csv".into();

        let mut store = ClinicStore::from_config(&storage).unwrap();
        store.create_patient("ST001", samples::patient("")).unwrap();

        assert!(dir.path().join("people.csv").exists());
        assert!(dir.path().join("audit.jsonl").exists());
    }

    #[test]
    fn counts_cover_every_entity() {
        let store = ClinicStore::detached();
        let counts = store.counts();
        assert_eq!(counts.len(), EntityType::ALL.len());
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn reload_sees_external_edits() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = StorePaths::in_dir(dir.path());
        let mut store = ClinicStore::open(&paths, None).unwrap();
        store.create_patient("ST001", samples::patient("")).unwrap();

        let mut other = ClinicStore::open(&paths, None).unwrap();
        other.create_patient("ST002", samples::patient("")).unwrap();

        store.reload().unwrap();
        assert_eq!(store.patients().len(), 2);
    }
}

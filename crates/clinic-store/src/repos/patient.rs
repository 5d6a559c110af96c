//! Patient repository: registration, demographics and lookup.

use clinic_core::entities::Patient;
use clinic_core::enums::{AuditOp, EntityType};
use clinic_core::ids::PREFIX_PATIENT;

use super::{limited, require, text_matches};
use crate::error::StoreError;
use crate::service::{ClinicStore, today};
use crate::updates::patient::PatientUpdate;

/// Filter criteria for patient listings.
#[derive(Debug, Default, Clone)]
pub struct PatientFilter {
    /// Matches name, NHS number, ID or postcode.
    pub search: Option<String>,
    pub gp_surgery_id: Option<String>,
    pub limit: Option<u32>,
}

impl ClinicStore {
    /// Register a patient.
    ///
    /// An empty `patient_id` is assigned the next free `P` ID and a missing
    /// registration date defaults to today. An unknown GP surgery is logged
    /// but accepted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a missing name, or
    /// `StoreError::Duplicate` for an NHS number already registered to
    /// another patient.
    pub fn create_patient(&mut self, actor: &str, mut patient: Patient) -> Result<Patient, StoreError> {
        require("first_name", &patient.first_name)?;
        require("last_name", &patient.last_name)?;
        self.check_nhs_number(&patient.nhs_number, None)?;

        if patient.patient_id.trim().is_empty() {
            patient.patient_id = self.patients.next_id(PREFIX_PATIENT);
        }
        if patient.registration_date.is_none() {
            patient.registration_date = Some(today());
        }
        if let Some(surgery) = patient
            .gp_surgery_id
            .as_deref()
            .filter(|s| !self.facility_known(s))
        {
            tracing::warn!(patient_id = %patient.patient_id, surgery, "GP surgery not found");
        }

        self.patients.add_and_append(patient.clone())?;
        self.record_audit(actor, AuditOp::Create, EntityType::Patient, &patient.patient_id, &patient)?;
        tracing::info!(patient_id = %patient.patient_id, "patient registered");
        Ok(patient)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no patient has this ID.
    pub fn get_patient(&self, id: &str) -> Result<Patient, StoreError> {
        self.patients
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Patient, id))
    }

    #[must_use]
    pub fn list_patients(&self, filter: &PatientFilter) -> Vec<Patient> {
        let matches = self.patients.find_where(|p| {
            text_matches(
                filter.search.as_deref(),
                &[
                    p.patient_id.as_str(),
                    p.first_name.as_str(),
                    p.last_name.as_str(),
                    p.full_name().as_str(),
                    p.nhs_number.as_str(),
                    p.postcode.as_str(),
                ],
            ) && filter
                .gp_surgery_id
                .as_deref()
                .is_none_or(|s| p.gp_surgery_id.as_deref() == Some(s))
        });
        limited(matches, filter.limit)
    }

    /// Apply `update` to a patient. An empty update returns the record
    /// unchanged without writing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, `StoreError::Validation` if the
    /// update blanks a name, or `StoreError::Duplicate` if it reuses another
    /// patient's NHS number.
    pub fn update_patient(
        &mut self,
        actor: &str,
        id: &str,
        update: &PatientUpdate,
    ) -> Result<Patient, StoreError> {
        let mut patient = self.get_patient(id)?;
        if update.is_empty() {
            return Ok(patient);
        }
        update.apply(&mut patient);
        require("first_name", &patient.first_name)?;
        require("last_name", &patient.last_name)?;
        if update.nhs_number.is_some() {
            self.check_nhs_number(&patient.nhs_number, Some(id))?;
        }

        self.patients.update(patient.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Patient, id, update)?;
        tracing::info!(patient_id = id, "patient updated");
        Ok(patient)
    }

    /// Remove a patient record only. Appointments, prescriptions and
    /// referrals are left in place; see [`Self::purge_patient_records`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no patient has this ID.
    pub fn delete_patient(&mut self, actor: &str, id: &str) -> Result<Patient, StoreError> {
        let removed = self.patients.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Patient, id, &serde_json::Value::Null)?;
        tracing::info!(patient_id = id, "patient deleted");
        Ok(removed)
    }

    fn check_nhs_number(&self, nhs_number: &str, own_id: Option<&str>) -> Result<(), StoreError> {
        let nhs_number = nhs_number.trim();
        if nhs_number.is_empty() {
            return Ok(());
        }
        let taken = self.patients.get_all().iter().find(|p| {
            p.nhs_number.trim() == nhs_number && Some(p.patient_id.as_str()) != own_id
        });
        match taken {
            Some(other) => {
                tracing::debug!(nhs_number, holder = %other.patient_id, "NHS number already registered");
                Err(StoreError::Duplicate {
                    entity: EntityType::Patient,
                    id: format!("NHS number {nhs_number}"),
                })
            }
            None => Ok(()),
        }
    }
}

//! Clinician repository.

use clinic_core::entities::Clinician;
use clinic_core::enums::{AuditOp, EntityType};
use clinic_core::ids::PREFIX_CLINICIAN;

use super::{limited, require, text_matches};
use crate::error::StoreError;
use crate::service::{ClinicStore, today};
use crate::updates::clinician::ClinicianUpdate;

/// Filter criteria for clinician listings.
#[derive(Debug, Default, Clone)]
pub struct ClinicianFilter {
    /// Matches name, ID or GMC number.
    pub search: Option<String>,
    /// Substring of the speciality, case-insensitive.
    pub speciality: Option<String>,
    pub workplace_id: Option<String>,
    pub nurses_only: bool,
    pub limit: Option<u32>,
}

impl ClinicStore {
    /// Add a clinician, assigning the next `C` ID when `clinician_id` is
    /// empty and defaulting the start date to today.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a missing name, or the
    /// repository error if the ID is malformed or taken.
    pub fn create_clinician(
        &mut self,
        actor: &str,
        mut clinician: Clinician,
    ) -> Result<Clinician, StoreError> {
        require("first_name", &clinician.first_name)?;
        require("last_name", &clinician.last_name)?;
        if clinician.clinician_id.trim().is_empty() {
            clinician.clinician_id = self.clinicians.next_id(PREFIX_CLINICIAN);
        }
        if clinician.start_date.is_none() {
            clinician.start_date = Some(today());
        }
        if let Some(workplace) = clinician
            .workplace_id
            .as_deref()
            .filter(|w| !self.facility_known(w))
        {
            tracing::warn!(clinician_id = %clinician.clinician_id, workplace, "workplace not found");
        }

        self.clinicians.add_and_append(clinician.clone())?;
        self.record_audit(
            actor,
            AuditOp::Create,
            EntityType::Clinician,
            &clinician.clinician_id,
            &clinician,
        )?;
        tracing::info!(clinician_id = %clinician.clinician_id, "clinician added");
        Ok(clinician)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no clinician has this ID.
    pub fn get_clinician(&self, id: &str) -> Result<Clinician, StoreError> {
        self.clinicians
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Clinician, id))
    }

    #[must_use]
    pub fn list_clinicians(&self, filter: &ClinicianFilter) -> Vec<Clinician> {
        let matches = self.clinicians.find_where(|c| {
            text_matches(
                filter.search.as_deref(),
                &[
                    c.clinician_id.as_str(),
                    c.first_name.as_str(),
                    c.last_name.as_str(),
                    c.full_name().as_str(),
                    c.gmc_number.as_str(),
                ],
            ) && text_matches(filter.speciality.as_deref(), &[c.speciality.as_str()])
                && filter
                    .workplace_id
                    .as_deref()
                    .is_none_or(|w| c.workplace_id.as_deref() == Some(w))
                && (!filter.nurses_only || c.is_nurse())
        });
        limited(matches, filter.limit)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, or `StoreError::Validation` if the
    /// update blanks a name.
    pub fn update_clinician(
        &mut self,
        actor: &str,
        id: &str,
        update: &ClinicianUpdate,
    ) -> Result<Clinician, StoreError> {
        let mut clinician = self.get_clinician(id)?;
        if update.is_empty() {
            return Ok(clinician);
        }
        update.apply(&mut clinician);
        require("first_name", &clinician.first_name)?;
        require("last_name", &clinician.last_name)?;

        self.clinicians.update(clinician.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Clinician, id, update)?;
        tracing::info!(clinician_id = id, "clinician updated");
        Ok(clinician)
    }

    /// Remove a clinician. Appointments and referrals naming them are kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no clinician has this ID.
    pub fn delete_clinician(&mut self, actor: &str, id: &str) -> Result<Clinician, StoreError> {
        let removed = self.clinicians.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Clinician, id, &serde_json::Value::Null)?;
        tracing::info!(clinician_id = id, "clinician deleted");
        Ok(removed)
    }
}

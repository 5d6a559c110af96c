//! Facility repository: surgeries, hospitals, clinics and pharmacies.

use clinic_core::entities::Facility;
use clinic_core::enums::{AuditOp, EntityType, FacilityType};

use super::{limited, require, text_matches};
use crate::error::StoreError;
use crate::service::ClinicStore;
use crate::updates::facility::FacilityUpdate;

/// Filter criteria for facility listings.
#[derive(Debug, Default, Clone)]
pub struct FacilityFilter {
    /// Matches name, ID, postcode or specialities.
    pub search: Option<String>,
    pub facility_type: Option<FacilityType>,
    pub limit: Option<u32>,
}

impl ClinicStore {
    /// Add a facility. An empty `facility_id` is assigned the next ID under
    /// the prefix for its type (`S` surgery, `H` hospital, `F` otherwise).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a missing name, or the
    /// repository error if the ID is malformed for the type or taken.
    pub fn create_facility(&mut self, actor: &str, mut facility: Facility) -> Result<Facility, StoreError> {
        require("facility_name", &facility.facility_name)?;
        if facility.facility_id.trim().is_empty() {
            facility.facility_id = self.facilities.next_id(facility.facility_type.id_prefix());
        }

        self.facilities.add_and_append(facility.clone())?;
        self.record_audit(
            actor,
            AuditOp::Create,
            EntityType::Facility,
            &facility.facility_id,
            &facility,
        )?;
        tracing::info!(
            facility_id = %facility.facility_id,
            facility_type = %facility.facility_type,
            "facility added"
        );
        Ok(facility)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no facility has this ID.
    pub fn get_facility(&self, id: &str) -> Result<Facility, StoreError> {
        self.facilities
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Facility, id))
    }

    #[must_use]
    pub fn list_facilities(&self, filter: &FacilityFilter) -> Vec<Facility> {
        let matches = self.facilities.find_where(|f| {
            text_matches(
                filter.search.as_deref(),
                &[
                    f.facility_id.as_str(),
                    f.facility_name.as_str(),
                    f.postcode.as_str(),
                    f.specialities_offered.as_str(),
                ],
            ) && filter.facility_type.is_none_or(|t| t == f.facility_type)
        });
        limited(matches, filter.limit)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, or `StoreError::Validation` if the
    /// update blanks the name.
    pub fn update_facility(
        &mut self,
        actor: &str,
        id: &str,
        update: &FacilityUpdate,
    ) -> Result<Facility, StoreError> {
        let mut facility = self.get_facility(id)?;
        if update.is_empty() {
            return Ok(facility);
        }
        update.apply(&mut facility);
        require("facility_name", &facility.facility_name)?;

        self.facilities.update(facility.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Facility, id, update)?;
        tracing::info!(facility_id = id, "facility updated");
        Ok(facility)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no facility has this ID.
    pub fn delete_facility(&mut self, actor: &str, id: &str) -> Result<Facility, StoreError> {
        let removed = self.facilities.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Facility, id, &serde_json::Value::Null)?;
        tracing::info!(facility_id = id, "facility deleted");
        Ok(removed)
    }
}

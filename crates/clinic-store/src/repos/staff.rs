//! Staff repository.

use clinic_core::entities::Staff;
use clinic_core::enums::{AuditOp, EntityType};
use clinic_core::ids::PREFIX_STAFF;

use super::{eq_ignore_case, limited, require, text_matches};
use crate::error::StoreError;
use crate::service::{ClinicStore, today};
use crate::updates::staff::StaffUpdate;

/// Filter criteria for staff listings.
#[derive(Debug, Default, Clone)]
pub struct StaffFilter {
    /// Matches name, ID or department.
    pub search: Option<String>,
    /// Exact role label, case-insensitive.
    pub role: Option<String>,
    pub facility_id: Option<String>,
    pub limit: Option<u32>,
}

impl ClinicStore {
    /// Add a staff member, assigning the next `ST` ID when `staff_id` is empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a missing name or role, or the
    /// repository error if the ID is malformed or taken.
    pub fn create_staff(&mut self, actor: &str, mut staff: Staff) -> Result<Staff, StoreError> {
        require("first_name", &staff.first_name)?;
        require("last_name", &staff.last_name)?;
        require("role", &staff.role)?;
        if staff.staff_id.trim().is_empty() {
            staff.staff_id = self.staff.next_id(PREFIX_STAFF);
        }
        if staff.start_date.is_none() {
            staff.start_date = Some(today());
        }
        if let Some(facility) = staff
            .facility_id
            .as_deref()
            .filter(|f| !self.facility_known(f))
        {
            tracing::warn!(staff_id = %staff.staff_id, facility, "facility not found");
        }

        self.staff.add_and_append(staff.clone())?;
        self.record_audit(actor, AuditOp::Create, EntityType::Staff, &staff.staff_id, &staff)?;
        tracing::info!(staff_id = %staff.staff_id, role = %staff.role, "staff member added");
        Ok(staff)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no staff member has this ID.
    pub fn get_staff(&self, id: &str) -> Result<Staff, StoreError> {
        self.staff
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Staff, id))
    }

    #[must_use]
    pub fn list_staff(&self, filter: &StaffFilter) -> Vec<Staff> {
        let matches = self.staff.find_where(|s| {
            text_matches(
                filter.search.as_deref(),
                &[
                    s.staff_id.as_str(),
                    s.first_name.as_str(),
                    s.last_name.as_str(),
                    s.full_name().as_str(),
                    s.department.as_str(),
                ],
            ) && eq_ignore_case(filter.role.as_deref(), &s.role)
                && filter
                    .facility_id
                    .as_deref()
                    .is_none_or(|f| s.facility_id.as_deref() == Some(f))
        });
        limited(matches, filter.limit)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, or `StoreError::Validation` if the
    /// update blanks a name or the role.
    pub fn update_staff(
        &mut self,
        actor: &str,
        id: &str,
        update: &StaffUpdate,
    ) -> Result<Staff, StoreError> {
        let mut staff = self.get_staff(id)?;
        if update.is_empty() {
            return Ok(staff);
        }
        update.apply(&mut staff);
        require("first_name", &staff.first_name)?;
        require("last_name", &staff.last_name)?;
        require("role", &staff.role)?;

        self.staff.update(staff.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Staff, id, update)?;
        tracing::info!(staff_id = id, "staff member updated");
        Ok(staff)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no staff member has this ID.
    pub fn delete_staff(&mut self, actor: &str, id: &str) -> Result<Staff, StoreError> {
        let removed = self.staff.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Staff, id, &serde_json::Value::Null)?;
        tracing::info!(staff_id = id, "staff member deleted");
        Ok(removed)
    }
}

//! Prescription repository: issuing, collection and cancellation.

use clinic_core::entities::Prescription;
use clinic_core::enums::{AuditOp, EntityType, PrescriptionStatus};
use clinic_core::ids::PREFIX_PRESCRIPTION;

use super::{limited, require, text_matches};
use crate::error::StoreError;
use crate::service::{ClinicStore, today};
use crate::updates::prescription::PrescriptionUpdate;

/// Filter criteria for prescription listings.
#[derive(Debug, Default, Clone)]
pub struct PrescriptionFilter {
    pub patient_id: Option<String>,
    pub clinician_id: Option<String>,
    pub status: Option<PrescriptionStatus>,
    /// Substring of the medication name, case-insensitive.
    pub medication: Option<String>,
    pub limit: Option<u32>,
}

impl ClinicStore {
    /// Issue a prescription. Assigns the next `RX` ID when empty and
    /// defaults `issue_date` to the prescription date.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when the patient, clinician or
    /// medication is blank.
    pub fn create_prescription(
        &mut self,
        actor: &str,
        mut prescription: Prescription,
    ) -> Result<Prescription, StoreError> {
        require("patient_id", &prescription.patient_id)?;
        require("clinician_id", &prescription.clinician_id)?;
        require("medication_name", &prescription.medication_name)?;
        if prescription.prescription_id.trim().is_empty() {
            prescription.prescription_id = self.prescriptions.next_id(PREFIX_PRESCRIPTION);
        }
        if prescription.issue_date.is_none() {
            prescription.issue_date = Some(prescription.prescription_date);
        }

        let id = prescription.prescription_id.as_str();
        if !self.patients.contains(&prescription.patient_id) {
            tracing::warn!(prescription_id = id, patient_id = %prescription.patient_id, "patient not found");
        }
        if !self.clinicians.contains(&prescription.clinician_id) {
            tracing::warn!(prescription_id = id, clinician_id = %prescription.clinician_id, "clinician not found");
        }
        if let Some(appointment) = prescription
            .appointment_id
            .as_deref()
            .filter(|a| !self.appointments.contains(a))
        {
            tracing::warn!(prescription_id = id, appointment, "appointment not found");
        }

        self.prescriptions.add_and_append(prescription.clone())?;
        self.record_audit(
            actor,
            AuditOp::Create,
            EntityType::Prescription,
            &prescription.prescription_id,
            &prescription,
        )?;
        tracing::info!(
            prescription_id = %prescription.prescription_id,
            patient_id = %prescription.patient_id,
            medication = %prescription.medication_name,
            "prescription issued"
        );
        Ok(prescription)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no prescription has this ID.
    pub fn get_prescription(&self, id: &str) -> Result<Prescription, StoreError> {
        self.prescriptions
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Prescription, id))
    }

    /// Matching prescriptions, newest first.
    #[must_use]
    pub fn list_prescriptions(&self, filter: &PrescriptionFilter) -> Vec<Prescription> {
        let mut matches = self.prescriptions.find_where(|p| {
            filter.patient_id.as_deref().is_none_or(|id| id == p.patient_id)
                && filter.clinician_id.as_deref().is_none_or(|id| id == p.clinician_id)
                && filter.status.is_none_or(|s| s == p.status)
                && text_matches(filter.medication.as_deref(), &[p.medication_name.as_str()])
        });
        matches.sort_by(|a, b| b.prescription_date.cmp(&a.prescription_date));
        limited(matches, filter.limit)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::InvalidTransition`.
    pub fn update_prescription(
        &mut self,
        actor: &str,
        id: &str,
        update: &PrescriptionUpdate,
    ) -> Result<Prescription, StoreError> {
        let mut prescription = self.get_prescription(id)?;
        if update.is_empty() {
            return Ok(prescription);
        }
        if let Some(next) = update.status {
            check_transition(&prescription, next)?;
        }
        update.apply(&mut prescription);

        self.prescriptions.update(prescription.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Prescription, id, update)?;
        tracing::info!(prescription_id = id, "prescription updated");
        Ok(prescription)
    }

    /// Move a prescription to `next` status. Collecting stamps the
    /// collection date with today.
    /// Asking for the current status returns the record untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::InvalidTransition`.
    pub fn transition_prescription(
        &mut self,
        actor: &str,
        id: &str,
        next: PrescriptionStatus,
    ) -> Result<Prescription, StoreError> {
        let current = self.get_prescription(id)?;
        if current.status == next {
            tracing::debug!(prescription_id = id, status = %next, "status unchanged");
            return Ok(current);
        }
        check_transition(&current, next)?;

        let mut updated = Prescription {
            status: next,
            ..current.clone()
        };
        if next == PrescriptionStatus::Collected && updated.collection_date.is_none() {
            updated.collection_date = Some(today());
        }
        self.prescriptions.update(updated.clone())?;
        self.record_audit(
            actor,
            AuditOp::Transition,
            EntityType::Prescription,
            id,
            &serde_json::json!({"from": current.status, "to": next}),
        )?;
        tracing::info!(prescription_id = id, from = %current.status, to = %next, "prescription status changed");
        Ok(updated)
    }

    /// # Errors
    ///
    /// See [`Self::transition_prescription`].
    pub fn collect_prescription(&mut self, actor: &str, id: &str) -> Result<Prescription, StoreError> {
        self.transition_prescription(actor, id, PrescriptionStatus::Collected)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no prescription has this ID.
    pub fn delete_prescription(&mut self, actor: &str, id: &str) -> Result<Prescription, StoreError> {
        let removed = self.prescriptions.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Prescription, id, &serde_json::Value::Null)?;
        tracing::info!(prescription_id = id, "prescription deleted");
        Ok(removed)
    }
}

fn check_transition(current: &Prescription, next: PrescriptionStatus) -> Result<(), StoreError> {
    if current.status == next || current.status.can_transition_to(next) {
        return Ok(());
    }
    Err(StoreError::InvalidTransition {
        entity: EntityType::Prescription,
        id: current.prescription_id.clone(),
        from: current.status.to_string(),
        to: next.to_string(),
    })
}

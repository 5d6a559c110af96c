//! Patient-centred reads and bulk removal of a patient's clinical records.

use clinic_core::enums::{AuditOp, EntityType};
use clinic_core::responses::{PatientRecordResponse, PurgeResponse};

use crate::error::StoreError;
use crate::repos::appointment::AppointmentFilter;
use crate::repos::prescription::PrescriptionFilter;
use crate::repos::referral::ReferralFilter;
use crate::service::ClinicStore;

impl ClinicStore {
    /// A patient with every appointment, prescription and referral that
    /// names them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no patient has this ID.
    pub fn patient_record(&self, patient_id: &str) -> Result<PatientRecordResponse, StoreError> {
        let patient = self.get_patient(patient_id)?;
        Ok(PatientRecordResponse {
            appointments: self.list_appointments(&AppointmentFilter {
                patient_id: Some(patient_id.to_string()),
                ..AppointmentFilter::default()
            }),
            prescriptions: self.list_prescriptions(&PrescriptionFilter {
                patient_id: Some(patient_id.to_string()),
                ..PrescriptionFilter::default()
            }),
            referrals: self.list_referrals(&ReferralFilter {
                patient_id: Some(patient_id.to_string()),
                ..ReferralFilter::default()
            }),
            patient,
        })
    }

    /// Remove every appointment, prescription and referral for
    /// `patient_id`. The patient row itself is untouched, and the purge
    /// works for IDs whose patient row is already gone.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a CSV rewrite fails. Files rewritten before
    /// the failure stay purged.
    pub fn purge_patient_records(
        &mut self,
        actor: &str,
        patient_id: &str,
    ) -> Result<PurgeResponse, StoreError> {
        let appointments = self.appointments.retain(|a| a.patient_id != patient_id)?;
        let prescriptions = self.prescriptions.retain(|p| p.patient_id != patient_id)?;
        let referrals = self.referrals.retain(|r| r.patient_id != patient_id)?;

        let response = PurgeResponse {
            patient_id: patient_id.to_string(),
            appointments_removed: count(appointments.len()),
            prescriptions_removed: count(prescriptions.len()),
            referrals_removed: count(referrals.len()),
        };
        if response.total() > 0 {
            self.record_audit(actor, AuditOp::Purge, EntityType::Patient, patient_id, &response)?;
        }
        tracing::info!(
            patient_id,
            appointments = response.appointments_removed,
            prescriptions = response.prescriptions_removed,
            referrals = response.referrals_removed,
            "patient records purged"
        );
        Ok(response)
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::StorePaths;
    use crate::test_support::helpers::{clinic_store, temp_store};
    use crate::test_support::samples;
    use pretty_assertions::assert_eq;

    fn with_history(store: &mut ClinicStore) {
        for patient in ["P001", "P001", "P002"] {
            store
                .create_appointment("ST001", samples::appointment("", patient, "C001"))
                .unwrap();
        }
        store
            .create_prescription("C001", samples::prescription("", "P001", "C001"))
            .unwrap();
        store
            .create_referral("C001", samples::referral("", "P002", "C001"))
            .unwrap();
    }

    #[test]
    fn record_collects_everything_for_patient() {
        let mut store = clinic_store();
        with_history(&mut store);

        let record = store.patient_record("P001").unwrap();
        assert_eq!(record.patient.patient_id, "P001");
        assert_eq!(record.appointments.len(), 2);
        assert_eq!(record.prescriptions.len(), 1);
        assert!(record.referrals.is_empty());
    }

    #[test]
    fn purge_removes_only_that_patient() {
        let mut store = clinic_store();
        with_history(&mut store);

        let purged = store.purge_patient_records("ST001", "P001").unwrap();
        assert_eq!(
            purged,
            PurgeResponse {
                patient_id: "P001".into(),
                appointments_removed: 2,
                prescriptions_removed: 1,
                referrals_removed: 0,
            }
        );
        assert!(store.get_patient("P001").is_ok());
        assert_eq!(store.appointments().len(), 1);
        assert_eq!(store.referrals().len(), 1);
    }

    #[test]
    fn purge_after_patient_deleted() {
        let mut store = clinic_store();
        with_history(&mut store);
        store.delete_patient("ST001", "P002").unwrap();

        let purged = store.purge_patient_records("ST001", "P002").unwrap();
        assert_eq!(purged.total(), 2);
    }

    #[test]
    fn purge_persists_and_audits() {
        let (dir, mut store) = temp_store();
        store.create_patient("ST001", samples::patient("")).unwrap();
        store
            .create_appointment("ST001", samples::appointment("", "P001", "C001"))
            .unwrap();
        store.purge_patient_records("ST001", "P001").unwrap();

        let reopened = ClinicStore::open(&StorePaths::in_dir(dir.path()), None).unwrap();
        assert!(reopened.appointments().is_empty());

        let audit = store.audit().read_all().unwrap();
        assert_eq!(audit.last().unwrap().op, AuditOp::Purge);
        assert_eq!(audit.last().unwrap().data["appointments_removed"], 1);
    }

    #[test]
    fn purge_with_nothing_is_not_audited() {
        let (_dir, mut store) = temp_store();
        let purged = store.purge_patient_records("ST001", "P404").unwrap();
        assert_eq!(purged.total(), 0);
        assert!(store.audit().read_all().unwrap().is_empty());
    }
}

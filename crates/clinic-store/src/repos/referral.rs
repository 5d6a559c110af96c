//! Referral repository: creation, status workflow and lookup.

use clinic_core::entities::Referral;
use clinic_core::enums::{AuditOp, EntityType, ReferralStatus, UrgencyLevel};
use clinic_core::ids::PREFIX_REFERRAL;

use super::{limited, require};
use crate::error::StoreError;
use crate::service::{ClinicStore, today};
use crate::updates::referral::ReferralUpdate;

/// Filter criteria for referral listings.
#[derive(Debug, Default, Clone)]
pub struct ReferralFilter {
    pub patient_id: Option<String>,
    /// Matches either the referring or the referred-to clinician.
    pub clinician_id: Option<String>,
    /// Matches either the referring or the referred-to facility.
    pub facility_id: Option<String>,
    pub status: Option<ReferralStatus>,
    pub urgency: Option<UrgencyLevel>,
    /// Only referrals still in progress.
    pub open_only: bool,
    pub limit: Option<u32>,
}

impl ReferralFilter {
    fn matches(&self, r: &Referral) -> bool {
        self.patient_id.as_deref().is_none_or(|p| p == r.patient_id)
            && self.clinician_id.as_deref().is_none_or(|c| {
                c == r.referring_clinician_id || r.referred_to_clinician_id.as_deref() == Some(c)
            })
            && self.facility_id.as_deref().is_none_or(|f| {
                f == r.referring_facility_id || f == r.referred_to_facility_id
            })
            && self.status.is_none_or(|s| s == r.status)
            && self.urgency.is_none_or(|u| u == r.urgency_level)
            && (!self.open_only || r.status.is_open())
    }
}

impl ClinicStore {
    /// Create a referral. Assigns the next `R` ID when empty and stamps
    /// `created_date` and `last_updated`. Unknown references are logged but
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when the patient, referring
    /// clinician, destination facility or reason is blank.
    pub fn create_referral(&mut self, actor: &str, mut referral: Referral) -> Result<Referral, StoreError> {
        require("patient_id", &referral.patient_id)?;
        require("referring_clinician_id", &referral.referring_clinician_id)?;
        require("referred_to_facility_id", &referral.referred_to_facility_id)?;
        require("referral_reason", &referral.referral_reason)?;
        if referral.referral_id.trim().is_empty() {
            referral.referral_id = self.referrals.next_id(PREFIX_REFERRAL);
        }
        let now = today();
        if referral.created_date.is_none() {
            referral.created_date = Some(now);
        }
        referral.last_updated = Some(now);
        self.warn_dangling_referral_refs(&referral);

        self.referrals.add_and_append(referral.clone())?;
        self.record_audit(
            actor,
            AuditOp::Create,
            EntityType::Referral,
            &referral.referral_id,
            &referral,
        )?;
        tracing::info!(
            referral_id = %referral.referral_id,
            patient_id = %referral.patient_id,
            urgency = %referral.urgency_level,
            "referral created"
        );
        Ok(referral)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no referral has this ID.
    pub fn get_referral(&self, id: &str) -> Result<Referral, StoreError> {
        self.referrals
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Referral, id))
    }

    /// Matching referrals, newest first.
    #[must_use]
    pub fn list_referrals(&self, filter: &ReferralFilter) -> Vec<Referral> {
        let mut matches = self.referrals.find_where(|r| filter.matches(r));
        matches.sort_by(|a, b| b.referral_date.cmp(&a.referral_date));
        limited(matches, filter.limit)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::InvalidTransition`.
    pub fn update_referral(
        &mut self,
        actor: &str,
        id: &str,
        update: &ReferralUpdate,
    ) -> Result<Referral, StoreError> {
        let mut referral = self.get_referral(id)?;
        if update.is_empty() {
            return Ok(referral);
        }
        if let Some(next) = update.status {
            check_transition(&referral, next)?;
        }
        update.apply(&mut referral);
        referral.last_updated = Some(today());

        self.referrals.update(referral.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Referral, id, update)?;
        tracing::info!(referral_id = id, "referral updated");
        Ok(referral)
    }

    /// Move a referral along its workflow.
    /// Asking for the current status returns the record untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::InvalidTransition`.
    pub fn advance_referral(
        &mut self,
        actor: &str,
        id: &str,
        next: ReferralStatus,
    ) -> Result<Referral, StoreError> {
        let current = self.get_referral(id)?;
        if current.status == next {
            tracing::debug!(referral_id = id, status = %next, "status unchanged");
            return Ok(current);
        }
        check_transition(&current, next)?;

        let updated = Referral {
            status: next,
            last_updated: Some(today()),
            ..current.clone()
        };
        self.referrals.update(updated.clone())?;
        self.record_audit(
            actor,
            AuditOp::Transition,
            EntityType::Referral,
            id,
            &serde_json::json!({"from": current.status, "to": next}),
        )?;
        tracing::info!(referral_id = id, from = %current.status, to = %next, "referral status changed");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no referral has this ID.
    pub fn delete_referral(&mut self, actor: &str, id: &str) -> Result<Referral, StoreError> {
        let removed = self.referrals.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Referral, id, &serde_json::Value::Null)?;
        tracing::info!(referral_id = id, "referral deleted");
        Ok(removed)
    }

    fn warn_dangling_referral_refs(&self, referral: &Referral) {
        let id = referral.referral_id.as_str();
        if !self.patients.contains(&referral.patient_id) {
            tracing::warn!(referral_id = id, patient_id = %referral.patient_id, "patient not found");
        }
        if !self.clinicians.contains(&referral.referring_clinician_id) {
            tracing::warn!(
                referral_id = id,
                clinician_id = %referral.referring_clinician_id,
                "referring clinician not found"
            );
        }
        for facility in [&referral.referring_facility_id, &referral.referred_to_facility_id] {
            if !self.facility_known(facility) {
                tracing::warn!(referral_id = id, facility_id = %facility, "facility not found");
            }
        }
    }
}

fn check_transition(current: &Referral, next: ReferralStatus) -> Result<(), StoreError> {
    if current.status == next || current.status.can_transition_to(next) {
        return Ok(());
    }
    Err(StoreError::InvalidTransition {
        entity: EntityType::Referral,
        id: current.referral_id.clone(),
        from: current.status.to_string(),
        to: next.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::clinic_store;
    use crate::test_support::samples;
    use crate::updates::referral::ReferralUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn created(store: &mut ClinicStore) -> Referral {
        store
            .create_referral("C001", samples::referral("", "P001", "C001"))
            .unwrap()
    }

    #[test]
    fn same_status_writes_nothing() {
        let (dir, mut store) = crate::test_support::helpers::temp_store();
        let referral = created(&mut store);
        let csv = dir.path().join("referrals.csv");
        let before = std::fs::read_to_string(&csv).unwrap();
        let audit_len = store.audit().read_all().unwrap().len();

        let unchanged = store
            .advance_referral("C001", &referral.referral_id, ReferralStatus::New)
            .unwrap();
        assert_eq!(unchanged, referral);
        assert_eq!(std::fs::read_to_string(&csv).unwrap(), before);
        assert_eq!(store.audit().read_all().unwrap().len(), audit_len);
    }

    #[test]
    fn create_assigns_id_not_confused_with_rx() {
        let mut store = clinic_store();
        store
            .create_prescription("C001", samples::prescription("", "P001", "C001"))
            .unwrap();
        assert_eq!(created(&mut store).referral_id, "R001");
    }

    #[test]
    fn workflow_new_to_completed() {
        let mut store = clinic_store();
        let id = created(&mut store).referral_id;
        for status in [
            ReferralStatus::Sent,
            ReferralStatus::Received,
            ReferralStatus::Accepted,
            ReferralStatus::Completed,
        ] {
            assert_eq!(store.advance_referral("C001", &id, status).unwrap().status, status);
        }
    }

    #[test]
    fn cannot_skip_steps() {
        let mut store = clinic_store();
        let id = created(&mut store).referral_id;
        let err = store
            .advance_referral("C001", &id, ReferralStatus::Accepted)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { .. }));
        assert!(err.to_string().contains("new"));
    }

    #[test]
    fn list_open_and_by_destination() {
        let mut store = clinic_store();
        let first = created(&mut store).referral_id;
        created(&mut store);
        store.advance_referral("C001", &first, ReferralStatus::Cancelled).unwrap();

        let open = store.list_referrals(&ReferralFilter {
            open_only: true,
            ..ReferralFilter::default()
        });
        assert_eq!(open.len(), 1);

        let to_hospital = store.list_referrals(&ReferralFilter {
            facility_id: Some("H001".into()),
            ..ReferralFilter::default()
        });
        assert_eq!(to_hospital.len(), 2);
    }

    #[test]
    fn update_assigns_specialist() {
        let mut store = clinic_store();
        let id = created(&mut store).referral_id;
        let update = ReferralUpdateBuilder::new()
            .referred_to_clinician_id(Some("C002".into()))
            .urgency_level(UrgencyLevel::Urgent)
            .build();
        let updated = store.update_referral("C001", &id, &update).unwrap();
        assert_eq!(updated.referred_to_clinician_id.as_deref(), Some("C002"));
        assert_eq!(updated.urgency_level, UrgencyLevel::Urgent);

        let by_specialist = store.list_referrals(&ReferralFilter {
            clinician_id: Some("C002".into()),
            ..ReferralFilter::default()
        });
        assert_eq!(by_specialist.len(), 1);
    }
}

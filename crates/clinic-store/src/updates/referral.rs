//! Referral update builder.

use serde::Serialize;

use clinic_core::entities::Referral;
use clinic_core::enums::{ReferralStatus, UrgencyLevel};

use super::set;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferralUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_to_clinician_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_to_facility_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_investigations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReferralStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReferralUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.referred_to_clinician_id.is_none()
            && self.referred_to_facility_id.is_none()
            && self.urgency_level.is_none()
            && self.referral_reason.is_none()
            && self.clinical_summary.is_none()
            && self.requested_investigations.is_none()
            && self.status.is_none()
            && self.appointment_id.is_none()
            && self.notes.is_none()
    }

    pub fn apply(&self, referral: &mut Referral) {
        set(&mut referral.referred_to_clinician_id, self.referred_to_clinician_id.as_ref());
        set(&mut referral.referred_to_facility_id, self.referred_to_facility_id.as_ref());
        set(&mut referral.urgency_level, self.urgency_level.as_ref());
        set(&mut referral.referral_reason, self.referral_reason.as_ref());
        set(&mut referral.clinical_summary, self.clinical_summary.as_ref());
        set(&mut referral.requested_investigations, self.requested_investigations.as_ref());
        set(&mut referral.status, self.status.as_ref());
        set(&mut referral.appointment_id, self.appointment_id.as_ref());
        set(&mut referral.notes, self.notes.as_ref());
    }
}

pub struct ReferralUpdateBuilder(ReferralUpdate);

impl ReferralUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ReferralUpdate::default())
    }

    #[must_use]
    pub fn referred_to_clinician_id(mut self, clinician_id: Option<String>) -> Self {
        self.0.referred_to_clinician_id = Some(clinician_id);
        self
    }

    #[must_use]
    pub fn referred_to_facility_id(mut self, facility_id: impl Into<String>) -> Self {
        self.0.referred_to_facility_id = Some(facility_id.into());
        self
    }

    #[must_use]
    pub fn urgency_level(mut self, urgency: UrgencyLevel) -> Self {
        self.0.urgency_level = Some(urgency);
        self
    }

    #[must_use]
    pub fn referral_reason(mut self, reason: impl Into<String>) -> Self {
        self.0.referral_reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn clinical_summary(mut self, summary: impl Into<String>) -> Self {
        self.0.clinical_summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn requested_investigations(mut self, investigations: impl Into<String>) -> Self {
        self.0.requested_investigations = Some(investigations.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ReferralStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn appointment_id(mut self, appointment_id: Option<String>) -> Self {
        self.0.appointment_id = Some(appointment_id);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.0.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ReferralUpdate {
        self.0
    }
}

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ReferralStatus, UrgencyLevel};

/// A referral of a patient from one clinician/facility to another.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Referral {
    pub referral_id: String,
    pub patient_id: String,
    pub referring_clinician_id: String,
    pub referred_to_clinician_id: Option<String>,
    pub referring_facility_id: String,
    pub referred_to_facility_id: String,
    pub referral_date: NaiveDate,
    pub urgency_level: UrgencyLevel,
    pub referral_reason: String,
    pub clinical_summary: String,
    pub requested_investigations: String,
    pub status: ReferralStatus,
    pub appointment_id: Option<String>,
    pub notes: String,
    pub created_date: Option<NaiveDate>,
    pub last_updated: Option<NaiveDate>,
}

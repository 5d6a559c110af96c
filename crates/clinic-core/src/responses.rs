//! CLI response types returned as JSON by `clinic` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Appointment, Clinician, Facility, Patient, Prescription, Referral};
use crate::enums::{Access, Panel, Role};

/// Response from `clinic login` and `clinic whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub identifier: String,
    pub role: Role,
    pub display_name: String,
    pub logged_in_at: DateTime<Utc>,
    pub panels: Vec<Panel>,
}

/// One visible dashboard tab.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardTab {
    pub panel: Panel,
    pub title: String,
    pub access: Access,
}

/// Response from `clinic dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub greeting: String,
    pub role: Role,
    pub default_panel: Option<Panel>,
    /// The tab currently open; the default unless another was switched to.
    pub open_panel: Option<Panel>,
    pub tabs: Vec<DashboardTab>,
}

/// Appointment with its foreign keys resolved. Unresolvable keys stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub patient: Option<Patient>,
    pub clinician: Option<Clinician>,
    pub facility: Option<Facility>,
}

/// Response from `clinic patient record`: one patient and everything that
/// references them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PatientRecordResponse {
    pub patient: Patient,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
    pub referrals: Vec<Referral>,
}

/// Response from `clinic patient purge`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PurgeResponse {
    pub patient_id: String,
    pub appointments_removed: u32,
    pub prescriptions_removed: u32,
    pub referrals_removed: u32,
}

impl PurgeResponse {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.appointments_removed + self.prescriptions_removed + self.referrals_removed
    }
}

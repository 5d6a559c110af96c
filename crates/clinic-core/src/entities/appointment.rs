use chrono::{NaiveDate, NaiveTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AppointmentStatus;

/// A booked slot between a patient and a clinician at a facility.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Appointment {
    pub appointment_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub facility_id: String,
    pub appointment_date: NaiveDate,
    #[serde(with = "crate::time_format::hhmm")]
    #[schemars(with = "String")]
    pub appointment_time: NaiveTime,
    pub duration_minutes: u32,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub reason_for_visit: String,
    pub notes: String,
    pub created_date: Option<NaiveDate>,
    pub last_modified: Option<NaiveDate>,
}

impl Appointment {
    /// Longest bookable slot: one whole day.
    pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

    /// Whether this appointment and `other` overlap for the same clinician.
    #[must_use]
    pub fn clashes_with(&self, other: &Self) -> bool {
        if self.appointment_id == other.appointment_id
            || self.clinician_id != other.clinician_id
            || self.appointment_date != other.appointment_date
        {
            return false;
        }
        let (start, end) = self.minute_span();
        let (other_start, other_end) = other.minute_span();
        start < other_end && other_start < end
    }

    /// Start and end as minutes after midnight. The end may pass 24:00.
    fn minute_span(&self) -> (u32, u32) {
        let start = self.appointment_time.num_seconds_from_midnight() / 60;
        (start, start.saturating_add(self.duration_minutes))
    }
}

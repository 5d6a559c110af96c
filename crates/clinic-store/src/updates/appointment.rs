//! Appointment update builder.

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

use clinic_core::entities::Appointment;
use clinic_core::enums::AppointmentStatus;
use clinic_core::time_format::hhmm;

use super::set;

#[allow(clippy::ref_option)]
fn serialize_time<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => hhmm::serialize(time, serializer),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinician_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_time"
    )]
    pub appointment_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_for_visit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clinician_id.is_none()
            && self.facility_id.is_none()
            && self.appointment_date.is_none()
            && self.appointment_time.is_none()
            && self.duration_minutes.is_none()
            && self.appointment_type.is_none()
            && self.status.is_none()
            && self.reason_for_visit.is_none()
            && self.notes.is_none()
    }

    /// Whether the slot (who, when, how long) changes.
    #[must_use]
    pub const fn moves_slot(&self) -> bool {
        self.clinician_id.is_some()
            || self.appointment_date.is_some()
            || self.appointment_time.is_some()
            || self.duration_minutes.is_some()
    }

    pub fn apply(&self, appointment: &mut Appointment) {
        set(&mut appointment.clinician_id, self.clinician_id.as_ref());
        set(&mut appointment.facility_id, self.facility_id.as_ref());
        set(&mut appointment.appointment_date, self.appointment_date.as_ref());
        set(&mut appointment.appointment_time, self.appointment_time.as_ref());
        set(&mut appointment.duration_minutes, self.duration_minutes.as_ref());
        set(&mut appointment.appointment_type, self.appointment_type.as_ref());
        set(&mut appointment.status, self.status.as_ref());
        set(&mut appointment.reason_for_visit, self.reason_for_visit.as_ref());
        set(&mut appointment.notes, self.notes.as_ref());
    }
}

pub struct AppointmentUpdateBuilder(AppointmentUpdate);

impl AppointmentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AppointmentUpdate::default())
    }

    #[must_use]
    pub fn clinician_id(mut self, clinician_id: impl Into<String>) -> Self {
        self.0.clinician_id = Some(clinician_id.into());
        self
    }

    #[must_use]
    pub fn facility_id(mut self, facility_id: impl Into<String>) -> Self {
        self.0.facility_id = Some(facility_id.into());
        self
    }

    #[must_use]
    pub fn appointment_date(mut self, date: NaiveDate) -> Self {
        self.0.appointment_date = Some(date);
        self
    }

    #[must_use]
    pub fn appointment_time(mut self, time: NaiveTime) -> Self {
        self.0.appointment_time = Some(time);
        self
    }

    #[must_use]
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.0.duration_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn appointment_type(mut self, appointment_type: impl Into<String>) -> Self {
        self.0.appointment_type = Some(appointment_type.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn reason_for_visit(mut self, reason: impl Into<String>) -> Self {
        self.0.reason_for_visit = Some(reason.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.0.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn build(self) -> AppointmentUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_serializes_as_hhmm() {
        let update = AppointmentUpdateBuilder::new()
            .appointment_time(NaiveTime::from_hms_opt(14, 45, 0).unwrap())
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"appointment_time": "14:45"}));
        assert!(update.moves_slot());
    }

    #[test]
    fn notes_only_does_not_move_slot() {
        let update = AppointmentUpdateBuilder::new().notes("Bring inhaler").build();
        assert!(!update.moves_slot());
        assert!(!update.is_empty());
    }
}

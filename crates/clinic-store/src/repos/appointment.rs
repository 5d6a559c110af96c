//! Appointment repository: booking, rescheduling, status transitions and
//! clash detection.

use chrono::NaiveDate;

use clinic_core::entities::Appointment;
use clinic_core::enums::{AppointmentStatus, AuditOp, EntityType};
use clinic_core::ids::PREFIX_APPOINTMENT;
use clinic_core::responses::AppointmentDetail;

use super::{limited, require};
use crate::error::StoreError;
use crate::service::{ClinicStore, today};
use crate::updates::appointment::AppointmentUpdate;

/// Filter criteria for appointment listings.
#[derive(Debug, Default, Clone)]
pub struct AppointmentFilter {
    pub patient_id: Option<String>,
    pub clinician_id: Option<String>,
    pub facility_id: Option<String>,
    pub status: Option<AppointmentStatus>,
    /// Inclusive lower bound on the appointment date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the appointment date.
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl AppointmentFilter {
    fn matches(&self, a: &Appointment) -> bool {
        self.patient_id.as_deref().is_none_or(|p| p == a.patient_id)
            && self.clinician_id.as_deref().is_none_or(|c| c == a.clinician_id)
            && self.facility_id.as_deref().is_none_or(|f| f == a.facility_id)
            && self.status.is_none_or(|s| s == a.status)
            && self.from.is_none_or(|from| a.appointment_date >= from)
            && self.to.is_none_or(|to| a.appointment_date <= to)
    }
}

fn by_slot(a: &Appointment, b: &Appointment) -> std::cmp::Ordering {
    (a.appointment_date, a.appointment_time, &a.appointment_id).cmp(&(
        b.appointment_date,
        b.appointment_time,
        &b.appointment_id,
    ))
}

impl ClinicStore {
    /// Book an appointment.
    ///
    /// Assigns the next `A` ID when empty and stamps `created_date` and
    /// `last_modified`. Unknown patients, clinicians or facilities and
    /// overlapping bookings are logged but accepted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when a required reference is blank
    /// or the duration is zero or longer than a day.
    pub fn create_appointment(
        &mut self,
        actor: &str,
        mut appointment: Appointment,
    ) -> Result<Appointment, StoreError> {
        require("patient_id", &appointment.patient_id)?;
        require("clinician_id", &appointment.clinician_id)?;
        require("facility_id", &appointment.facility_id)?;
        check_duration(appointment.duration_minutes)?;
        if appointment.appointment_id.trim().is_empty() {
            appointment.appointment_id = self.appointments.next_id(PREFIX_APPOINTMENT);
        }
        let now = today();
        appointment.created_date.get_or_insert(now);
        appointment.last_modified = Some(now);

        self.warn_dangling_appointment_refs(&appointment);
        self.warn_clashes(&appointment);

        self.appointments.add_and_append(appointment.clone())?;
        self.record_audit(
            actor,
            AuditOp::Create,
            EntityType::Appointment,
            &appointment.appointment_id,
            &appointment,
        )?;
        tracing::info!(
            appointment_id = %appointment.appointment_id,
            patient_id = %appointment.patient_id,
            clinician_id = %appointment.clinician_id,
            date = %appointment.appointment_date,
            "appointment booked"
        );
        Ok(appointment)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no appointment has this ID.
    pub fn get_appointment(&self, id: &str) -> Result<Appointment, StoreError> {
        self.appointments
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Appointment, id))
    }

    /// Matching appointments in date and time order.
    #[must_use]
    pub fn list_appointments(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let mut matches = self.appointments.find_where(|a| filter.matches(a));
        matches.sort_by(by_slot);
        limited(matches, filter.limit)
    }

    /// A clinician's appointments, optionally on a single day.
    #[must_use]
    pub fn appointments_for_clinician(
        &self,
        clinician_id: &str,
        on: Option<NaiveDate>,
    ) -> Vec<Appointment> {
        self.list_appointments(&AppointmentFilter {
            clinician_id: Some(clinician_id.to_string()),
            from: on,
            to: on,
            ..AppointmentFilter::default()
        })
    }

    /// Live appointments for the same clinician whose slot overlaps
    /// `appointment`. Cancelled and rescheduled bookings never clash.
    #[must_use]
    pub fn appointment_clashes(&self, appointment: &Appointment) -> Vec<Appointment> {
        if !occupies_slot(appointment.status) {
            return Vec::new();
        }
        let mut clashes = self
            .appointments
            .find_where(|other| occupies_slot(other.status) && appointment.clashes_with(other));
        clashes.sort_by(by_slot);
        clashes
    }

    /// Appointment with its patient, clinician and facility resolved.
    /// Missing references resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no appointment has this ID.
    pub fn appointment_detail(&self, id: &str) -> Result<AppointmentDetail, StoreError> {
        let appointment = self.get_appointment(id)?;
        Ok(AppointmentDetail {
            patient: self.patients.find_by_id(&appointment.patient_id).cloned(),
            clinician: self.clinicians.find_by_id(&appointment.clinician_id).cloned(),
            facility: self.facilities.find_by_id(&appointment.facility_id).cloned(),
            appointment,
        })
    }

    /// Apply `update` to an appointment. A status change must follow the
    /// appointment state machine.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, `StoreError::InvalidTransition`, or
    /// `StoreError::Validation` for a duration outside one minute to a day.
    pub fn update_appointment(
        &mut self,
        actor: &str,
        id: &str,
        update: &AppointmentUpdate,
    ) -> Result<Appointment, StoreError> {
        let mut appointment = self.get_appointment(id)?;
        if update.is_empty() {
            return Ok(appointment);
        }
        if let Some(next) = update.status {
            check_transition(&appointment, next)?;
        }
        update.apply(&mut appointment);
        check_duration(appointment.duration_minutes)?;
        appointment.last_modified = Some(today());

        if update.moves_slot() {
            self.warn_dangling_appointment_refs(&appointment);
            self.warn_clashes(&appointment);
        }

        self.appointments.update(appointment.clone())?;
        self.record_audit(actor, AuditOp::Update, EntityType::Appointment, id, update)?;
        tracing::info!(appointment_id = id, "appointment updated");
        Ok(appointment)
    }

    /// Move an appointment to `next` status.
    /// Asking for the current status returns the record untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::InvalidTransition`.
    pub fn transition_appointment(
        &mut self,
        actor: &str,
        id: &str,
        next: AppointmentStatus,
    ) -> Result<Appointment, StoreError> {
        let current = self.get_appointment(id)?;
        if current.status == next {
            tracing::debug!(appointment_id = id, status = %next, "status unchanged");
            return Ok(current);
        }
        check_transition(&current, next)?;

        let updated = Appointment {
            status: next,
            last_modified: Some(today()),
            ..current.clone()
        };
        self.appointments.update(updated.clone())?;
        self.record_audit(
            actor,
            AuditOp::Transition,
            EntityType::Appointment,
            id,
            &serde_json::json!({"from": current.status, "to": next}),
        )?;
        tracing::info!(appointment_id = id, from = %current.status, to = %next, "appointment status changed");
        Ok(updated)
    }

    /// # Errors
    ///
    /// See [`Self::transition_appointment`].
    pub fn cancel_appointment(&mut self, actor: &str, id: &str) -> Result<Appointment, StoreError> {
        self.transition_appointment(actor, id, AppointmentStatus::Cancelled)
    }

    /// # Errors
    ///
    /// See [`Self::transition_appointment`].
    pub fn complete_appointment(&mut self, actor: &str, id: &str) -> Result<Appointment, StoreError> {
        self.transition_appointment(actor, id, AppointmentStatus::Completed)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no appointment has this ID.
    pub fn delete_appointment(&mut self, actor: &str, id: &str) -> Result<Appointment, StoreError> {
        let removed = self.appointments.delete(id)?;
        self.record_audit(actor, AuditOp::Delete, EntityType::Appointment, id, &serde_json::Value::Null)?;
        tracing::info!(appointment_id = id, "appointment deleted");
        Ok(removed)
    }

    fn warn_dangling_appointment_refs(&self, appointment: &Appointment) {
        let id = appointment.appointment_id.as_str();
        if !self.patients.contains(&appointment.patient_id) {
            tracing::warn!(appointment_id = id, patient_id = %appointment.patient_id, "patient not found");
        }
        if !self.clinicians.contains(&appointment.clinician_id) {
            tracing::warn!(appointment_id = id, clinician_id = %appointment.clinician_id, "clinician not found");
        }
        if !self.facility_known(&appointment.facility_id) {
            tracing::warn!(appointment_id = id, facility_id = %appointment.facility_id, "facility not found");
        }
    }

    fn warn_clashes(&self, appointment: &Appointment) {
        for clash in self.appointment_clashes(appointment) {
            tracing::warn!(
                appointment_id = %appointment.appointment_id,
                clashes_with = %clash.appointment_id,
                clinician_id = %appointment.clinician_id,
                "appointment overlaps an existing booking"
            );
        }
    }
}

const fn occupies_slot(status: AppointmentStatus) -> bool {
    matches!(
        status,
        AppointmentStatus::Scheduled | AppointmentStatus::Completed | AppointmentStatus::NoShow
    )
}

fn check_duration(minutes: u32) -> Result<(), StoreError> {
    if (1..=Appointment::MAX_DURATION_MINUTES).contains(&minutes) {
        return Ok(());
    }
    Err(StoreError::Validation(format!(
        "duration_minutes must be between 1 and {}, got {minutes}",
        Appointment::MAX_DURATION_MINUTES
    )))
}

fn check_transition(current: &Appointment, next: AppointmentStatus) -> Result<(), StoreError> {
    if current.status == next || current.status.can_transition_to(next) {
        return Ok(());
    }
    Err(StoreError::InvalidTransition {
        entity: EntityType::Appointment,
        id: current.appointment_id.clone(),
        from: current.status.to_string(),
        to: next.to_string(),
    })
}

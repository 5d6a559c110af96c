use anyhow::Context;
use serde::Serialize;

use clinic_auth::Identity;
use clinic_core::entities::Appointment;
use clinic_core::enums::{Access, AppointmentStatus, Panel};
use clinic_store::ClinicStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AppointmentCreateArgs;
use crate::commands::shared::access::{clinician_id, require};
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::context::AppContext;
use crate::output::output;

const DEFAULT_DURATION_MINUTES: u32 = 15;
const DEFAULT_APPOINTMENT_TYPE: &str = "Routine Consultation";

/// A booking plus the IDs of any live appointments it overlaps.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub clashes: Vec<String>,
}

pub fn run(
    args: &AppointmentCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Appointments, Access::Write)?;
    let actor = identity.actor().to_string();
    let appointment = build(args, identity, &ctx.store)?;

    let appointment = ctx.store.create_appointment(&actor, appointment)?;
    let clashes = ctx
        .store
        .appointment_clashes(&appointment)
        .into_iter()
        .map(|other| other.appointment_id)
        .collect();

    output(
        &BookingResponse {
            appointment,
            clashes,
        },
        flags.format,
    )
}

/// Missing `--clinician` falls back to the logged-in clinician, missing
/// `--facility` to that clinician's workplace.
fn build(
    args: &AppointmentCreateArgs,
    identity: &Identity,
    store: &ClinicStore,
) -> anyhow::Result<Appointment> {
    let fields = &args.fields;

    let clinician = fields
        .clinician
        .clone()
        .or_else(|| clinician_id(identity).map(str::to_string))
        .context("--clinician is required unless a clinician is logged in")?;
    let facility = fields
        .facility
        .clone()
        .or_else(|| {
            store
                .clinicians()
                .find_by_id(&clinician)
                .and_then(|c| c.workplace_id.clone())
        })
        .context("--facility is required when the clinician has no workplace on record")?;
    let date = fields.date.as_deref().context("--date is required")?;
    let time = fields.time.as_deref().context("--time is required")?;

    Ok(Appointment {
        appointment_id: args.id.clone().unwrap_or_default(),
        patient_id: args.patient.trim().to_string(),
        clinician_id: clinician,
        facility_id: facility,
        appointment_date: parse_date(date, "date")?,
        appointment_time: parse_time(time, "time")?,
        duration_minutes: fields.duration.unwrap_or(DEFAULT_DURATION_MINUTES),
        appointment_type: fields
            .appointment_type
            .clone()
            .unwrap_or_else(|| DEFAULT_APPOINTMENT_TYPE.to_string()),
        status: AppointmentStatus::Scheduled,
        reason_for_visit: fields.reason.clone().unwrap_or_default(),
        notes: fields.notes.clone().unwrap_or_default(),
        created_date: None,
        last_modified: None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Utc};
    use clinic_core::enums::Role;
    use clinic_store::seed::seed_demo;

    use super::*;
    use crate::cli::subcommands::AppointmentFields;

    fn demo() -> ClinicStore {
        let mut store = ClinicStore::detached();
        seed_demo(&mut store, "developer").unwrap();
        store
    }

    fn as_role(role: Role, user_id: Option<&str>) -> Identity {
        Identity {
            identifier: user_id.unwrap_or("admin").into(),
            role,
            user_id: user_id.map(Into::into),
            display_name: "Test".into(),
            logged_in_at: Utc::now(),
        }
    }

    fn args(fields: AppointmentFields) -> AppointmentCreateArgs {
        AppointmentCreateArgs {
            id: None,
            patient: "P002".into(),
            fields: AppointmentFields {
                date: Some("2025-10-01".into()),
                time: Some("14:45".into()),
                ..fields
            },
        }
    }

    #[test]
    fn logged_in_gp_books_at_own_surgery() {
        let store = demo();
        let appointment = build(
            &args(AppointmentFields::default()),
            &as_role(Role::Gp, Some("C001")),
            &store,
        )
        .unwrap();
        assert_eq!(appointment.clinician_id, "C001");
        assert_eq!(appointment.facility_id, "S001");
        assert_eq!(appointment.duration_minutes, 15);
        assert_eq!(appointment.appointment_time, NaiveTime::from_hms_opt(14, 45, 0).unwrap());
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn receptionist_must_name_clinician() {
        let store = demo();
        let err = build(
            &args(AppointmentFields::default()),
            &as_role(Role::Receptionist, Some("ST002")),
            &store,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--clinician"));

        let appointment = build(
            &args(AppointmentFields {
                clinician: Some("C003".into()),
                ..AppointmentFields::default()
            }),
            &as_role(Role::Receptionist, Some("ST002")),
            &store,
        )
        .unwrap();
        assert_eq!(appointment.facility_id, "H001");
    }

    #[test]
    fn date_and_time_are_required() {
        let store = demo();
        let missing_time = AppointmentCreateArgs {
            id: None,
            patient: "P001".into(),
            fields: AppointmentFields {
                clinician: Some("C001".into()),
                date: Some("2025-10-01".into()),
                ..AppointmentFields::default()
            },
        };
        let err = build(&missing_time, &as_role(Role::Admin, None), &store).unwrap_err();
        assert!(err.to_string().contains("--time"));
    }

    #[test]
    fn booking_flattens_appointment_fields() {
        let store = demo();
        let appointment = build(
            &args(AppointmentFields::default()),
            &as_role(Role::Gp, Some("C001")),
            &store,
        )
        .unwrap();
        let json = serde_json::to_value(BookingResponse {
            appointment,
            clashes: vec!["A001".into()],
        })
        .unwrap();
        assert_eq!(json["patient_id"], "P002");
        assert_eq!(json["clashes"][0], "A001");
    }
}

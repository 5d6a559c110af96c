use anyhow::Context;

use clinic_auth::Identity;
use clinic_core::entities::Prescription;
use clinic_core::enums::{Access, Panel, PrescriptionStatus};
use clinic_store::service::today;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrescriptionCreateArgs;
use crate::commands::shared::access::{clinician_id, require};
use crate::commands::shared::parse::{optional_id, parse_date};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &PrescriptionCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Prescriptions, Access::Write)?;
    let actor = identity.actor().to_string();
    let prescription = build(args, identity)?;

    let prescription = ctx.store.create_prescription(&actor, prescription)?;
    output(&prescription, flags.format)
}

fn build(args: &PrescriptionCreateArgs, identity: &Identity) -> anyhow::Result<Prescription> {
    let fields = &args.fields;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let clinician = args
        .clinician
        .clone()
        .or_else(|| clinician_id(identity).map(str::to_string))
        .context("--clinician is required unless a clinician is logged in")?;
    let prescription_date = match args.date.as_deref() {
        Some(raw) => parse_date(raw, "date")?,
        None => today(),
    };

    Ok(Prescription {
        prescription_id: text(&args.id),
        patient_id: args.patient.trim().to_string(),
        clinician_id: clinician,
        appointment_id: args.appointment.as_deref().and_then(optional_id),
        prescription_date,
        medication_name: args.medication.trim().to_string(),
        dosage: text(&fields.dosage),
        frequency: text(&fields.frequency),
        duration_days: fields.days,
        quantity: text(&fields.quantity),
        instructions: text(&fields.instructions),
        pharmacy_name: text(&fields.pharmacy),
        status: PrescriptionStatus::Issued,
        issue_date: None,
        collection_date: None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use clinic_core::enums::Role;

    use super::*;
    use crate::cli::subcommands::PrescriptionFields;

    fn identity(role: Role, user_id: &str) -> Identity {
        Identity {
            identifier: user_id.into(),
            role,
            user_id: Some(user_id.into()),
            display_name: "Test".into(),
            logged_in_at: Utc::now(),
        }
    }

    fn args() -> PrescriptionCreateArgs {
        PrescriptionCreateArgs {
            id: None,
            patient: "P001".into(),
            clinician: None,
            medication: " Amoxicillin ".into(),
            appointment: None,
            date: None,
            fields: PrescriptionFields {
                dosage: Some("500mg".into()),
                days: Some(7),
                ..PrescriptionFields::default()
            },
        }
    }

    #[test]
    fn nurse_prescribes_under_own_id_today() {
        let prescription = build(&args(), &identity(Role::Nurse, "C002")).unwrap();
        assert_eq!(prescription.clinician_id, "C002");
        assert_eq!(prescription.prescription_date, today());
        assert_eq!(prescription.medication_name, "Amoxicillin");
        assert_eq!(prescription.duration_days, Some(7));
        assert_eq!(prescription.status, PrescriptionStatus::Issued);
    }

    #[test]
    fn developer_names_the_prescriber() {
        let developer = identity(Role::Developer, "developer");
        assert!(build(&args(), &developer).is_err());

        let prescription = build(
            &PrescriptionCreateArgs {
                clinician: Some("C001".into()),
                date: Some("2025-09-20".into()),
                ..args()
            },
            &developer,
        )
        .unwrap();
        assert_eq!(prescription.clinician_id, "C001");
        assert_eq!(prescription.prescription_date, NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
    }
}

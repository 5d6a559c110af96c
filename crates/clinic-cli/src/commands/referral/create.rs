use anyhow::Context;

use clinic_auth::Identity;
use clinic_core::entities::Referral;
use clinic_core::enums::{Access, Panel, ReferralStatus, UrgencyLevel};
use clinic_store::ClinicStore;
use clinic_store::service::today;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReferralCreateArgs;
use crate::commands::shared::access::{clinician_id, require};
use crate::commands::shared::parse::{optional_id, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &ReferralCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Referrals, Access::Write)?;
    let actor = identity.actor().to_string();
    let referral = build(args, identity, &ctx.store)?;

    let referral = ctx.store.create_referral(&actor, referral)?;
    output(&referral, flags.format)
}

fn build(
    args: &ReferralCreateArgs,
    identity: &Identity,
    store: &ClinicStore,
) -> anyhow::Result<Referral> {
    let fields = &args.fields;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let from_clinician = args
        .from_clinician
        .clone()
        .or_else(|| clinician_id(identity).map(str::to_string))
        .context("--from-clinician is required unless a clinician is logged in")?;
    let from_facility = args
        .from_facility
        .clone()
        .or_else(|| {
            store
                .clinicians()
                .find_by_id(&from_clinician)
                .and_then(|c| c.workplace_id.clone())
        })
        .unwrap_or_default();
    let referral_date = match args.date.as_deref() {
        Some(raw) => parse_date(raw, "date")?,
        None => today(),
    };
    let urgency_level = match fields.urgency.as_deref() {
        Some(raw) => parse_enum(raw, "urgency")?,
        None => UrgencyLevel::Routine,
    };

    Ok(Referral {
        referral_id: text(&args.id),
        patient_id: args.patient.trim().to_string(),
        referring_clinician_id: from_clinician,
        referred_to_clinician_id: fields.to_clinician.as_deref().and_then(optional_id),
        referring_facility_id: from_facility,
        referred_to_facility_id: text(&fields.to_facility),
        referral_date,
        urgency_level,
        referral_reason: text(&fields.reason),
        clinical_summary: text(&fields.summary),
        requested_investigations: text(&fields.investigations),
        status: ReferralStatus::New,
        appointment_id: fields.appointment.as_deref().and_then(optional_id),
        notes: text(&fields.notes),
        created_date: None,
        last_updated: None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use clinic_core::enums::Role;
    use clinic_store::seed::seed_demo;

    use super::*;
    use crate::cli::subcommands::ReferralFields;

    fn gp() -> Identity {
        Identity {
            identifier: "C001".into(),
            role: Role::Gp,
            user_id: Some("C001".into()),
            display_name: "Dr David Evans".into(),
            logged_in_at: Utc::now(),
        }
    }

    fn args(fields: ReferralFields) -> ReferralCreateArgs {
        ReferralCreateArgs {
            id: None,
            patient: "P003".into(),
            from_clinician: None,
            from_facility: None,
            date: None,
            fields,
        }
    }

    #[test]
    fn defaults_come_from_logged_in_gp() {
        let mut store = ClinicStore::detached();
        seed_demo(&mut store, "developer").unwrap();

        let referral = build(
            &args(ReferralFields {
                to_facility: Some("H001".into()),
                reason: Some("Chest pain".into()),
                urgency: Some("Emergency".into()),
                ..ReferralFields::default()
            }),
            &gp(),
            &store,
        )
        .unwrap();
        assert_eq!(referral.referring_clinician_id, "C001");
        assert_eq!(referral.referring_facility_id, "S001");
        assert_eq!(referral.urgency_level, UrgencyLevel::Emergency);
        assert_eq!(referral.referral_date, today());
        assert_eq!(referral.status, ReferralStatus::New);
    }

    #[test]
    fn urgency_defaults_to_routine() {
        let store = ClinicStore::detached();
        let referral = build(&args(ReferralFields::default()), &gp(), &store).unwrap();
        assert_eq!(referral.urgency_level, UrgencyLevel::Routine);
        assert_eq!(referral.referring_facility_id, "");
        assert_eq!(referral.referred_to_clinician_id, None);
    }
}

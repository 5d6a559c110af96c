use clinic_core::entities::Patient;
use clinic_core::enums::Panel;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PatientCreateArgs;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::{optional_id, parse_date, parse_optional_date};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &PatientCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Patients)?;
    let patient = ctx.store.create_patient(&actor, build(args)?)?;
    output(&patient, flags.format)
}

fn build(args: &PatientCreateArgs) -> anyhow::Result<Patient> {
    let fields = &args.fields;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(Patient {
        patient_id: text(&args.id),
        first_name: text(&fields.first_name),
        last_name: text(&fields.last_name),
        date_of_birth: match fields.dob.as_deref() {
            Some(raw) => parse_optional_date(raw, "dob")?,
            None => None,
        },
        nhs_number: text(&fields.nhs_number),
        gender: text(&fields.gender),
        phone_number: text(&fields.phone),
        email: text(&fields.email),
        address: text(&fields.address),
        postcode: text(&fields.postcode),
        emergency_contact_name: text(&fields.emergency_contact_name),
        emergency_contact_phone: text(&fields.emergency_contact_phone),
        registration_date: args
            .registered
            .as_deref()
            .map(|raw| parse_date(raw, "registered"))
            .transpose()?,
        gp_surgery_id: fields.surgery.as_deref().and_then(optional_id),
    })
}

use clinic_core::enums::Panel;
use clinic_store::updates::patient::{PatientUpdate, PatientUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PatientFields;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::{optional_id, parse_optional_date};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    fields: &PatientFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields)?;
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag (see `clinic patient update --help`)");
    }
    let actor = writer(ctx, Panel::Patients)?;
    let patient = ctx.store.update_patient(&actor, id, &update)?;
    output(&patient, flags.format)
}

fn build_update(fields: &PatientFields) -> anyhow::Result<PatientUpdate> {
    let mut builder = PatientUpdateBuilder::new();
    if let Some(value) = fields.first_name.as_deref() {
        builder = builder.first_name(value);
    }
    if let Some(value) = fields.last_name.as_deref() {
        builder = builder.last_name(value);
    }
    if let Some(raw) = fields.dob.as_deref() {
        builder = builder.date_of_birth(parse_optional_date(raw, "dob")?);
    }
    if let Some(value) = fields.nhs_number.as_deref() {
        builder = builder.nhs_number(value);
    }
    if let Some(value) = fields.gender.as_deref() {
        builder = builder.gender(value);
    }
    if let Some(value) = fields.phone.as_deref() {
        builder = builder.phone_number(value);
    }
    if let Some(value) = fields.email.as_deref() {
        builder = builder.email(value);
    }
    if let Some(value) = fields.address.as_deref() {
        builder = builder.address(value);
    }
    if let Some(value) = fields.postcode.as_deref() {
        builder = builder.postcode(value);
    }
    if let Some(value) = fields.emergency_contact_name.as_deref() {
        builder = builder.emergency_contact_name(value);
    }
    if let Some(value) = fields.emergency_contact_phone.as_deref() {
        builder = builder.emergency_contact_phone(value);
    }
    if let Some(raw) = fields.surgery.as_deref() {
        builder = builder.gp_surgery_id(optional_id(raw));
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::{PatientFields, build_update};

    #[test]
    fn no_flags_is_an_empty_update() {
        assert!(build_update(&PatientFields::default()).unwrap().is_empty());
    }

    #[test]
    fn empty_surgery_clears_it() {
        let update = build_update(&PatientFields {
            surgery: Some(String::new()),
            ..PatientFields::default()
        })
        .unwrap();
        assert_eq!(update.gp_surgery_id, Some(None));
    }
}

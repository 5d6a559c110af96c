use clinic_core::enums::Panel;
use clinic_store::updates::clinician::{ClinicianUpdate, ClinicianUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClinicianFields;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::optional_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    fields: &ClinicianFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields);
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let actor = writer(ctx, Panel::Clinicians)?;
    let clinician = ctx.store.update_clinician(&actor, id, &update)?;
    output(&clinician, flags.format)
}

fn build_update(fields: &ClinicianFields) -> ClinicianUpdate {
    let mut builder = ClinicianUpdateBuilder::new();
    if let Some(value) = fields.first_name.as_deref() {
        builder = builder.first_name(value);
    }
    if let Some(value) = fields.last_name.as_deref() {
        builder = builder.last_name(value);
    }
    if let Some(value) = fields.title.as_deref() {
        builder = builder.title(value);
    }
    if let Some(value) = fields.speciality.as_deref() {
        builder = builder.speciality(value);
    }
    if let Some(value) = fields.phone.as_deref() {
        builder = builder.phone_number(value);
    }
    if let Some(value) = fields.email.as_deref() {
        builder = builder.email(value);
    }
    if let Some(raw) = fields.workplace.as_deref() {
        builder = builder.workplace_id(optional_id(raw));
    }
    if let Some(value) = fields.workplace_type.as_deref() {
        builder = builder.workplace_type(value);
    }
    if let Some(value) = fields.employment_status.as_deref() {
        builder = builder.employment_status(value);
    }
    builder.build()
}

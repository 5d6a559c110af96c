use clinic_core::enums::Panel;
use clinic_store::updates::facility::{FacilityUpdate, FacilityUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FacilityFields;
use crate::commands::shared::access::writer;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    fields: &FacilityFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields);
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let actor = writer(ctx, Panel::Facilities)?;
    let facility = ctx.store.update_facility(&actor, id, &update)?;
    output(&facility, flags.format)
}

fn build_update(fields: &FacilityFields) -> FacilityUpdate {
    let mut builder = FacilityUpdateBuilder::new();
    if let Some(value) = fields.name.as_deref() {
        builder = builder.facility_name(value);
    }
    if let Some(value) = fields.address.as_deref() {
        builder = builder.address(value);
    }
    if let Some(value) = fields.postcode.as_deref() {
        builder = builder.postcode(value);
    }
    if let Some(value) = fields.phone.as_deref() {
        builder = builder.phone_number(value);
    }
    if let Some(value) = fields.email.as_deref() {
        builder = builder.email(value);
    }
    if let Some(value) = fields.opening_hours.as_deref() {
        builder = builder.opening_hours(value);
    }
    if let Some(value) = fields.manager.as_deref() {
        builder = builder.manager_name(value);
    }
    if let Some(capacity) = fields.capacity {
        builder = builder.capacity(Some(capacity));
    }
    if let Some(value) = fields.specialities.as_deref() {
        builder = builder.specialities_offered(value);
    }
    builder.build()
}

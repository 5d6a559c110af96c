use clinic_core::enums::{Panel, PrescriptionStatus};
use clinic_store::updates::prescription::{PrescriptionUpdate, PrescriptionUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrescriptionFields;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    fields: &PrescriptionFields,
    status: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields, status)?;
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let actor = writer(ctx, Panel::Prescriptions)?;
    let prescription = ctx.store.update_prescription(&actor, id, &update)?;
    output(&prescription, flags.format)
}

fn build_update(
    fields: &PrescriptionFields,
    status: Option<&str>,
) -> anyhow::Result<PrescriptionUpdate> {
    let mut builder = PrescriptionUpdateBuilder::new();
    if let Some(value) = fields.dosage.as_deref() {
        builder = builder.dosage(value);
    }
    if let Some(value) = fields.frequency.as_deref() {
        builder = builder.frequency(value);
    }
    if let Some(days) = fields.days {
        builder = builder.duration_days(Some(days));
    }
    if let Some(value) = fields.quantity.as_deref() {
        builder = builder.quantity(value);
    }
    if let Some(value) = fields.instructions.as_deref() {
        builder = builder.instructions(value);
    }
    if let Some(value) = fields.pharmacy.as_deref() {
        builder = builder.pharmacy_name(value);
    }
    if let Some(raw) = status {
        builder = builder.status(parse_enum::<PrescriptionStatus>(raw, "status")?);
    }
    Ok(builder.build())
}

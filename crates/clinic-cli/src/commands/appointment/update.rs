use clinic_core::enums::{AppointmentStatus, Panel};
use clinic_store::updates::appointment::{AppointmentUpdate, AppointmentUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AppointmentFields;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_time};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    fields: &AppointmentFields,
    status: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields, status)?;
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let actor = writer(ctx, Panel::Appointments)?;
    let appointment = ctx.store.update_appointment(&actor, id, &update)?;
    output(&appointment, flags.format)
}

fn build_update(fields: &AppointmentFields, status: Option<&str>) -> anyhow::Result<AppointmentUpdate> {
    let mut builder = AppointmentUpdateBuilder::new();
    if let Some(value) = fields.clinician.as_deref() {
        builder = builder.clinician_id(value);
    }
    if let Some(value) = fields.facility.as_deref() {
        builder = builder.facility_id(value);
    }
    if let Some(raw) = fields.date.as_deref() {
        builder = builder.appointment_date(parse_date(raw, "date")?);
    }
    if let Some(raw) = fields.time.as_deref() {
        builder = builder.appointment_time(parse_time(raw, "time")?);
    }
    if let Some(minutes) = fields.duration {
        builder = builder.duration_minutes(minutes);
    }
    if let Some(value) = fields.appointment_type.as_deref() {
        builder = builder.appointment_type(value);
    }
    if let Some(value) = fields.reason.as_deref() {
        builder = builder.reason_for_visit(value);
    }
    if let Some(value) = fields.notes.as_deref() {
        builder = builder.notes(value);
    }
    if let Some(raw) = status {
        builder = builder.status(parse_enum::<AppointmentStatus>(raw, "status")?);
    }
    Ok(builder.build())
}

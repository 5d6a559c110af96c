mod create;
mod list;
mod update;

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AppointmentCommands;
use crate::commands::shared::access::{check_owner, require, writer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic appointment`.
pub fn handle(
    action: &AppointmentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AppointmentCommands::Create(args) => create::run(args, ctx, flags),
        AppointmentCommands::Get { id } => get(id, ctx, flags),
        AppointmentCommands::List(args) => list::run(args, ctx, flags),
        AppointmentCommands::Update { id, fields, status } => {
            update::run(id, fields, status.as_deref(), ctx, flags)
        }
        AppointmentCommands::Cancel { id } => {
            let actor = writer(ctx, Panel::Appointments)?;
            output(&ctx.store.cancel_appointment(&actor, id)?, flags.format)
        }
        AppointmentCommands::Complete { id } => {
            let actor = writer(ctx, Panel::Appointments)?;
            output(&ctx.store.complete_appointment(&actor, id)?, flags.format)
        }
        AppointmentCommands::Delete { id } => {
            let actor = writer(ctx, Panel::Appointments)?;
            output(&ctx.store.delete_appointment(&actor, id)?, flags.format)
        }
    }
}

fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Appointments, Access::Read)?;
    let detail = ctx.store.appointment_detail(id)?;
    check_owner(identity, &detail.appointment.patient_id)?;
    output(&detail, flags.format)
}

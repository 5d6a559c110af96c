mod create;
mod list;
mod update;

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrescriptionCommands;
use crate::commands::shared::access::{check_owner, require, writer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic prescription`.
pub fn handle(
    action: &PrescriptionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PrescriptionCommands::Create(args) => create::run(args, ctx, flags),
        PrescriptionCommands::Get { id } => {
            let identity = require(ctx, Panel::Prescriptions, Access::Read)?;
            let prescription = ctx.store.get_prescription(id)?;
            check_owner(identity, &prescription.patient_id)?;
            output(&prescription, flags.format)
        }
        PrescriptionCommands::List(args) => list::run(args, ctx, flags),
        PrescriptionCommands::Update { id, fields, status } => {
            update::run(id, fields, status.as_deref(), ctx, flags)
        }
        PrescriptionCommands::Collect { id } => {
            let actor = writer(ctx, Panel::Prescriptions)?;
            output(&ctx.store.collect_prescription(&actor, id)?, flags.format)
        }
        PrescriptionCommands::Delete { id } => {
            let actor = writer(ctx, Panel::Prescriptions)?;
            output(&ctx.store.delete_prescription(&actor, id)?, flags.format)
        }
    }
}

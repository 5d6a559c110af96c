mod create;
mod list;
mod update;

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClinicianCommands;
use crate::commands::shared::access::{require, writer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic clinician`.
pub fn handle(
    action: &ClinicianCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClinicianCommands::Create(args) => create::run(args, ctx, flags),
        ClinicianCommands::Get { id } => get(id, ctx, flags),
        ClinicianCommands::List(args) => list::run(args, ctx, flags),
        ClinicianCommands::Update { id, fields } => update::run(id, fields, ctx, flags),
        ClinicianCommands::Delete { id } => delete(id, ctx, flags),
    }
}

fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require(ctx, Panel::Clinicians, Access::Read)?;
    output(&ctx.store.get_clinician(id)?, flags.format)
}

fn delete(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Clinicians)?;
    output(&ctx.store.delete_clinician(&actor, id)?, flags.format)
}

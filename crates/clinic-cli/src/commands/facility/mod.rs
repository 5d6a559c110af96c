mod create;
mod list;
mod update;

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FacilityCommands;
use crate::commands::shared::access::{require, writer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic facility`.
pub fn handle(
    action: &FacilityCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FacilityCommands::Create(args) => create::run(args, ctx, flags),
        FacilityCommands::Get { id } => {
            require(ctx, Panel::Facilities, Access::Read)?;
            output(&ctx.store.get_facility(id)?, flags.format)
        }
        FacilityCommands::List(args) => list::run(args, ctx, flags),
        FacilityCommands::Update { id, fields } => update::run(id, fields, ctx, flags),
        FacilityCommands::Delete { id } => {
            let actor = writer(ctx, Panel::Facilities)?;
            output(&ctx.store.delete_facility(&actor, id)?, flags.format)
        }
    }
}

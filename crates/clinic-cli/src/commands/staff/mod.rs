mod create;
mod list;
mod update;

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StaffCommands;
use crate::commands::shared::access::{require, writer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic staff`.
pub fn handle(action: &StaffCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StaffCommands::Create(args) => create::run(args, ctx, flags),
        StaffCommands::Get { id } => {
            require(ctx, Panel::Staff, Access::Read)?;
            output(&ctx.store.get_staff(id)?, flags.format)
        }
        StaffCommands::List(args) => list::run(args, ctx, flags),
        StaffCommands::Update { id, fields } => update::run(id, fields, ctx, flags),
        StaffCommands::Delete { id } => {
            let actor = writer(ctx, Panel::Staff)?;
            output(&ctx.store.delete_staff(&actor, id)?, flags.format)
        }
    }
}

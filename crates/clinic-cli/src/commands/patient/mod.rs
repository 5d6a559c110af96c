mod create;
mod delete;
mod get;
mod list;
mod record;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PatientCommands;
use crate::context::AppContext;

/// Handle `clinic patient`.
pub fn handle(
    action: &PatientCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PatientCommands::Create(args) => create::run(args, ctx, flags),
        PatientCommands::Get { id } => get::run(id, ctx, flags),
        PatientCommands::List(args) => list::run(args, ctx, flags),
        PatientCommands::Update { id, fields } => update::run(id, fields, ctx, flags),
        PatientCommands::Delete { id, purge_related } => {
            delete::run(id, *purge_related, ctx, flags)
        }
        PatientCommands::Record { id } => record::show(id, ctx, flags),
        PatientCommands::Purge { id } => record::purge(id, ctx, flags),
    }
}

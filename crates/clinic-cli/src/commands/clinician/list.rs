use clinic_core::enums::{Access, Panel};
use clinic_store::repos::clinician::ClinicianFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClinicianListArgs;
use crate::commands::shared::access::require;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &ClinicianListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require(ctx, Panel::Clinicians, Access::Read)?;
    let clinicians = ctx.store.list_clinicians(&ClinicianFilter {
        search: args.search.clone(),
        speciality: args.speciality.clone(),
        workplace_id: args.workplace.clone(),
        nurses_only: args.nurses,
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
    });
    output(&clinicians, flags.format)
}

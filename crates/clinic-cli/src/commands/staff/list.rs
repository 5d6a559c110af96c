use clinic_core::enums::{Access, Panel};
use clinic_store::repos::staff::StaffFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StaffListArgs;
use crate::commands::shared::access::require;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &StaffListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require(ctx, Panel::Staff, Access::Read)?;
    let staff = ctx.store.list_staff(&StaffFilter {
        search: args.search.clone(),
        role: args.role.clone(),
        facility_id: args.facility.clone(),
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
    });
    output(&staff, flags.format)
}

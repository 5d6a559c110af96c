use clinic_core::enums::{Access, FacilityType, Panel};
use clinic_store::repos::facility::FacilityFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FacilityListArgs;
use crate::commands::shared::access::require;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &FacilityListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require(ctx, Panel::Facilities, Access::Read)?;
    let facility_type = args
        .facility_type
        .as_deref()
        .map(|raw| parse_enum::<FacilityType>(raw, "type"))
        .transpose()?;

    let facilities = ctx.store.list_facilities(&FacilityFilter {
        search: args.search.clone(),
        facility_type,
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
    });
    output(&facilities, flags.format)
}

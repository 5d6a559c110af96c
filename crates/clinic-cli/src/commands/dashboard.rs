use clinic_auth::Dashboard;
use clinic_core::enums::Panel;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic dashboard`.
pub fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::for_identity(ctx.identity()?);
    if let Some(raw) = args.open.as_deref() {
        dashboard.switch_to(parse_enum::<Panel>(raw, "panel")?)?;
    }
    output(&dashboard.to_response(), flags.format)
}

use clinic_core::enums::{AuditOp, EntityType, Role};
use clinic_store::audit::AuditFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic audit`. Only admins and developers may read the trail.
pub fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx.identity()?;
    if !can_read_audit(identity.role) {
        anyhow::bail!("{} cannot view the audit trail", identity.role);
    }

    let filter = AuditFilter {
        entity: args
            .entity
            .as_deref()
            .map(|raw| parse_enum::<EntityType>(raw, "entity"))
            .transpose()?,
        id: args.id.clone(),
        actor: args.actor.clone(),
        op: args
            .op
            .as_deref()
            .map(|raw| parse_enum::<AuditOp>(raw, "op"))
            .transpose()?,
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
    };
    output(&ctx.store.audit().query(&filter)?, flags.format)
}

const fn can_read_audit(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Developer)
}

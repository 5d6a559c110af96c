mod create;
mod letter;
mod list;
mod update;

use clinic_core::enums::{Access, Panel, ReferralStatus};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReferralCommands;
use crate::commands::shared::access::{check_owner, require, writer};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic referral`.
pub fn handle(
    action: &ReferralCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReferralCommands::Create(args) => create::run(args, ctx, flags),
        ReferralCommands::Get { id } => {
            let identity = require(ctx, Panel::Referrals, Access::Read)?;
            let referral = ctx.store.get_referral(id)?;
            check_owner(identity, &referral.patient_id)?;
            output(&referral, flags.format)
        }
        ReferralCommands::List(args) => list::run(args, ctx, flags),
        ReferralCommands::Update { id, fields } => update::run(id, fields, ctx, flags),
        ReferralCommands::Advance { id, status } => {
            let next = parse_enum::<ReferralStatus>(status, "status")?;
            let actor = writer(ctx, Panel::Referrals)?;
            output(&ctx.store.advance_referral(&actor, id, next)?, flags.format)
        }
        ReferralCommands::Letter { id, stdout } => letter::run(id, *stdout, ctx, flags),
        ReferralCommands::Delete { id } => {
            let actor = writer(ctx, Panel::Referrals)?;
            output(&ctx.store.delete_referral(&actor, id)?, flags.format)
        }
    }
}

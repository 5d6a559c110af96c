use clinic_core::enums::{Access, Panel, ReferralStatus, UrgencyLevel};
use clinic_store::repos::referral::ReferralFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReferralListArgs;
use crate::commands::shared::access::{require, scoped_patient};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &ReferralListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Referrals, Access::Read)?;
    let filter = ReferralFilter {
        patient_id: scoped_patient(identity, args.patient.as_deref())?,
        clinician_id: args.clinician.clone(),
        facility_id: args.facility.clone(),
        status: args
            .status
            .as_deref()
            .map(|raw| parse_enum::<ReferralStatus>(raw, "status"))
            .transpose()?,
        urgency: args
            .urgency
            .as_deref()
            .map(|raw| parse_enum::<UrgencyLevel>(raw, "urgency"))
            .transpose()?,
        open_only: args.open,
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
    };
    output(&ctx.store.list_referrals(&filter), flags.format)
}

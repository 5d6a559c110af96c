use clinic_core::enums::{Access, Panel, PrescriptionStatus};
use clinic_store::repos::prescription::PrescriptionFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrescriptionListArgs;
use crate::commands::shared::access::{require, scoped_patient};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &PrescriptionListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Prescriptions, Access::Read)?;
    let filter = PrescriptionFilter {
        patient_id: scoped_patient(identity, args.patient.as_deref())?,
        clinician_id: args.clinician.clone(),
        status: args
            .status
            .as_deref()
            .map(|raw| parse_enum::<PrescriptionStatus>(raw, "status"))
            .transpose()?,
        medication: args.medication.clone(),
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
    };
    output(&ctx.store.list_prescriptions(&filter), flags.format)
}

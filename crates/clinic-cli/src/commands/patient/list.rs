use clinic_core::enums::{Access, Panel};
use clinic_store::repos::patient::PatientFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PatientListArgs;
use crate::commands::shared::access::require;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &PatientListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Patients, Access::Read)?;

    let patients = if let Some(own) = identity.patient_scope() {
        vec![ctx.store.get_patient(own)?]
    } else {
        ctx.store.list_patients(&PatientFilter {
            search: args.search.clone(),
            gp_surgery_id: args.surgery.clone(),
            limit: Some(effective_limit(flags.limit, ctx.default_limit())),
        })
    };

    output(&patients, flags.format)
}

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::commands::shared::access::{check_owner, require};
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Patients, Access::Read)?;
    check_owner(identity, id)?;
    let patient = ctx.store.get_patient(id)?;
    output(&patient, flags.format)
}

use clinic_core::enums::{Access, Panel};

use crate::cli::GlobalFlags;
use crate::commands::shared::access::{check_owner, require, writer};
use crate::context::AppContext;
use crate::output::output;

/// `clinic patient record <id>`.
pub fn show(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Patients, Access::Read)?;
    check_owner(identity, id)?;
    let mut record = ctx.store.patient_record(id)?;

    // Each section is only shown to roles that can open its panel.
    let visible = |panel| clinic_auth::access(identity.role, panel) != Access::Hidden;
    if !visible(Panel::Appointments) {
        record.appointments.clear();
    }
    if !visible(Panel::Prescriptions) {
        record.prescriptions.clear();
    }
    if !visible(Panel::Referrals) {
        record.referrals.clear();
    }
    output(&record, flags.format)
}

/// `clinic patient purge <id>`.
pub fn purge(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Patients)?;
    let purged = ctx.store.purge_patient_records(&actor, id)?;
    output(&purged, flags.format)
}

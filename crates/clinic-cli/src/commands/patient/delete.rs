use serde::Serialize;

use clinic_core::entities::Patient;
use clinic_core::enums::Panel;
use clinic_core::responses::PurgeResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::access::writer;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PatientDeleteResponse {
    deleted: Patient,
    #[serde(skip_serializing_if = "Option::is_none")]
    purged: Option<PurgeResponse>,
}

pub fn run(
    id: &str,
    purge_related: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Patients)?;
    let deleted = ctx.store.delete_patient(&actor, id)?;
    let purged = if purge_related {
        Some(ctx.store.purge_patient_records(&actor, &deleted.patient_id)?)
    } else {
        None
    };
    output(&PatientDeleteResponse { deleted, purged }, flags.format)
}

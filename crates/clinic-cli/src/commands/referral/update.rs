use clinic_core::enums::{Panel, UrgencyLevel};
use clinic_store::updates::referral::{ReferralUpdate, ReferralUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReferralFields;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::{optional_id, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Status changes go through `referral advance`, never through here.
pub fn run(
    id: &str,
    fields: &ReferralFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields)?;
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let actor = writer(ctx, Panel::Referrals)?;
    let referral = ctx.store.update_referral(&actor, id, &update)?;
    output(&referral, flags.format)
}

fn build_update(fields: &ReferralFields) -> anyhow::Result<ReferralUpdate> {
    let mut builder = ReferralUpdateBuilder::new();
    if let Some(raw) = fields.to_clinician.as_deref() {
        builder = builder.referred_to_clinician_id(optional_id(raw));
    }
    if let Some(value) = fields.to_facility.as_deref() {
        builder = builder.referred_to_facility_id(value);
    }
    if let Some(raw) = fields.urgency.as_deref() {
        builder = builder.urgency_level(parse_enum::<UrgencyLevel>(raw, "urgency")?);
    }
    if let Some(value) = fields.reason.as_deref() {
        builder = builder.referral_reason(value);
    }
    if let Some(value) = fields.summary.as_deref() {
        builder = builder.clinical_summary(value);
    }
    if let Some(value) = fields.investigations.as_deref() {
        builder = builder.requested_investigations(value);
    }
    if let Some(raw) = fields.appointment.as_deref() {
        builder = builder.appointment_id(optional_id(raw));
    }
    if let Some(value) = fields.notes.as_deref() {
        builder = builder.notes(value);
    }
    Ok(builder.build())
}

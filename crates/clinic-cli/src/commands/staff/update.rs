use clinic_core::enums::Panel;
use clinic_store::updates::staff::{StaffUpdate, StaffUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StaffFields;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::optional_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    fields: &StaffFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields);
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let actor = writer(ctx, Panel::Staff)?;
    let staff = ctx.store.update_staff(&actor, id, &update)?;
    output(&staff, flags.format)
}

fn build_update(fields: &StaffFields) -> StaffUpdate {
    let mut builder = StaffUpdateBuilder::new();
    if let Some(value) = fields.first_name.as_deref() {
        builder = builder.first_name(value);
    }
    if let Some(value) = fields.last_name.as_deref() {
        builder = builder.last_name(value);
    }
    if let Some(value) = fields.role.as_deref() {
        builder = builder.role(value);
    }
    if let Some(value) = fields.department.as_deref() {
        builder = builder.department(value);
    }
    if let Some(raw) = fields.facility.as_deref() {
        builder = builder.facility_id(optional_id(raw));
    }
    if let Some(value) = fields.phone.as_deref() {
        builder = builder.phone_number(value);
    }
    if let Some(value) = fields.email.as_deref() {
        builder = builder.email(value);
    }
    if let Some(value) = fields.employment_status.as_deref() {
        builder = builder.employment_status(value);
    }
    if let Some(value) = fields.line_manager.as_deref() {
        builder = builder.line_manager(value);
    }
    if let Some(value) = fields.access_level.as_deref() {
        builder = builder.access_level(value);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_empty() {
        assert!(build_update(&StaffFields::default()).is_empty());
    }

    #[test]
    fn role_change_is_kept() {
        let update = build_update(&StaffFields {
            role: Some("Practice Manager".into()),
            ..StaffFields::default()
        });
        assert!(!update.is_empty());
    }
}

use clinic_core::entities::Staff;
use clinic_core::enums::Panel;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StaffCreateArgs;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::{optional_id, parse_date};
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &StaffCreateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Staff)?;
    let staff = ctx.store.create_staff(&actor, build(args)?)?;
    output(&staff, flags.format)
}

fn build(args: &StaffCreateArgs) -> anyhow::Result<Staff> {
    let fields = &args.fields;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(Staff {
        staff_id: text(&args.id),
        first_name: text(&fields.first_name),
        last_name: text(&fields.last_name),
        role: text(&fields.role),
        department: text(&fields.department),
        facility_id: fields.facility.as_deref().and_then(optional_id),
        phone_number: text(&fields.phone),
        email: text(&fields.email),
        employment_status: text(&fields.employment_status),
        start_date: args
            .started
            .as_deref()
            .map(|raw| parse_date(raw, "started"))
            .transpose()?,
        line_manager: text(&fields.line_manager),
        access_level: text(&fields.access_level),
    })
}

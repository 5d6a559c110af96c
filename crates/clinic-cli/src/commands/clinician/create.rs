use clinic_core::entities::Clinician;
use clinic_core::enums::Panel;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClinicianCreateArgs;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::{optional_id, parse_date};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &ClinicianCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Clinicians)?;
    let clinician = ctx.store.create_clinician(&actor, build(args)?)?;
    output(&clinician, flags.format)
}

fn build(args: &ClinicianCreateArgs) -> anyhow::Result<Clinician> {
    let fields = &args.fields;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(Clinician {
        clinician_id: text(&args.id),
        first_name: text(&fields.first_name),
        last_name: text(&fields.last_name),
        title: text(&fields.title),
        speciality: text(&fields.speciality),
        gmc_number: text(&args.gmc_number),
        phone_number: text(&fields.phone),
        email: text(&fields.email),
        workplace_id: fields.workplace.as_deref().and_then(optional_id),
        workplace_type: text(&fields.workplace_type),
        employment_status: text(&fields.employment_status),
        start_date: args
            .started
            .as_deref()
            .map(|raw| parse_date(raw, "started"))
            .transpose()?,
    })
}

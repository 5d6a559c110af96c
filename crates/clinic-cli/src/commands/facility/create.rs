use clinic_core::entities::Facility;
use clinic_core::enums::Panel;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FacilityCreateArgs;
use crate::commands::shared::access::writer;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &FacilityCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = writer(ctx, Panel::Facilities)?;
    let facility = ctx.store.create_facility(&actor, build(args)?)?;
    output(&facility, flags.format)
}

fn build(args: &FacilityCreateArgs) -> anyhow::Result<Facility> {
    let fields = &args.fields;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(Facility {
        facility_id: text(&args.id),
        facility_name: text(&fields.name),
        facility_type: parse_enum(&args.facility_type, "type")?,
        address: text(&fields.address),
        postcode: text(&fields.postcode),
        phone_number: text(&fields.phone),
        email: text(&fields.email),
        opening_hours: text(&fields.opening_hours),
        manager_name: text(&fields.manager),
        capacity: fields.capacity,
        specialities_offered: text(&fields.specialities),
    })
}

#[cfg(test)]
mod tests {
    use clinic_core::enums::FacilityType;

    use super::*;
    use crate::cli::subcommands::FacilityFields;

    #[test]
    fn type_accepts_display_spelling() {
        let facility = build(&FacilityCreateArgs {
            id: None,
            facility_type: "GP Surgery".into(),
            fields: FacilityFields {
                name: Some("Canton Surgery".into()),
                capacity: Some(12),
                ..FacilityFields::default()
            },
        })
        .unwrap();
        assert_eq!(facility.facility_type, FacilityType::GpSurgery);
        assert_eq!(facility.capacity, Some(12));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = build(&FacilityCreateArgs {
            id: None,
            facility_type: "spa".into(),
            fields: FacilityFields::default(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid type 'spa'"));
    }
}

use clinic_core::enums::{Access, AppointmentStatus, Panel};
use clinic_store::repos::appointment::AppointmentFilter;
use clinic_store::service::today;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AppointmentListArgs;
use crate::commands::shared::access::{require, scoped_patient};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &AppointmentListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Appointments, Access::Read)?;
    let filter = AppointmentFilter {
        patient_id: scoped_patient(identity, args.patient.as_deref())?,
        limit: Some(effective_limit(flags.limit, ctx.default_limit())),
        ..filter_from_args(args)?
    };
    output(&ctx.store.list_appointments(&filter), flags.format)
}

fn filter_from_args(args: &AppointmentListArgs) -> anyhow::Result<AppointmentFilter> {
    let (from, to) = if args.today {
        let day = today();
        (Some(day), Some(day))
    } else {
        (
            args.from.as_deref().map(|raw| parse_date(raw, "from")).transpose()?,
            args.to.as_deref().map(|raw| parse_date(raw, "to")).transpose()?,
        )
    };

    Ok(AppointmentFilter {
        patient_id: args.patient.clone(),
        clinician_id: args.clinician.clone(),
        facility_id: args.facility.clone(),
        status: args
            .status
            .as_deref()
            .map(|raw| parse_enum::<AppointmentStatus>(raw, "status"))
            .transpose()?,
        from,
        to,
        limit: None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn args() -> AppointmentListArgs {
        AppointmentListArgs {
            patient: None,
            clinician: Some("C001".into()),
            facility: None,
            status: Some("no-show".into()),
            from: Some("2025-09-01".into()),
            to: None,
            today: false,
        }
    }

    #[test]
    fn flags_map_to_filter() {
        let filter = filter_from_args(&args()).unwrap();
        assert_eq!(filter.clinician_id.as_deref(), Some("C001"));
        assert_eq!(filter.status, Some(AppointmentStatus::NoShow));
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2025, 9, 1));
        assert_eq!(filter.to, None);
    }

    #[test]
    fn today_sets_both_bounds() {
        let filter = filter_from_args(&AppointmentListArgs {
            from: None,
            today: true,
            ..args()
        })
        .unwrap();
        assert_eq!(filter.from, Some(today()));
        assert_eq!(filter.to, Some(today()));
    }

    #[test]
    fn bad_status_is_rejected() {
        let result = filter_from_args(&AppointmentListArgs {
            status: Some("postponed".into()),
            ..args()
        });
        assert!(result.is_err());
    }
}

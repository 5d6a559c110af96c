use schemars::schema_for;

use clinic_core::audit::AuditRecord;
use clinic_core::entities::{
    Appointment, Clinician, Facility, Patient, Prescription, Referral, Staff,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

const TYPE_NAMES: &[&str] = &[
    "patient",
    "clinician",
    "staff",
    "appointment",
    "prescription",
    "referral",
    "facility",
    "audit",
];

/// Handle `clinic schema`. Always prints JSON, whatever `--format` says.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.trim().to_ascii_lowercase().as_str() {
        "patient" => schema_for!(Patient),
        "clinician" => schema_for!(Clinician),
        "staff" => schema_for!(Staff),
        "appointment" => schema_for!(Appointment),
        "prescription" => schema_for!(Prescription),
        "referral" => schema_for!(Referral),
        "facility" => schema_for!(Facility),
        "audit" => schema_for!(AuditRecord),
        other => anyhow::bail!(
            "unknown type '{other}'; expected one of: {}",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPE_NAMES {
            let schema = schema_json(name).unwrap();
            assert!(schema["properties"].is_object(), "{name} schema has no properties");
        }
    }

    #[test]
    fn patient_schema_names_columns() {
        let schema = schema_json("Patient").unwrap();
        assert!(schema["properties"]["nhs_number"].is_object());
        assert!(schema["properties"]["gp_surgery_id"].is_object());
    }

    #[test]
    fn unknown_type_lists_choices() {
        let err = schema_json("invoice").unwrap_err();
        assert!(err.to_string().contains("patient, clinician"));
    }
}

//! Plain-text referral letters.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clinic_core::entities::{Clinician, Facility};

use crate::error::StoreError;
use crate::service::ClinicStore;

const UNKNOWN: &str = "(not on record)";

fn clinician_line(clinician: Option<&Clinician>, id: &str) -> String {
    clinician.map_or_else(
        || format!("{id} {UNKNOWN}"),
        |c| format!("{} ({}) - {}", c.display_name(), c.clinician_id, c.speciality),
    )
}

fn facility_line(facility: Option<&Facility>, id: &str) -> String {
    facility.map_or_else(
        || format!("{id} {UNKNOWN}"),
        |f| format!("{} ({}), {} {}", f.facility_name, f.facility_id, f.address, f.postcode),
    )
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

/// Render the letter for `referral_id`. References that no longer resolve
/// are printed as their bare ID.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no referral has this ID.
pub fn render_referral_letter(store: &ClinicStore, referral_id: &str) -> Result<String, StoreError> {
    let referral = store.get_referral(referral_id)?;
    let patient = store.patients().find_by_id(&referral.patient_id);
    let from = store.clinicians().find_by_id(&referral.referring_clinician_id);
    let to = referral
        .referred_to_clinician_id
        .as_deref()
        .and_then(|id| store.clinicians().find_by_id(id));
    let from_facility = store.facilities().find_by_id(&referral.referring_facility_id);
    let to_facility = store.facilities().find_by_id(&referral.referred_to_facility_id);

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "REFERRAL {}", referral.referral_id);
    let _ = writeln!(out, "Date: {}", referral.referral_date);
    let _ = writeln!(out, "Urgency: {}", referral.urgency_level.as_str().to_uppercase());
    let _ = writeln!(out, "Status: {}", referral.status);
    let _ = writeln!(out);

    let _ = writeln!(out, "From: {}", clinician_line(from, &referral.referring_clinician_id));
    let _ = writeln!(
        out,
        "      {}",
        facility_line(from_facility, &referral.referring_facility_id)
    );
    match (&referral.referred_to_clinician_id, to) {
        (Some(id), found) => {
            let _ = writeln!(out, "To:   {}", clinician_line(found, id));
        }
        (None, _) => {
            let _ = writeln!(out, "To:   The duty clinician");
        }
    }
    let _ = writeln!(
        out,
        "      {}",
        facility_line(to_facility, &referral.referred_to_facility_id)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Patient");
    match patient {
        Some(p) => {
            let _ = writeln!(out, "  Name:          {} ({})", p.full_name(), p.patient_id);
            let _ = writeln!(
                out,
                "  Date of birth: {}",
                p.date_of_birth.map_or_else(|| "-".to_string(), |d| d.to_string())
            );
            let _ = writeln!(out, "  NHS number:    {}", or_dash(&p.nhs_number));
            let _ = writeln!(out, "  Address:       {} {}", p.address, p.postcode);
            let _ = writeln!(out, "  Phone:         {}", or_dash(&p.phone_number));
        }
        None => {
            let _ = writeln!(out, "  {} {UNKNOWN}", referral.patient_id);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Reason for referral");
    let _ = writeln!(out, "  {}", or_dash(&referral.referral_reason));
    let _ = writeln!(out);
    let _ = writeln!(out, "Clinical summary");
    let _ = writeln!(out, "  {}", or_dash(&referral.clinical_summary));
    let _ = writeln!(out);
    let _ = writeln!(out, "Requested investigations");
    let _ = writeln!(out, "  {}", or_dash(&referral.requested_investigations));
    if !referral.notes.trim().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notes");
        let _ = writeln!(out, "  {}", referral.notes);
    }
    Ok(out)
}

/// Write a rendered letter to `<dir>/<referral_id>.txt`, creating `dir`.
///
/// # Errors
///
/// Returns `StoreError::Io` if the directory or file cannot be written.
pub fn write_letter(dir: &Path, referral_id: &str, letter: &str) -> Result<PathBuf, StoreError> {
    std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    let path = dir.join(format!("{referral_id}.txt"));
    std::fs::write(&path, letter).map_err(|e| StoreError::io(&path, e))?;
    tracing::info!(referral_id, path = %path.display(), "referral letter written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::clinic_store;
    use crate::test_support::samples;

    #[test]
    fn letter_names_everyone_involved() {
        let mut store = clinic_store();
        let mut referral = samples::referral("", "P001", "C001");
        referral.referred_to_clinician_id = Some("C002".into());
        let referral = store.create_referral("C001", referral).unwrap();

        let letter = render_referral_letter(&store, &referral.referral_id).unwrap();
        assert!(letter.starts_with("REFERRAL R001\n"));
        assert!(letter.contains("Urgency: ROUTINE"));
        assert!(letter.contains("Dr David Evans (C001)"));
        assert!(letter.contains("(C002)"));
        assert!(letter.contains("University Hospital of Wales (H001)"));
        assert!(letter.contains("John Smith (P001)"));
        assert!(letter.contains("Spirometry"));
        assert!(!letter.contains("Notes"));
    }

    #[test]
    fn letter_tolerates_missing_references() {
        let mut store = clinic_store();
        let referral = store
            .create_referral("C001", samples::referral("", "P404", "C404"))
            .unwrap();
        let letter = render_referral_letter(&store, &referral.referral_id).unwrap();
        assert!(letter.contains("P404 (not on record)"));
        assert!(letter.contains("C404 (not on record)"));
        assert!(letter.contains("The duty clinician"));
    }

    #[test]
    fn write_letter_creates_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let letters = dir.path().join("letters");
        let path = write_letter(&letters, "R001", "hello\n").unwrap();
        assert_eq!(path, letters.join("R001.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn unknown_referral_is_not_found() {
        let store = clinic_store();
        assert!(render_referral_letter(&store, "R999").unwrap_err().is_not_found());
    }
}

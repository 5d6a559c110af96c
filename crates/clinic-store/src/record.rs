//! Binding between record structs and their CSV files.

use serde::Serialize;
use serde::de::DeserializeOwned;

use clinic_core::entities::{
    Appointment, Clinician, Facility, Patient, Prescription, Referral, Staff,
};
use clinic_core::enums::EntityType;

/// A record stored one-per-row in a CSV file.
///
/// `HEADERS` lists the columns in the same order as the struct's fields, so
/// serde's positional output lines up with the header row.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const ENTITY: EntityType;
    const HEADERS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Prefix this record's ID must carry.
    fn id_prefix(&self) -> &'static str {
        Self::ENTITY.id_prefix()
    }
}

impl Record for Patient {
    const ENTITY: EntityType = EntityType::Patient;
    const HEADERS: &'static [&'static str] = &[
        "patient_id",
        "first_name",
        "last_name",
        "date_of_birth",
        "nhs_number",
        "gender",
        "phone_number",
        "email",
        "address",
        "postcode",
        "emergency_contact_name",
        "emergency_contact_phone",
        "registration_date",
        "gp_surgery_id",
    ];

    fn id(&self) -> &str {
        &self.patient_id
    }
}

impl Record for Clinician {
    const ENTITY: EntityType = EntityType::Clinician;
    const HEADERS: &'static [&'static str] = &[
        "clinician_id",
        "first_name",
        "last_name",
        "title",
        "speciality",
        "gmc_number",
        "phone_number",
        "email",
        "workplace_id",
        "workplace_type",
        "employment_status",
        "start_date",
    ];

    fn id(&self) -> &str {
        &self.clinician_id
    }
}

impl Record for Staff {
    const ENTITY: EntityType = EntityType::Staff;
    const HEADERS: &'static [&'static str] = &[
        "staff_id",
        "first_name",
        "last_name",
        "role",
        "department",
        "facility_id",
        "phone_number",
        "email",
        "employment_status",
        "start_date",
        "line_manager",
        "access_level",
    ];

    fn id(&self) -> &str {
        &self.staff_id
    }
}

impl Record for Appointment {
    const ENTITY: EntityType = EntityType::Appointment;
    const HEADERS: &'static [&'static str] = &[
        "appointment_id",
        "patient_id",
        "clinician_id",
        "facility_id",
        "appointment_date",
        "appointment_time",
        "duration_minutes",
        "appointment_type",
        "status",
        "reason_for_visit",
        "notes",
        "created_date",
        "last_modified",
    ];

    fn id(&self) -> &str {
        &self.appointment_id
    }
}

impl Record for Prescription {
    const ENTITY: EntityType = EntityType::Prescription;
    const HEADERS: &'static [&'static str] = &[
        "prescription_id",
        "patient_id",
        "clinician_id",
        "appointment_id",
        "prescription_date",
        "medication_name",
        "dosage",
        "frequency",
        "duration_days",
        "quantity",
        "instructions",
        "pharmacy_name",
        "status",
        "issue_date",
        "collection_date",
    ];

    fn id(&self) -> &str {
        &self.prescription_id
    }
}

impl Record for Referral {
    const ENTITY: EntityType = EntityType::Referral;
    const HEADERS: &'static [&'static str] = &[
        "referral_id",
        "patient_id",
        "referring_clinician_id",
        "referred_to_clinician_id",
        "referring_facility_id",
        "referred_to_facility_id",
        "referral_date",
        "urgency_level",
        "referral_reason",
        "clinical_summary",
        "requested_investigations",
        "status",
        "appointment_id",
        "notes",
        "created_date",
        "last_updated",
    ];

    fn id(&self) -> &str {
        &self.referral_id
    }
}

impl Record for Facility {
    const ENTITY: EntityType = EntityType::Facility;
    const HEADERS: &'static [&'static str] = &[
        "facility_id",
        "facility_name",
        "facility_type",
        "address",
        "postcode",
        "phone_number",
        "email",
        "opening_hours",
        "manager_name",
        "capacity",
        "specialities_offered",
    ];

    fn id(&self) -> &str {
        &self.facility_id
    }

    fn id_prefix(&self) -> &'static str {
        self.facility_type.id_prefix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::samples;
    use pretty_assertions::assert_eq;

    /// Header row csv derives from the struct's field names.
    fn derived_headers<T: Serialize>(record: &T) -> Vec<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(record).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        header.split(',').map(String::from).collect()
    }

    fn assert_headers_match<T: Record>(record: &T) {
        let headers: Vec<String> = T::HEADERS.iter().map(|h| (*h).to_string()).collect();
        assert_eq!(headers, derived_headers(record), "{} headers drifted", T::ENTITY);
    }

    #[test]
    fn headers_follow_field_order() {
        assert_headers_match(&samples::patient("P001"));
        assert_headers_match(&samples::clinician("C001"));
        assert_headers_match(&samples::staff("ST001"));
        assert_headers_match(&samples::appointment("A001", "P001", "C001"));
        assert_headers_match(&samples::prescription("RX001", "P001", "C001"));
        assert_headers_match(&samples::referral("R001", "P001", "C001"));
        assert_headers_match(&samples::facility("S001"));
    }

    #[test]
    fn facility_prefix_follows_type() {
        let mut facility = samples::facility("S001");
        assert_eq!(facility.id_prefix(), "S");
        facility.facility_type = clinic_core::enums::FacilityType::Hospital;
        assert_eq!(facility.id_prefix(), "H");
        assert_eq!(samples::patient("P001").id_prefix(), "P");
    }
}

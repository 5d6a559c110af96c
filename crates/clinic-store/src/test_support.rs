//! Shared test utilities for clinic-store unit tests.

#[cfg(test)]
pub(crate) mod samples {
    use chrono::{NaiveDate, NaiveTime};

    use clinic_core::entities::{
        Appointment, Clinician, Facility, Patient, Prescription, Referral, Staff,
    };
    use clinic_core::enums::{
        AppointmentStatus, FacilityType, PrescriptionStatus, ReferralStatus, UrgencyLevel,
    };

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// NHS number unique per patient ID; empty for an unassigned ID.
    fn nhs_for(id: &str) -> String {
        id.trim_start_matches('P')
            .parse::<u32>()
            .map(|n| format!("943{n:07}"))
            .unwrap_or_default()
    }

    pub fn patient(id: &str) -> Patient {
        Patient {
            patient_id: id.into(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            date_of_birth: Some(date(1985, 3, 15)),
            nhs_number: nhs_for(id),
            gender: "M".into(),
            phone_number: "07700 900123".into(),
            email: "john.smith@example.com".into(),
            address: "12 High Street, Cardiff".into(),
            postcode: "CF10 1AA".into(),
            emergency_contact_name: "Jane Smith".into(),
            emergency_contact_phone: "07700 900456".into(),
            registration_date: Some(date(2020, 1, 10)),
            gp_surgery_id: Some("S001".into()),
        }
    }

    pub fn clinician(id: &str) -> Clinician {
        Clinician {
            clinician_id: id.into(),
            first_name: "David".into(),
            last_name: "Evans".into(),
            title: "Dr".into(),
            speciality: "General Practice".into(),
            gmc_number: "GMC4521873".into(),
            phone_number: "029 2000 1000".into(),
            email: "d.evans@nhs.example".into(),
            workplace_id: Some("S001".into()),
            workplace_type: "GP Surgery".into(),
            employment_status: "Full-time".into(),
            start_date: Some(date(2012, 8, 1)),
        }
    }

    pub fn nurse(id: &str) -> Clinician {
        Clinician {
            first_name: "Rhian".into(),
            last_name: "Morgan".into(),
            title: "Nurse".into(),
            speciality: "Practice Nursing".into(),
            gmc_number: String::new(),
            ..clinician(id)
        }
    }

    pub fn staff(id: &str) -> Staff {
        Staff {
            staff_id: id.into(),
            first_name: "Mary".into(),
            last_name: "Jones".into(),
            role: "Receptionist".into(),
            department: "Front Desk".into(),
            facility_id: Some("S001".into()),
            phone_number: "029 2000 1001".into(),
            email: "m.jones@nhs.example".into(),
            employment_status: "Part-time".into(),
            start_date: Some(date(2019, 4, 1)),
            line_manager: String::new(),
            access_level: "Standard".into(),
        }
    }

    pub fn appointment(id: &str, patient_id: &str, clinician_id: &str) -> Appointment {
        Appointment {
            appointment_id: id.into(),
            patient_id: patient_id.into(),
            clinician_id: clinician_id.into(),
            facility_id: "S001".into(),
            appointment_date: date(2025, 9, 20),
            appointment_time: time(9, 0),
            duration_minutes: 15,
            appointment_type: "Routine Consultation".into(),
            status: AppointmentStatus::Scheduled,
            reason_for_visit: "Annual asthma review".into(),
            notes: String::new(),
            created_date: None,
            last_modified: None,
        }
    }

    pub fn prescription(id: &str, patient_id: &str, clinician_id: &str) -> Prescription {
        Prescription {
            prescription_id: id.into(),
            patient_id: patient_id.into(),
            clinician_id: clinician_id.into(),
            appointment_id: None,
            prescription_date: date(2025, 9, 20),
            medication_name: "Salbutamol".into(),
            dosage: "100mcg".into(),
            frequency: "As required".into(),
            duration_days: Some(30),
            quantity: "1 inhaler".into(),
            instructions: "Two puffs when breathless".into(),
            pharmacy_name: "Boots, Queen Street".into(),
            status: PrescriptionStatus::Issued,
            issue_date: None,
            collection_date: None,
        }
    }

    pub fn referral(id: &str, patient_id: &str, clinician_id: &str) -> Referral {
        Referral {
            referral_id: id.into(),
            patient_id: patient_id.into(),
            referring_clinician_id: clinician_id.into(),
            referred_to_clinician_id: None,
            referring_facility_id: "S001".into(),
            referred_to_facility_id: "H001".into(),
            referral_date: date(2025, 9, 20),
            urgency_level: UrgencyLevel::Routine,
            referral_reason: "Persistent wheeze".into(),
            clinical_summary: "Poorly controlled asthma despite inhaled steroids.".into(),
            requested_investigations: "Spirometry".into(),
            status: ReferralStatus::New,
            appointment_id: None,
            notes: String::new(),
            created_date: None,
            last_updated: None,
        }
    }

    pub fn facility(id: &str) -> Facility {
        Facility {
            facility_id: id.into(),
            facility_name: "Riverside Surgery".into(),
            facility_type: FacilityType::GpSurgery,
            address: "1 River Road, Cardiff".into(),
            postcode: "CF11 6AB".into(),
            phone_number: "029 2000 2000".into(),
            email: "riverside@nhs.example".into(),
            opening_hours: "Mon-Fri 08:00-18:30".into(),
            manager_name: "Gwen Thomas".into(),
            capacity: None,
            specialities_offered: "General Practice|Vaccinations".into(),
        }
    }

    pub fn hospital(id: &str) -> Facility {
        Facility {
            facility_name: "University Hospital of Wales".into(),
            facility_type: FacilityType::Hospital,
            opening_hours: "24/7".into(),
            capacity: Some(1000),
            specialities_offered: "Respiratory|Cardiology".into(),
            ..facility(id)
        }
    }
}

#[cfg(test)]
pub(crate) mod helpers {
    use crate::service::{ClinicStore, StorePaths};

    use super::samples;

    /// A store over a temp directory with the audit trail enabled.
    pub fn temp_store() -> (tempfile::TempDir, ClinicStore) {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ClinicStore::open(
            &StorePaths::in_dir(dir.path()),
            Some(dir.path().join("audit.jsonl")),
        )
        .unwrap();
        (dir, store)
    }

    /// A detached store holding one surgery (S001), one hospital (H001),
    /// a GP (C001), a nurse (C002), a receptionist (ST001) and two patients
    /// (P001, P002).
    pub fn clinic_store() -> ClinicStore {
        let mut store = ClinicStore::detached();
        store.facilities.add(samples::facility("S001")).unwrap();
        store.facilities.add(samples::hospital("H001")).unwrap();
        store.clinicians.add(samples::clinician("C001")).unwrap();
        store.clinicians.add(samples::nurse("C002")).unwrap();
        store.staff.add(samples::staff("ST001")).unwrap();
        store.patients.add(samples::patient("P001")).unwrap();
        let mut second = samples::patient("P002");
        second.first_name = "Alys".into();
        second.last_name = "Price".into();
        second.gender = "F".into();
        store.patients.add(second).unwrap();
        store
    }
}

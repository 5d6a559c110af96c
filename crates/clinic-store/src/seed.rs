//! Demo dataset for `clinic init --demo`.

use chrono::{Days, NaiveDate, NaiveTime};

use clinic_core::entities::{
    Appointment, Clinician, Facility, Patient, Prescription, Referral, Staff,
};
use clinic_core::enums::{
    AppointmentStatus, EntityType, FacilityType, PrescriptionStatus, ReferralStatus, UrgencyLevel,
};

use crate::error::StoreError;
use crate::service::{ClinicStore, today};

fn facility(name: &str, facility_type: FacilityType, address: &str, postcode: &str) -> Facility {
    Facility {
        facility_id: String::new(),
        facility_name: name.into(),
        facility_type,
        address: address.into(),
        postcode: postcode.into(),
        phone_number: "029 2000 0000".into(),
        email: String::new(),
        opening_hours: match facility_type {
            FacilityType::Hospital => "24/7".into(),
            _ => "Mon-Fri 08:00-18:30".into(),
        },
        manager_name: String::new(),
        capacity: None,
        specialities_offered: String::new(),
    }
}

fn clinician(first: &str, last: &str, title: &str, speciality: &str, workplace: &str) -> Clinician {
    Clinician {
        clinician_id: String::new(),
        first_name: first.into(),
        last_name: last.into(),
        title: title.into(),
        speciality: speciality.into(),
        gmc_number: String::new(),
        phone_number: String::new(),
        email: format!("{}.{}@nhs.example", first.to_lowercase(), last.to_lowercase()),
        workplace_id: Some(workplace.into()),
        workplace_type: String::new(),
        employment_status: "Full-time".into(),
        start_date: None,
    }
}

fn staff(first: &str, last: &str, role: &str, facility_id: &str) -> Staff {
    Staff {
        staff_id: String::new(),
        first_name: first.into(),
        last_name: last.into(),
        role: role.into(),
        department: "Administration".into(),
        facility_id: Some(facility_id.into()),
        phone_number: String::new(),
        email: format!("{}.{}@nhs.example", first.to_lowercase(), last.to_lowercase()),
        employment_status: "Full-time".into(),
        start_date: None,
        line_manager: String::new(),
        access_level: "Standard".into(),
    }
}

fn patient(first: &str, last: &str, born: (i32, u32, u32), nhs: &str, gender: &str) -> Patient {
    Patient {
        patient_id: String::new(),
        first_name: first.into(),
        last_name: last.into(),
        date_of_birth: NaiveDate::from_ymd_opt(born.0, born.1, born.2),
        nhs_number: nhs.into(),
        gender: gender.into(),
        phone_number: String::new(),
        email: String::new(),
        address: "Cardiff".into(),
        postcode: String::new(),
        emergency_contact_name: String::new(),
        emergency_contact_phone: String::new(),
        registration_date: None,
        gp_surgery_id: Some("S001".into()),
    }
}

/// Fill an empty store with a small working clinic: two surgeries, a
/// hospital, a pharmacy, three clinicians, two staff, four patients and one
/// appointment, prescription and referral.
///
/// The audit trail is paused while seeding. Returns the record count per
/// entity type afterwards.
///
/// # Errors
///
/// Returns `StoreError::Validation` if the store already holds records, or
/// any error from the underlying creates.
pub fn seed_demo(store: &mut ClinicStore, actor: &str) -> Result<Vec<(EntityType, usize)>, StoreError> {
    if !store.is_empty() {
        return Err(StoreError::Validation(
            "demo data can only be seeded into an empty data directory".into(),
        ));
    }

    let audit_was_enabled = store.audit().is_enabled();
    store.audit_mut().set_enabled(false);
    let result = insert_demo(store, actor);
    store.audit_mut().set_enabled(audit_was_enabled);
    result?;

    tracing::info!("demo data seeded");
    Ok(store.counts())
}

fn insert_demo(store: &mut ClinicStore, actor: &str) -> Result<(), StoreError> {
    let surgery = store.create_facility(
        actor,
        facility("Riverside Surgery", FacilityType::GpSurgery, "1 River Road, Cardiff", "CF11 6AB"),
    )?;
    store.create_facility(
        actor,
        facility("Llandaff Health Centre", FacilityType::GpSurgery, "4 Cathedral Road, Cardiff", "CF5 2LD"),
    )?;
    let hospital = store.create_facility(
        actor,
        Facility {
            specialities_offered: "Respiratory|Cardiology|Emergency".into(),
            capacity: Some(1000),
            ..facility("University Hospital of Wales", FacilityType::Hospital, "Heath Park, Cardiff", "CF14 4XW")
        },
    )?;
    store.create_facility(
        actor,
        facility("Queen Street Pharmacy", FacilityType::Pharmacy, "80 Queen Street, Cardiff", "CF10 2GR"),
    )?;

    let gp = store.create_clinician(
        actor,
        clinician("David", "Evans", "Dr", "General Practice", &surgery.facility_id),
    )?;
    store.create_clinician(
        actor,
        clinician("Rhian", "Morgan", "Nurse", "Practice Nursing", &surgery.facility_id),
    )?;
    let consultant = store.create_clinician(
        actor,
        clinician("Huw", "Lewis", "Dr", "Respiratory Medicine", &hospital.facility_id),
    )?;

    store.create_staff(actor, staff("Gwen", "Thomas", "Practice Manager", &surgery.facility_id))?;
    store.create_staff(actor, staff("Mary", "Jones", "Receptionist", &surgery.facility_id))?;

    let john = store.create_patient(actor, patient("John", "Smith", (1985, 3, 15), "9434765919", "M"))?;
    store.create_patient(actor, patient("Alys", "Price", (1992, 11, 2), "9434765870", "F"))?;
    store.create_patient(actor, patient("Owen", "Davies", (1958, 6, 30), "9434765828", "M"))?;
    store.create_patient(actor, patient("Carys", "Hughes", (2010, 1, 21), "9434765801", "F"))?;

    let day = today();
    let next_day = day.checked_add_days(Days::new(1)).unwrap_or(day);
    let appointment = store.create_appointment(
        actor,
        Appointment {
            appointment_id: String::new(),
            patient_id: john.patient_id.clone(),
            clinician_id: gp.clinician_id.clone(),
            facility_id: surgery.facility_id.clone(),
            appointment_date: next_day,
            appointment_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            duration_minutes: 15,
            appointment_type: "Routine Consultation".into(),
            status: AppointmentStatus::Scheduled,
            reason_for_visit: "Asthma review".into(),
            notes: String::new(),
            created_date: None,
            last_modified: None,
        },
    )?;

    store.create_prescription(
        actor,
        Prescription {
            prescription_id: String::new(),
            patient_id: john.patient_id.clone(),
            clinician_id: gp.clinician_id.clone(),
            appointment_id: Some(appointment.appointment_id.clone()),
            prescription_date: day,
            medication_name: "Salbutamol".into(),
            dosage: "100mcg".into(),
            frequency: "As required".into(),
            duration_days: Some(30),
            quantity: "1 inhaler".into(),
            instructions: "Two puffs when breathless".into(),
            pharmacy_name: "Queen Street Pharmacy".into(),
            status: PrescriptionStatus::Issued,
            issue_date: None,
            collection_date: None,
        },
    )?;

    store.create_referral(
        actor,
        Referral {
            referral_id: String::new(),
            patient_id: john.patient_id,
            referring_clinician_id: gp.clinician_id,
            referred_to_clinician_id: Some(consultant.clinician_id),
            referring_facility_id: surgery.facility_id,
            referred_to_facility_id: hospital.facility_id,
            referral_date: day,
            urgency_level: UrgencyLevel::Urgent,
            referral_reason: "Poorly controlled asthma".into(),
            clinical_summary: "Night-time symptoms despite inhaled steroids.".into(),
            requested_investigations: "Spirometry".into(),
            status: ReferralStatus::New,
            appointment_id: Some(appointment.appointment_id),
            notes: String::new(),
            created_date: None,
            last_updated: None,
        },
    )?;
    Ok(())
}

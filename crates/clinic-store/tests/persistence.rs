//! On-disk behaviour of the store: files survive a reopen, creates append
//! single lines, and every file keeps its header.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;

use clinic_core::entities::{Appointment, Patient};
use clinic_core::enums::{AppointmentStatus, AuditOp, EntityType};
use clinic_store::audit::AuditFilter;
use clinic_store::repos::appointment::AppointmentFilter;
use clinic_store::seed::seed_demo;
use clinic_store::updates::patient::PatientUpdateBuilder;
use clinic_store::{ClinicStore, StorePaths};

fn open(dir: &Path) -> ClinicStore {
    ClinicStore::open(&StorePaths::in_dir(dir), Some(dir.join("audit.jsonl"))).unwrap()
}

fn patient(first: &str, last: &str, address: &str) -> Patient {
    Patient {
        patient_id: String::new(),
        first_name: first.into(),
        last_name: last.into(),
        date_of_birth: NaiveDate::from_ymd_opt(1970, 5, 1),
        nhs_number: String::new(),
        gender: "F".into(),
        phone_number: String::new(),
        email: String::new(),
        address: address.into(),
        postcode: "CF10 1AA".into(),
        emergency_contact_name: String::new(),
        emergency_contact_phone: String::new(),
        registration_date: NaiveDate::from_ymd_opt(2024, 2, 1),
        gp_surgery_id: None,
    }
}

fn appointment(patient_id: &str) -> Appointment {
    Appointment {
        appointment_id: String::new(),
        patient_id: patient_id.into(),
        clinician_id: "C001".into(),
        facility_id: "S001".into(),
        appointment_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        appointment_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        duration_minutes: 10,
        appointment_type: "Telephone".into(),
        status: AppointmentStatus::Scheduled,
        reason_for_visit: "Results".into(),
        notes: String::new(),
        created_date: None,
        last_modified: None,
    }
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let mut store = open(dir.path());
        store
            .create_patient("ST001", patient("Ann", "O'Neill", "Flat 2, \"The Mews\", Cardiff"))
            .unwrap();
        store.create_appointment("ST001", appointment("P001")).unwrap();
    }

    let store = open(dir.path());
    let ann = store.get_patient("P001").unwrap();
    assert_eq!(ann.last_name, "O'Neill");
    assert_eq!(ann.address, "Flat 2, \"The Mews\", Cardiff");
    assert_eq!(ann.gp_surgery_id, None);

    let booked = store.get_appointment("A001").unwrap();
    assert_eq!(booked.appointment_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    assert_eq!(booked.status, AppointmentStatus::Scheduled);
}

#[test]
fn create_appends_one_line_per_record() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = open(dir.path());
    store.create_appointment("ST001", appointment("P001")).unwrap();
    store.create_appointment("ST001", appointment("P002")).unwrap();

    let text = fs::read_to_string(dir.path().join("appointments.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("appointment_id,patient_id,clinician_id"));
    assert!(lines[1].starts_with("A001,P001,C001,S001,2025-10-01,10:30,10,"));
    assert!(lines[1].contains(",scheduled,"));
}

#[test]
fn delete_rewrites_with_header() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = open(dir.path());
    store.create_patient("ST001", patient("Ann", "Lee", "Cardiff")).unwrap();
    store.delete_patient("ST001", "P001").unwrap();

    let text = fs::read_to_string(dir.path().join("patients.csv")).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("patient_id,first_name,last_name"));
}

#[test]
fn next_id_continues_after_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let mut store = open(dir.path());
        store.create_patient("ST001", patient("Ann", "Lee", "Cardiff")).unwrap();
        store.create_patient("ST001", patient("Ben", "Lee", "Cardiff")).unwrap();
        store.delete_patient("ST001", "P001").unwrap();
    }
    let mut store = open(dir.path());
    let created = store
        .create_patient("ST001", patient("Cai", "Lee", "Cardiff"))
        .unwrap();
    assert_eq!(created.patient_id, "P003");
}

#[test]
fn audit_records_every_mutation_with_actor() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = open(dir.path());
    store.create_patient("ST002", patient("Ann", "Lee", "Cardiff")).unwrap();
    store
        .update_patient(
            "ST002",
            "P001",
            &PatientUpdateBuilder::new().phone_number("07700 900999").build(),
        )
        .unwrap();
    store.create_appointment("C001", appointment("P001")).unwrap();
    store.cancel_appointment("C001", "A001").unwrap();

    let by_receptionist = store
        .audit()
        .query(&AuditFilter {
            actor: Some("ST002".into()),
            ..AuditFilter::default()
        })
        .unwrap();
    assert_eq!(by_receptionist.len(), 2);
    assert_eq!(by_receptionist[0].op, AuditOp::Update);

    let appointment_ops: Vec<AuditOp> = store
        .audit()
        .query(&AuditFilter {
            entity: Some(EntityType::Appointment),
            ..AuditFilter::default()
        })
        .unwrap()
        .into_iter()
        .map(|r| r.op)
        .collect();
    assert_eq!(appointment_ops, vec![AuditOp::Transition, AuditOp::Create]);
}

#[test]
fn demo_seed_round_trips_through_files() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let mut store = open(dir.path());
        seed_demo(&mut store, "developer").unwrap();
    }
    let store = open(dir.path());
    assert_eq!(store.patients().len(), 4);
    let upcoming = store.list_appointments(&AppointmentFilter::default());
    assert_eq!(upcoming.len(), 1);
    let detail = store.appointment_detail(&upcoming[0].appointment_id).unwrap();
    assert_eq!(detail.patient.unwrap().first_name, "John");
    assert_eq!(detail.clinician.unwrap().title, "Dr");
}

#[test]
fn hand_edited_file_with_spaces_loads() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("facilities.csv"),
        "facility_id,facility_name,facility_type,address,postcode,phone_number,email,opening_hours,manager_name,capacity,specialities_offered\n\
         S001 , Riverside Surgery , gp_surgery ,\"1 River Road, Cardiff\",CF11 6AB,,,,, ,General Practice\n",
    )
    .unwrap();
    let store = open(dir.path());
    let surgery = store.get_facility("S001").unwrap();
    assert_eq!(surgery.facility_name, "Riverside Surgery");
    assert_eq!(surgery.address, "1 River Road, Cardiff");
    assert_eq!(surgery.capacity, None);
}

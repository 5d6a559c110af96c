use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PrescriptionStatus;

/// A medication issued to a patient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Prescription {
    pub prescription_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub appointment_id: Option<String>,
    pub prescription_date: NaiveDate,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: Option<u32>,
    pub quantity: String,
    pub instructions: String,
    pub pharmacy_name: String,
    pub status: PrescriptionStatus,
    pub issue_date: Option<NaiveDate>,
    pub collection_date: Option<NaiveDate>,
}

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A GP, nurse or consultant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Clinician {
    pub clinician_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Professional title, e.g. "Dr", "Nurse", "Consultant".
    pub title: String,
    pub speciality: String,
    pub gmc_number: String,
    pub phone_number: String,
    pub email: String,
    /// Facility ID where the clinician works.
    pub workplace_id: Option<String>,
    pub workplace_type: String,
    pub employment_status: String,
    pub start_date: Option<NaiveDate>,
}

impl Clinician {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Name with title, as printed on letters.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.title.is_empty() {
            self.full_name()
        } else {
            format!("{} {} {}", self.title, self.first_name, self.last_name)
        }
    }

    /// Whether the title or speciality marks this clinician as nursing staff.
    #[must_use]
    pub fn is_nurse(&self) -> bool {
        let title = self.title.to_ascii_lowercase();
        let speciality = self.speciality.to_ascii_lowercase();
        title.contains("nurse") || speciality.contains("nurs")
    }
}

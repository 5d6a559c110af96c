use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Non-clinical staff member (reception, practice management).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Staff {
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Job role as written in the staff file, e.g. "Receptionist".
    pub role: String,
    pub department: String,
    pub facility_id: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub employment_status: String,
    pub start_date: Option<NaiveDate>,
    pub line_manager: String,
    pub access_level: String,
}

impl Staff {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

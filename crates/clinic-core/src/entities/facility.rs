use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FacilityType;

/// A GP surgery, hospital, clinic or pharmacy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Facility {
    pub facility_id: String,
    pub facility_name: String,
    pub facility_type: FacilityType,
    pub address: String,
    pub postcode: String,
    pub phone_number: String,
    pub email: String,
    pub opening_hours: String,
    pub manager_name: String,
    pub capacity: Option<u32>,
    /// `|`-separated list, e.g. `General Practice|Minor Surgery`.
    pub specialities_offered: String,
}

impl Facility {
    #[must_use]
    pub fn specialities(&self) -> Vec<&str> {
        self.specialities_offered
            .split(['|', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

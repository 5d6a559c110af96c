use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Patient {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nhs_number: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub registration_date: Option<NaiveDate>,
    /// Facility ID of the surgery the patient is registered with.
    pub gp_surgery_id: Option<String>,
}

impl Patient {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on `today`, if the date of birth is known.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        let mut years = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(dob: Option<NaiveDate>) -> Patient {
        Patient {
            patient_id: "P001".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: dob,
            nhs_number: "9434765919".into(),
            gender: "F".into(),
            phone_number: String::new(),
            email: String::new(),
            address: String::new(),
            postcode: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            registration_date: None,
            gp_surgery_id: None,
        }
    }

    #[test]
    fn age_counts_birthday_boundary() {
        let p = patient(NaiveDate::from_ymd_opt(1990, 6, 15));
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()), Some(29));
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), Some(30));
    }

    #[test]
    fn age_unknown_without_dob() {
        assert_eq!(patient(None).age_on(NaiveDate::MIN), None);
    }

    #[test]
    fn full_name_joins_parts() {
        assert_eq!(patient(None).full_name(), "Ada Lovelace");
    }
}

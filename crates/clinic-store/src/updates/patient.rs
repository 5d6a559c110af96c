//! Patient update builder.

use chrono::NaiveDate;
use serde::Serialize;

use clinic_core::entities::Patient;

use super::set;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nhs_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gp_surgery_id: Option<Option<String>>,
}

impl PatientUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.date_of_birth.is_none()
            && self.nhs_number.is_none()
            && self.gender.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.postcode.is_none()
            && self.emergency_contact_name.is_none()
            && self.emergency_contact_phone.is_none()
            && self.gp_surgery_id.is_none()
    }

    pub fn apply(&self, patient: &mut Patient) {
        set(&mut patient.first_name, self.first_name.as_ref());
        set(&mut patient.last_name, self.last_name.as_ref());
        set(&mut patient.date_of_birth, self.date_of_birth.as_ref());
        set(&mut patient.nhs_number, self.nhs_number.as_ref());
        set(&mut patient.gender, self.gender.as_ref());
        set(&mut patient.phone_number, self.phone_number.as_ref());
        set(&mut patient.email, self.email.as_ref());
        set(&mut patient.address, self.address.as_ref());
        set(&mut patient.postcode, self.postcode.as_ref());
        set(&mut patient.emergency_contact_name, self.emergency_contact_name.as_ref());
        set(&mut patient.emergency_contact_phone, self.emergency_contact_phone.as_ref());
        set(&mut patient.gp_surgery_id, self.gp_surgery_id.as_ref());
    }
}

pub struct PatientUpdateBuilder(PatientUpdate);

impl PatientUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PatientUpdate::default())
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.0.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.0.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.0.date_of_birth = Some(date_of_birth);
        self
    }

    #[must_use]
    pub fn nhs_number(mut self, nhs_number: impl Into<String>) -> Self {
        self.0.nhs_number = Some(nhs_number.into());
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.0.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.0.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.0.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.0.postcode = Some(postcode.into());
        self
    }

    #[must_use]
    pub fn emergency_contact_name(mut self, name: impl Into<String>) -> Self {
        self.0.emergency_contact_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn emergency_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.0.emergency_contact_phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn gp_surgery_id(mut self, gp_surgery_id: Option<String>) -> Self {
        self.0.gp_surgery_id = Some(gp_surgery_id);
        self
    }

    #[must_use]
    pub fn build(self) -> PatientUpdate {
        self.0
    }
}

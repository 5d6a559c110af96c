//! Clinician update builder.

use serde::Serialize;

use clinic_core::entities::Clinician;

use super::set;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClinicianUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speciality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workplace_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workplace_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
}

impl ClinicianUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.title.is_none()
            && self.speciality.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.workplace_id.is_none()
            && self.workplace_type.is_none()
            && self.employment_status.is_none()
    }

    pub fn apply(&self, clinician: &mut Clinician) {
        set(&mut clinician.first_name, self.first_name.as_ref());
        set(&mut clinician.last_name, self.last_name.as_ref());
        set(&mut clinician.title, self.title.as_ref());
        set(&mut clinician.speciality, self.speciality.as_ref());
        set(&mut clinician.phone_number, self.phone_number.as_ref());
        set(&mut clinician.email, self.email.as_ref());
        set(&mut clinician.workplace_id, self.workplace_id.as_ref());
        set(&mut clinician.workplace_type, self.workplace_type.as_ref());
        set(&mut clinician.employment_status, self.employment_status.as_ref());
    }
}

pub struct ClinicianUpdateBuilder(ClinicianUpdate);

impl ClinicianUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ClinicianUpdate::default())
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
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn speciality(mut self, speciality: impl Into<String>) -> Self {
        self.0.speciality = Some(speciality.into());
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
    pub fn workplace_id(mut self, workplace_id: Option<String>) -> Self {
        self.0.workplace_id = Some(workplace_id);
        self
    }

    #[must_use]
    pub fn workplace_type(mut self, workplace_type: impl Into<String>) -> Self {
        self.0.workplace_type = Some(workplace_type.into());
        self
    }

    #[must_use]
    pub fn employment_status(mut self, employment_status: impl Into<String>) -> Self {
        self.0.employment_status = Some(employment_status.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ClinicianUpdate {
        self.0
    }
}

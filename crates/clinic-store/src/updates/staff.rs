//! Staff update builder.

use serde::Serialize;

use clinic_core::entities::Staff;

use super::set;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,
}

impl StaffUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.facility_id.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.employment_status.is_none()
            && self.line_manager.is_none()
            && self.access_level.is_none()
    }

    pub fn apply(&self, staff: &mut Staff) {
        set(&mut staff.first_name, self.first_name.as_ref());
        set(&mut staff.last_name, self.last_name.as_ref());
        set(&mut staff.role, self.role.as_ref());
        set(&mut staff.department, self.department.as_ref());
        set(&mut staff.facility_id, self.facility_id.as_ref());
        set(&mut staff.phone_number, self.phone_number.as_ref());
        set(&mut staff.email, self.email.as_ref());
        set(&mut staff.employment_status, self.employment_status.as_ref());
        set(&mut staff.line_manager, self.line_manager.as_ref());
        set(&mut staff.access_level, self.access_level.as_ref());
    }
}

pub struct StaffUpdateBuilder(StaffUpdate);

impl StaffUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(StaffUpdate::default())
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
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.0.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.0.department = Some(department.into());
        self
    }

    #[must_use]
    pub fn facility_id(mut self, facility_id: Option<String>) -> Self {
        self.0.facility_id = Some(facility_id);
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
    pub fn employment_status(mut self, employment_status: impl Into<String>) -> Self {
        self.0.employment_status = Some(employment_status.into());
        self
    }

    #[must_use]
    pub fn line_manager(mut self, line_manager: impl Into<String>) -> Self {
        self.0.line_manager = Some(line_manager.into());
        self
    }

    #[must_use]
    pub fn access_level(mut self, access_level: impl Into<String>) -> Self {
        self.0.access_level = Some(access_level.into());
        self
    }

    #[must_use]
    pub fn build(self) -> StaffUpdate {
        self.0
    }
}

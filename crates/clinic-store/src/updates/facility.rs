//! Facility update builder.
//!
//! `facility_type` is not updatable: the ID prefix is derived from it.

use serde::Serialize;

use clinic_core::entities::Facility;

use super::set;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FacilityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialities_offered: Option<String>,
}

impl FacilityUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.facility_name.is_none()
            && self.address.is_none()
            && self.postcode.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.opening_hours.is_none()
            && self.manager_name.is_none()
            && self.capacity.is_none()
            && self.specialities_offered.is_none()
    }

    pub fn apply(&self, facility: &mut Facility) {
        set(&mut facility.facility_name, self.facility_name.as_ref());
        set(&mut facility.address, self.address.as_ref());
        set(&mut facility.postcode, self.postcode.as_ref());
        set(&mut facility.phone_number, self.phone_number.as_ref());
        set(&mut facility.email, self.email.as_ref());
        set(&mut facility.opening_hours, self.opening_hours.as_ref());
        set(&mut facility.manager_name, self.manager_name.as_ref());
        set(&mut facility.capacity, self.capacity.as_ref());
        set(&mut facility.specialities_offered, self.specialities_offered.as_ref());
    }
}

pub struct FacilityUpdateBuilder(FacilityUpdate);

impl FacilityUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FacilityUpdate::default())
    }

    #[must_use]
    pub fn facility_name(mut self, name: impl Into<String>) -> Self {
        self.0.facility_name = Some(name.into());
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
    pub fn opening_hours(mut self, hours: impl Into<String>) -> Self {
        self.0.opening_hours = Some(hours.into());
        self
    }

    #[must_use]
    pub fn manager_name(mut self, manager: impl Into<String>) -> Self {
        self.0.manager_name = Some(manager.into());
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: Option<u32>) -> Self {
        self.0.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn specialities_offered(mut self, specialities: impl Into<String>) -> Self {
        self.0.specialities_offered = Some(specialities.into());
        self
    }

    #[must_use]
    pub fn build(self) -> FacilityUpdate {
        self.0
    }
}

//! Prescription update builder.

use chrono::NaiveDate;
use serde::Serialize;

use clinic_core::entities::Prescription;
use clinic_core::enums::PrescriptionStatus;

use super::set;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PrescriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PrescriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<Option<NaiveDate>>,
}

impl PrescriptionUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dosage.is_none()
            && self.frequency.is_none()
            && self.duration_days.is_none()
            && self.quantity.is_none()
            && self.instructions.is_none()
            && self.pharmacy_name.is_none()
            && self.status.is_none()
            && self.collection_date.is_none()
    }

    pub fn apply(&self, prescription: &mut Prescription) {
        set(&mut prescription.dosage, self.dosage.as_ref());
        set(&mut prescription.frequency, self.frequency.as_ref());
        set(&mut prescription.duration_days, self.duration_days.as_ref());
        set(&mut prescription.quantity, self.quantity.as_ref());
        set(&mut prescription.instructions, self.instructions.as_ref());
        set(&mut prescription.pharmacy_name, self.pharmacy_name.as_ref());
        set(&mut prescription.status, self.status.as_ref());
        set(&mut prescription.collection_date, self.collection_date.as_ref());
    }
}

pub struct PrescriptionUpdateBuilder(PrescriptionUpdate);

impl PrescriptionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PrescriptionUpdate::default())
    }

    #[must_use]
    pub fn dosage(mut self, dosage: impl Into<String>) -> Self {
        self.0.dosage = Some(dosage.into());
        self
    }

    #[must_use]
    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.0.frequency = Some(frequency.into());
        self
    }

    #[must_use]
    pub fn duration_days(mut self, days: Option<u32>) -> Self {
        self.0.duration_days = Some(days);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.0.quantity = Some(quantity.into());
        self
    }

    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.0.instructions = Some(instructions.into());
        self
    }

    #[must_use]
    pub fn pharmacy_name(mut self, pharmacy_name: impl Into<String>) -> Self {
        self.0.pharmacy_name = Some(pharmacy_name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: PrescriptionStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn collection_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.collection_date = Some(date);
        self
    }

    #[must_use]
    pub fn build(self) -> PrescriptionUpdate {
        self.0
    }
}

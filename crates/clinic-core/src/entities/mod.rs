//! Record structs for every clinicdesk entity.
//!
//! Each struct maps to one CSV file; field order is column order.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for CSV/JSON
//! roundtrip and schema output.

mod appointment;
mod clinician;
mod facility;
mod patient;
mod prescription;
mod referral;
mod staff;

pub use appointment::Appointment;
pub use clinician::Clinician;
pub use facility::Facility;
pub use patient::Patient;
pub use prescription::Prescription;
pub use referral::Referral;
pub use staff::Staff;

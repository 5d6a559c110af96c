mod appointment;
mod clinician;
mod facility;
mod patient;
mod prescription;
mod referral;
mod staff;

pub use appointment::{
    AppointmentCommands, AppointmentCreateArgs, AppointmentFields, AppointmentListArgs,
};
pub use clinician::{ClinicianCommands, ClinicianCreateArgs, ClinicianFields, ClinicianListArgs};
pub use facility::{FacilityCommands, FacilityCreateArgs, FacilityFields, FacilityListArgs};
pub use patient::{PatientCommands, PatientCreateArgs, PatientFields, PatientListArgs};
pub use prescription::{
    PrescriptionCommands, PrescriptionCreateArgs, PrescriptionFields, PrescriptionListArgs,
};
pub use referral::{ReferralCommands, ReferralCreateArgs, ReferralFields, ReferralListArgs};
pub use staff::{StaffCommands, StaffCreateArgs, StaffFields, StaffListArgs};

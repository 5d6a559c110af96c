pub mod appointment;
pub mod audit;
pub mod auth;
pub mod clinician;
pub mod dashboard;
pub mod dispatch;
pub mod facility;
pub mod init;
pub mod patient;
pub mod prescription;
pub mod referral;
pub mod schema;
pub mod shared;
pub mod staff;

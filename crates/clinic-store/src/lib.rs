//! # clinic-store
//!
//! CSV-backed persistence for clinicdesk.
//!
//! Each record type lives in its own CSV file with a header row. A
//! `CsvRepository` keeps one file's records in memory and writes every
//! change straight back; `ClinicStore` owns all seven repositories plus the
//! JSONL audit trail and carries the record operations (create, get, list,
//! update, delete, status transitions, purge).
//!
//! Referential integrity is advisory: dangling IDs are logged with
//! `tracing::warn!` and otherwise accepted.

pub mod audit;
pub mod csv_file;
pub mod error;
pub mod letters;
pub mod record;
pub mod repos;
pub mod repository;
pub mod seed;
pub mod service;
pub mod updates;

mod test_support;

pub use error::StoreError;
pub use repository::CsvRepository;
pub use service::{ClinicStore, StorePaths};

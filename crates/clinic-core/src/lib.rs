//! # clinic-core
//!
//! Core types and ID generation for clinicdesk.
//!
//! This crate provides the foundational types shared across all clinicdesk crates:
//! - Record structs for every CSV-backed entity (patients, clinicians, staff, ...)
//! - Roles, dashboard panels, access levels and status enums with transitions
//! - ID prefix constants and sequential ID generation
//! - Audit operation envelope for JSONL persistence
//! - CLI response types

pub mod audit;
pub mod entities;
pub mod enums;
pub mod ids;
pub mod responses;
pub mod time_format;

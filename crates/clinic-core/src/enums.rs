//! Roles, panels, entity types, statuses and audit operations for clinicdesk.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Who is logged in. Gates which dashboard panels are visible and writable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Gp,
    Nurse,
    Admin,
    Receptionist,
    Patient,
    Developer,
}

impl Role {
    pub const ALL: [Self; 6] = [
        Self::Gp,
        Self::Nurse,
        Self::Admin,
        Self::Receptionist,
        Self::Patient,
        Self::Developer,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gp => "gp",
            Self::Nurse => "nurse",
            Self::Admin => "admin",
            Self::Receptionist => "receptionist",
            Self::Patient => "patient",
            Self::Developer => "developer",
        }
    }

    /// Human-facing role name, as shown on the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gp => "GP",
            Self::Nurse => "Nurse",
            Self::Admin => "Admin",
            Self::Receptionist => "Receptionist",
            Self::Patient => "Patient",
            Self::Developer => "Developer",
        }
    }

    /// Parse a free-form role string as found in staff records or typed at login.
    ///
    /// Case-insensitive; spaces and hyphens are treated as underscores.
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "gp" | "doctor" | "general_practitioner" => Some(Self::Gp),
            "nurse" | "practice_nurse" | "nurse_practitioner" => Some(Self::Nurse),
            "admin" | "administrator" | "practice_manager" => Some(Self::Admin),
            "receptionist" | "reception" => Some(Self::Receptionist),
            "patient" => Some(Self::Patient),
            "developer" | "dev" => Some(Self::Developer),
            _ => None,
        }
    }

    /// Whether this role is a clinician role.
    #[must_use]
    pub const fn is_clinical(self) -> bool {
        matches!(self, Self::Gp | Self::Nurse)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// A dashboard tab. One per record type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Patients,
    Clinicians,
    Staff,
    Appointments,
    Prescriptions,
    Referrals,
    Facilities,
}

impl Panel {
    /// Fixed tab order of the dashboard.
    pub const ALL: [Self; 7] = [
        Self::Patients,
        Self::Clinicians,
        Self::Staff,
        Self::Appointments,
        Self::Prescriptions,
        Self::Referrals,
        Self::Facilities,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patients => "patients",
            Self::Clinicians => "clinicians",
            Self::Staff => "staff",
            Self::Appointments => "appointments",
            Self::Prescriptions => "prescriptions",
            Self::Referrals => "referrals",
            Self::Facilities => "facilities",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Patients => "Patients",
            Self::Clinicians => "Clinicians",
            Self::Staff => "Staff",
            Self::Appointments => "Appointments",
            Self::Prescriptions => "Prescriptions",
            Self::Referrals => "Referrals",
            Self::Facilities => "Facilities",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// Access level a role has on a panel. Ordered: `Hidden < Read < Write`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Hidden,
    Read,
    Write,
}

impl Access {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Read => "read",
            Self::Write => "write",
        }
    }

    /// Whether this level satisfies `needed`.
    #[must_use]
    pub fn allows(self, needed: Self) -> bool {
        self >= needed
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Record type. One repository and one CSV file per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Patient,
    Clinician,
    Staff,
    Appointment,
    Prescription,
    Referral,
    Facility,
}

impl EntityType {
    pub const ALL: [Self; 7] = [
        Self::Patient,
        Self::Clinician,
        Self::Staff,
        Self::Appointment,
        Self::Prescription,
        Self::Referral,
        Self::Facility,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Clinician => "clinician",
            Self::Staff => "staff",
            Self::Appointment => "appointment",
            Self::Prescription => "prescription",
            Self::Referral => "referral",
            Self::Facility => "facility",
        }
    }

    /// Default ID prefix. Facilities pick theirs from [`FacilityType::id_prefix`].
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Patient => ids::PREFIX_PATIENT,
            Self::Clinician => ids::PREFIX_CLINICIAN,
            Self::Staff => ids::PREFIX_STAFF,
            Self::Appointment => ids::PREFIX_APPOINTMENT,
            Self::Prescription => ids::PREFIX_PRESCRIPTION,
            Self::Referral => ids::PREFIX_REFERRAL,
            Self::Facility => ids::PREFIX_FACILITY,
        }
    }

    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Patient => "patients.csv",
            Self::Clinician => "clinicians.csv",
            Self::Staff => "staff.csv",
            Self::Appointment => "appointments.csv",
            Self::Prescription => "prescriptions.csv",
            Self::Referral => "referrals.csv",
            Self::Facility => "facilities.csv",
        }
    }

    /// The dashboard panel that manages this record type.
    #[must_use]
    pub const fn panel(self) -> Panel {
        match self {
            Self::Patient => Panel::Patients,
            Self::Clinician => Panel::Clinicians,
            Self::Staff => Panel::Staff,
            Self::Appointment => Panel::Appointments,
            Self::Prescription => Panel::Prescriptions,
            Self::Referral => Panel::Referrals,
            Self::Facility => Panel::Facilities,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AppointmentStatus
// ---------------------------------------------------------------------------

/// Status of an appointment.
///
/// ```text
/// scheduled → completed
///           → cancelled
///           → no_show
///           → rescheduled → scheduled
///                         → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
    Rescheduled,
}

impl AppointmentStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Scheduled => &[
                Self::Completed,
                Self::Cancelled,
                Self::NoShow,
                Self::Rescheduled,
            ],
            Self::Rescheduled => &[Self::Scheduled, Self::Cancelled],
            Self::Completed | Self::Cancelled | Self::NoShow => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
            Self::Rescheduled => "rescheduled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PrescriptionStatus
// ---------------------------------------------------------------------------

/// Status of a prescription.
///
/// ```text
/// issued → collected
///        → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Issued,
    Collected,
    Cancelled,
}

impl PrescriptionStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Issued => &[Self::Collected, Self::Cancelled],
            Self::Collected | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issued => "issued",
            Self::Collected => "collected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReferralStatus
// ---------------------------------------------------------------------------

/// Status of a referral through its lifecycle.
///
/// ```text
/// new → sent → received → accepted → completed
///                       → rejected
/// new, sent → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    New,
    Sent,
    Received,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl ReferralStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::New => &[Self::Sent, Self::Cancelled],
            Self::Sent => &[Self::Received, Self::Cancelled],
            Self::Received => &[Self::Accepted, Self::Rejected],
            Self::Accepted => &[Self::Completed],
            Self::Rejected | Self::Completed | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the referral is still being worked on.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::New | Self::Sent | Self::Received | Self::Accepted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Sent => "sent",
            Self::Received => "received",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UrgencyLevel
// ---------------------------------------------------------------------------

/// Clinical urgency of a referral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Routine,
    Urgent,
    Emergency,
}

impl UrgencyLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FacilityType
// ---------------------------------------------------------------------------

/// Type of a care facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    GpSurgery,
    Hospital,
    Clinic,
    Pharmacy,
}

impl FacilityType {
    /// ID prefix for new facilities of this type.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::GpSurgery => ids::PREFIX_SURGERY,
            Self::Hospital => ids::PREFIX_HOSPITAL,
            Self::Clinic | Self::Pharmacy => ids::PREFIX_FACILITY,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GpSurgery => "gp_surgery",
            Self::Hospital => "hospital",
            Self::Clinic => "clinic",
            Self::Pharmacy => "pharmacy",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditOp
// ---------------------------------------------------------------------------

/// Kind of mutation recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditOp {
    Create,
    Update,
    Delete,
    Purge,
    Transition,
}

impl AuditOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Purge => "purge",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for AuditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("GP", Role::Gp)]
    #[case("gp", Role::Gp)]
    #[case("Doctor", Role::Gp)]
    #[case("Admin", Role::Admin)]
    #[case("Practice Manager", Role::Admin)]
    #[case(" Receptionist ", Role::Receptionist)]
    #[case("Patient", Role::Patient)]
    #[case("Developer", Role::Developer)]
    #[case("practice-nurse", Role::Nurse)]
    fn role_parses_source_labels(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::parse_label(raw), Some(expected));
    }

    #[test]
    fn role_rejects_unknown_label() {
        assert_eq!(Role::parse_label("janitor"), None);
        assert_eq!(Role::parse_label(""), None);
    }

    #[test]
    fn role_label_roundtrips_through_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse_label(role.label()), Some(role));
        }
    }

    #[test]
    fn access_is_ordered() {
        assert!(Access::Write.allows(Access::Read));
        assert!(Access::Read.allows(Access::Read));
        assert!(!Access::Read.allows(Access::Write));
        assert!(!Access::Hidden.allows(Access::Read));
    }

    #[test]
    fn appointment_transitions() {
        let s = AppointmentStatus::Scheduled;
        assert!(s.can_transition_to(AppointmentStatus::Completed));
        assert!(s.can_transition_to(AppointmentStatus::Rescheduled));
        assert!(AppointmentStatus::Rescheduled.can_transition_to(AppointmentStatus::Scheduled));
        assert!(!AppointmentStatus::Completed.can_transition_to(AppointmentStatus::Scheduled));
        assert!(!AppointmentStatus::Cancelled.can_transition_to(AppointmentStatus::Completed));
    }

    #[test]
    fn referral_lifecycle_is_linear_until_decision() {
        use ReferralStatus::*;
        assert!(New.can_transition_to(Sent));
        assert!(!New.can_transition_to(Received));
        assert!(Received.can_transition_to(Rejected));
        assert!(Accepted.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(New));
        assert!(Accepted.is_open());
        assert!(!Rejected.is_open());
    }

    #[test]
    fn prescription_terminal_states() {
        assert!(PrescriptionStatus::Issued.can_transition_to(PrescriptionStatus::Collected));
        assert!(PrescriptionStatus::Collected.allowed_next_states().is_empty());
        assert!(PrescriptionStatus::Cancelled.allowed_next_states().is_empty());
    }

    #[test]
    fn entity_type_metadata() {
        assert_eq!(EntityType::Prescription.id_prefix(), "RX");
        assert_eq!(EntityType::Staff.default_file_name(), "staff.csv");
        assert_eq!(EntityType::Referral.panel(), Panel::Referrals);
        for entity in EntityType::ALL {
            assert!(ids::ALL_PREFIXES.contains(&entity.id_prefix()));
        }
    }

    #[test]
    fn facility_prefix_by_type() {
        assert_eq!(FacilityType::GpSurgery.id_prefix(), "S");
        assert_eq!(FacilityType::Hospital.id_prefix(), "H");
        assert_eq!(FacilityType::Pharmacy.id_prefix(), "F");
    }

    #[test]
    fn snake_case_serialization() {
        let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(json, "\"no_show\"");
        let json = serde_json::to_string(&FacilityType::GpSurgery).unwrap();
        assert_eq!(json, "\"gp_surgery\"");
        let role: Role = serde_json::from_str("\"receptionist\"").unwrap();
        assert_eq!(role, Role::Receptionist);
    }
}

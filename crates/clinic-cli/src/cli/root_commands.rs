use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AppointmentCommands, ClinicianCommands, FacilityCommands, PatientCommands,
    PrescriptionCommands, ReferralCommands, StaffCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the data directory and empty record files.
    Init(InitArgs),
    /// Log in with a patient, clinician or staff ID, or a role name.
    Login(LoginArgs),
    /// Forget the stored login.
    Logout,
    /// Show the current identity.
    Whoami,
    /// Panels visible to the current identity.
    Dashboard(DashboardArgs),
    /// Patients.
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },
    /// Clinicians (GPs, nurses, consultants).
    Clinician {
        #[command(subcommand)]
        action: ClinicianCommands,
    },
    /// Non-clinical staff.
    Staff {
        #[command(subcommand)]
        action: StaffCommands,
    },
    /// Appointments.
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommands,
    },
    /// Prescriptions.
    Prescription {
        #[command(subcommand)]
        action: PrescriptionCommands,
    },
    /// Referrals.
    Referral {
        #[command(subcommand)]
        action: ReferralCommands,
    },
    /// Surgeries, hospitals, clinics and pharmacies.
    Facility {
        #[command(subcommand)]
        action: FacilityCommands,
    },
    /// View the audit trail.
    Audit(AuditArgs),
    /// Dump the JSON schema of a record type.
    Schema(SchemaArgs),
}

impl Commands {
    /// The top-level command word as typed, e.g. `appointment`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Login(_) => "login",
            Self::Logout => "logout",
            Self::Whoami => "whoami",
            Self::Dashboard(_) => "dashboard",
            Self::Patient { .. } => "patient",
            Self::Clinician { .. } => "clinician",
            Self::Staff { .. } => "staff",
            Self::Appointment { .. } => "appointment",
            Self::Prescription { .. } => "prescription",
            Self::Referral { .. } => "referral",
            Self::Facility { .. } => "facility",
            Self::Audit(_) => "audit",
            Self::Schema(_) => "schema",
        }
    }
}

/// Arguments for `clinic init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Seed a small demo clinic.
    #[arg(long)]
    pub demo: bool,
    /// Do not write `.clinic/config.toml`.
    #[arg(long)]
    pub no_config: bool,
}

/// Arguments for `clinic login`.
#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    pub identifier: String,
}

/// Arguments for `clinic dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Open this panel instead of the default one.
    #[arg(long)]
    pub open: Option<String>,
}

/// Arguments for `clinic audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub entity: Option<String>,
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub actor: Option<String>,
    #[arg(long)]
    pub op: Option<String>,
}

/// Arguments for `clinic schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}

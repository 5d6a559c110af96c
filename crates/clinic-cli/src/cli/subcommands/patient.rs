use clap::{Args, Subcommand};

/// Editable patient columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct PatientFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// Date of birth, YYYY-MM-DD. An empty value clears it.
    #[arg(long)]
    pub dob: Option<String>,
    #[arg(long)]
    pub nhs_number: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub postcode: Option<String>,
    #[arg(long)]
    pub emergency_contact_name: Option<String>,
    #[arg(long)]
    pub emergency_contact_phone: Option<String>,
    /// Registered GP surgery ID. An empty value clears it.
    #[arg(long)]
    pub surgery: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PatientCreateArgs {
    /// Explicit patient ID (default: next free P-number).
    #[arg(long)]
    pub id: Option<String>,
    /// Registration date, YYYY-MM-DD (default: today).
    #[arg(long)]
    pub registered: Option<String>,
    #[command(flatten)]
    pub fields: PatientFields,
}

#[derive(Clone, Debug, Args)]
pub struct PatientListArgs {
    /// Match against name, NHS number, postcode, phone or email.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub surgery: Option<String>,
}

/// Patient commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PatientCommands {
    /// Register a patient.
    Create(PatientCreateArgs),
    /// Get a patient by ID.
    Get { id: String },
    /// List patients.
    List(PatientListArgs),
    /// Update a patient.
    Update {
        id: String,
        #[command(flatten)]
        fields: PatientFields,
    },
    /// Delete a patient.
    Delete {
        id: String,
        /// Also remove the patient's appointments, prescriptions and referrals.
        #[arg(long)]
        purge_related: bool,
    },
    /// A patient with all their appointments, prescriptions and referrals.
    Record { id: String },
    /// Remove a patient's appointments, prescriptions and referrals.
    Purge { id: String },
}

use clap::{Args, Subcommand};

/// Editable clinician columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct ClinicianFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// "Dr", "Nurse", ...
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub speciality: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Facility ID of the clinician's workplace. An empty value clears it.
    #[arg(long)]
    pub workplace: Option<String>,
    #[arg(long)]
    pub workplace_type: Option<String>,
    #[arg(long)]
    pub employment_status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ClinicianCreateArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub gmc_number: Option<String>,
    /// Start date, YYYY-MM-DD (default: today).
    #[arg(long)]
    pub started: Option<String>,
    #[command(flatten)]
    pub fields: ClinicianFields,
}

#[derive(Clone, Debug, Args)]
pub struct ClinicianListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub speciality: Option<String>,
    #[arg(long)]
    pub workplace: Option<String>,
    /// Only nursing staff.
    #[arg(long)]
    pub nurses: bool,
}

/// Clinician commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClinicianCommands {
    /// Add a clinician.
    Create(ClinicianCreateArgs),
    /// Get a clinician by ID.
    Get { id: String },
    /// List clinicians.
    List(ClinicianListArgs),
    /// Update a clinician.
    Update {
        id: String,
        #[command(flatten)]
        fields: ClinicianFields,
    },
    /// Delete a clinician.
    Delete { id: String },
}

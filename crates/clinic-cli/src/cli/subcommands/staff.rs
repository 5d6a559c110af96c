use clap::{Args, Subcommand};

/// Editable staff columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct StaffFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// Job role, e.g. "Receptionist" or "Practice Manager". Decides the
    /// login role.
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    /// Facility ID. An empty value clears it.
    #[arg(long)]
    pub facility: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub employment_status: Option<String>,
    #[arg(long)]
    pub line_manager: Option<String>,
    #[arg(long)]
    pub access_level: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct StaffCreateArgs {
    #[arg(long)]
    pub id: Option<String>,
    /// Start date, YYYY-MM-DD (default: today).
    #[arg(long)]
    pub started: Option<String>,
    #[command(flatten)]
    pub fields: StaffFields,
}

#[derive(Clone, Debug, Args)]
pub struct StaffListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub facility: Option<String>,
}

/// Staff commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StaffCommands {
    /// Add a staff member.
    Create(StaffCreateArgs),
    /// Get a staff member by ID.
    Get { id: String },
    /// List staff.
    List(StaffListArgs),
    /// Update a staff member.
    Update {
        id: String,
        #[command(flatten)]
        fields: StaffFields,
    },
    /// Delete a staff member.
    Delete { id: String },
}

use clap::{Args, Subcommand};

/// Editable prescription columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct PrescriptionFields {
    #[arg(long)]
    pub dosage: Option<String>,
    #[arg(long)]
    pub frequency: Option<String>,
    /// Course length in days.
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(long)]
    pub quantity: Option<String>,
    #[arg(long)]
    pub instructions: Option<String>,
    #[arg(long)]
    pub pharmacy: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PrescriptionCreateArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub patient: String,
    /// Prescribing clinician (default: the logged-in clinician).
    #[arg(long)]
    pub clinician: Option<String>,
    #[arg(long)]
    pub medication: String,
    /// Appointment this was issued at.
    #[arg(long)]
    pub appointment: Option<String>,
    /// YYYY-MM-DD (default: today).
    #[arg(long)]
    pub date: Option<String>,
    #[command(flatten)]
    pub fields: PrescriptionFields,
}

#[derive(Clone, Debug, Args)]
pub struct PrescriptionListArgs {
    #[arg(long)]
    pub patient: Option<String>,
    #[arg(long)]
    pub clinician: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub medication: Option<String>,
}

/// Prescription commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PrescriptionCommands {
    /// Issue a prescription.
    Create(PrescriptionCreateArgs),
    /// Get a prescription by ID.
    Get { id: String },
    /// List prescriptions, newest first.
    List(PrescriptionListArgs),
    /// Update a prescription.
    Update {
        id: String,
        #[command(flatten)]
        fields: PrescriptionFields,
        #[arg(long)]
        status: Option<String>,
    },
    /// Mark a prescription collected today.
    Collect { id: String },
    /// Delete a prescription.
    Delete { id: String },
}

use clap::{Args, Subcommand};

/// Editable appointment columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct AppointmentFields {
    #[arg(long)]
    pub clinician: Option<String>,
    #[arg(long)]
    pub facility: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// HH:MM
    #[arg(long)]
    pub time: Option<String>,
    /// Length in minutes (default on create: 15).
    #[arg(long)]
    pub duration: Option<u32>,
    /// e.g. "Routine Consultation", "Telephone".
    #[arg(long = "type")]
    pub appointment_type: Option<String>,
    #[arg(long)]
    pub reason: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AppointmentCreateArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub patient: String,
    #[command(flatten)]
    pub fields: AppointmentFields,
}

#[derive(Clone, Debug, Args)]
pub struct AppointmentListArgs {
    #[arg(long)]
    pub patient: Option<String>,
    #[arg(long)]
    pub clinician: Option<String>,
    #[arg(long)]
    pub facility: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// First day, YYYY-MM-DD (inclusive).
    #[arg(long)]
    pub from: Option<String>,
    /// Last day, YYYY-MM-DD (inclusive).
    #[arg(long)]
    pub to: Option<String>,
    /// Only today's appointments.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub today: bool,
}

/// Appointment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AppointmentCommands {
    /// Book an appointment.
    Create(AppointmentCreateArgs),
    /// Get an appointment with its patient, clinician and facility.
    Get { id: String },
    /// List appointments in slot order.
    List(AppointmentListArgs),
    /// Update an appointment.
    Update {
        id: String,
        #[command(flatten)]
        fields: AppointmentFields,
        #[arg(long)]
        status: Option<String>,
    },
    /// Cancel an appointment.
    Cancel { id: String },
    /// Mark an appointment completed.
    Complete { id: String },
    /// Delete an appointment.
    Delete { id: String },
}

use clap::{Args, Subcommand};

/// Editable referral columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct ReferralFields {
    /// Receiving clinician. An empty value clears it.
    #[arg(long)]
    pub to_clinician: Option<String>,
    /// Receiving facility.
    #[arg(long)]
    pub to_facility: Option<String>,
    /// routine, urgent or emergency.
    #[arg(long)]
    pub urgency: Option<String>,
    #[arg(long)]
    pub reason: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long)]
    pub investigations: Option<String>,
    /// Linked appointment. An empty value clears it.
    #[arg(long)]
    pub appointment: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ReferralCreateArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub patient: String,
    /// Referring clinician (default: the logged-in clinician).
    #[arg(long)]
    pub from_clinician: Option<String>,
    /// Referring facility (default: the referring clinician's workplace).
    #[arg(long)]
    pub from_facility: Option<String>,
    /// YYYY-MM-DD (default: today).
    #[arg(long)]
    pub date: Option<String>,
    #[command(flatten)]
    pub fields: ReferralFields,
}

#[derive(Clone, Debug, Args)]
pub struct ReferralListArgs {
    #[arg(long)]
    pub patient: Option<String>,
    /// Referring or receiving clinician.
    #[arg(long)]
    pub clinician: Option<String>,
    /// Referring or receiving facility.
    #[arg(long)]
    pub facility: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub urgency: Option<String>,
    /// Only referrals still in progress.
    #[arg(long)]
    pub open: bool,
}

/// Referral commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReferralCommands {
    /// Refer a patient.
    Create(ReferralCreateArgs),
    /// Get a referral by ID.
    Get { id: String },
    /// List referrals, newest first.
    List(ReferralListArgs),
    /// Update a referral.
    Update {
        id: String,
        #[command(flatten)]
        fields: ReferralFields,
    },
    /// Move a referral to its next status.
    Advance { id: String, status: String },
    /// Render the referral letter.
    Letter {
        id: String,
        /// Print the letter instead of writing it to the letters directory.
        #[arg(long)]
        stdout: bool,
    },
    /// Delete a referral.
    Delete { id: String },
}

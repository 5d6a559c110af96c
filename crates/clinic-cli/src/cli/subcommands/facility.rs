use clap::{Args, Subcommand};

/// Editable facility columns, shared by `create` and `update`.
#[derive(Clone, Debug, Default, Args)]
pub struct FacilityFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub postcode: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub opening_hours: Option<String>,
    #[arg(long)]
    pub manager: Option<String>,
    #[arg(long)]
    pub capacity: Option<u32>,
    /// `|`-separated, e.g. "General Practice|Minor Surgery".
    #[arg(long)]
    pub specialities: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FacilityCreateArgs {
    #[arg(long)]
    pub id: Option<String>,
    /// gp_surgery, hospital, clinic or pharmacy. Decides the ID prefix.
    #[arg(long = "type")]
    pub facility_type: String,
    #[command(flatten)]
    pub fields: FacilityFields,
}

#[derive(Clone, Debug, Args)]
pub struct FacilityListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long = "type")]
    pub facility_type: Option<String>,
}

/// Facility commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FacilityCommands {
    /// Add a facility.
    Create(FacilityCreateArgs),
    /// Get a facility by ID.
    Get { id: String },
    /// List facilities.
    List(FacilityListArgs),
    /// Update a facility. The type cannot change.
    Update {
        id: String,
        #[command(flatten)]
        fields: FacilityFields,
    },
    /// Delete a facility.
    Delete { id: String },
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::auth::login::handle(&args, ctx, flags),
        Commands::Logout => commands::auth::logout::handle(ctx, flags),
        Commands::Whoami => commands::auth::whoami::handle(ctx, flags),
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags),
        Commands::Patient { action } => commands::patient::handle(&action, ctx, flags),
        Commands::Clinician { action } => commands::clinician::handle(&action, ctx, flags),
        Commands::Staff { action } => commands::staff::handle(&action, ctx, flags),
        Commands::Appointment { action } => commands::appointment::handle(&action, ctx, flags),
        Commands::Prescription { action } => commands::prescription::handle(&action, ctx, flags),
        Commands::Referral { action } => commands::referral::handle(&action, ctx, flags),
        Commands::Facility { action } => commands::facility::handle(&action, ctx, flags),
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags),
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}

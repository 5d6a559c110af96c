#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;
mod write_lock;

fn main() {
    if let Err(error) = run() {
        eprintln!("clinic error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags)?;

    if let cli::Commands::Init(args) = &cli.command {
        let _write_lock = write_lock::acquire(&config.storage.lock_path(), cli.command.name())?;
        return commands::init::handle(args, &config, &flags);
    }

    let command = cli.command;
    let write_lock = if command_requires_write_lock(&command) {
        Some(write_lock::acquire(
            &config.storage.lock_path(),
            command.name(),
        )?)
    } else {
        None
    };

    let mut ctx = context::AppContext::init(config, flags.as_identifier.as_deref())
        .context("failed to open the clinic data directory")?;

    let result = commands::dispatch::dispatch(command, &mut ctx, &flags);
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CLINIC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn command_requires_write_lock(command: &cli::Commands) -> bool {
    use crate::cli::subcommands::{
        AppointmentCommands, ClinicianCommands, FacilityCommands, PatientCommands,
        PrescriptionCommands, ReferralCommands, StaffCommands,
    };

    match command {
        cli::Commands::Patient { action } => !matches!(
            action,
            PatientCommands::Get { .. } | PatientCommands::List(_) | PatientCommands::Record { .. }
        ),
        cli::Commands::Clinician { action } => !matches!(
            action,
            ClinicianCommands::Get { .. } | ClinicianCommands::List(_)
        ),
        cli::Commands::Staff { action } => {
            !matches!(action, StaffCommands::Get { .. } | StaffCommands::List(_))
        }
        cli::Commands::Appointment { action } => !matches!(
            action,
            AppointmentCommands::Get { .. } | AppointmentCommands::List(_)
        ),
        cli::Commands::Prescription { action } => !matches!(
            action,
            PrescriptionCommands::Get { .. } | PrescriptionCommands::List(_)
        ),
        cli::Commands::Referral { action } => !matches!(
            action,
            ReferralCommands::Get { .. } | ReferralCommands::List(_)
        ),
        cli::Commands::Facility { action } => !matches!(
            action,
            FacilityCommands::Get { .. } | FacilityCommands::List(_)
        ),
        cli::Commands::Init(_) | cli::Commands::Login(_) | cli::Commands::Logout => true,
        cli::Commands::Whoami
        | cli::Commands::Dashboard(_)
        | cli::Commands::Audit(_)
        | cli::Commands::Schema(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::command_requires_write_lock;
    use crate::cli::Cli;

    fn needs_lock(args: &[&str]) -> bool {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        command_requires_write_lock(&cli.command)
    }

    #[test]
    fn reads_run_without_lock() {
        assert!(!needs_lock(&["clinic", "patient", "list"]));
        assert!(!needs_lock(&["clinic", "patient", "record", "P001"]));
        assert!(!needs_lock(&["clinic", "appointment", "get", "A001"]));
        assert!(!needs_lock(&["clinic", "audit"]));
        assert!(!needs_lock(&["clinic", "whoami"]));
    }

    #[test]
    fn mutations_take_lock() {
        assert!(needs_lock(&["clinic", "patient", "purge", "P001"]));
        assert!(needs_lock(&["clinic", "appointment", "cancel", "A001"]));
        assert!(needs_lock(&["clinic", "referral", "letter", "R001"]));
        assert!(needs_lock(&["clinic", "login", "ST001"]));
        assert!(needs_lock(&["clinic", "init", "--demo"]));
    }

    #[test]
    fn lock_owner_is_the_command_word() {
        let cli = Cli::try_parse_from(["clinic", "referral", "letter", "R001"]).unwrap();
        assert_eq!(cli.command.name(), "referral");
    }
}

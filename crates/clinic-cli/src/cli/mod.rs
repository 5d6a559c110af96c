use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `clinic` binary.
#[derive(Debug, Parser)]
#[command(name = "clinic", version, about = "clinicdesk - patient records for a single clinic")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory holding the CSV files (overrides storage.data_dir)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Run this one command as the given identifier without logging in
    #[arg(long = "as", global = true, value_name = "IDENTIFIER")]
    pub as_identifier: Option<String>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
            as_identifier: self.as_identifier.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AppointmentCommands, PatientCommands, ReferralCommands};
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "clinic",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "whoami",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["clinic", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["clinic", "--format", "xml", "whoami"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "clinic",
            "--data-dir",
            "/tmp/clinic",
            "--as",
            "ST001",
            "--color",
            "never",
            "whoami",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(std::path::Path::new("/tmp/clinic")));
        assert_eq!(flags.as_identifier.as_deref(), Some("ST001"));
        assert_eq!(flags.color, ColorMode::Never);
    }

    #[test]
    fn entity_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "clinic",
            "appointment",
            "create",
            "--patient",
            "P001",
            "--clinician",
            "C001",
            "--facility",
            "S001",
            "--date",
            "2025-10-01",
            "--time",
            "09:30",
        ])
        .expect("cli should parse");
        let Commands::Appointment {
            action: AppointmentCommands::Create(args),
        } = cli.command
        else {
            panic!("expected appointment create");
        };
        assert_eq!(args.patient, "P001");
        assert_eq!(args.fields.time.as_deref(), Some("09:30"));

        let cli = Cli::try_parse_from(["clinic", "patient", "delete", "P001", "--purge-related"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Patient {
                action: PatientCommands::Delete { purge_related: true, .. }
            }
        ));

        let cli = Cli::try_parse_from(["clinic", "referral", "advance", "R001", "sent"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Referral {
                action: ReferralCommands::Advance { .. }
            }
        ));
    }
}

//! Process-wide terminal preferences for table rendering.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals fall back to unconstrained column widths.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Highlight record statuses in table cells.
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Fix the preferences for this process from the flags and environment.
pub fn init(flags: &GlobalFlags) {
    let prefs = resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    if PREFS.set(prefs).is_err() {
        tracing::debug!("ui preferences already initialized");
    }
}

/// Preferences set by [`init`], or plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    let tables = flags.format == OutputFormat::Table;
    let table_color = tables
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty && !no_color && !flags.quiet,
        };
    let term_width = columns
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TABLE_WIDTH);

    UiPrefs {
        table_color,
        term_width,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            data_dir: None,
            as_identifier: None,
            color,
        }
    }

    #[test]
    fn auto_colors_only_interactive_tables() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(resolve(&table, true, false, None).table_color);
        assert!(!resolve(&table, false, false, None).table_color);
        assert!(!resolve(&table, true, true, None).table_color);

        let json = flags(OutputFormat::Json, ColorMode::Always);
        assert!(!resolve(&json, true, false, None).table_color);
    }

    #[test]
    fn columns_below_minimum_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        assert_eq!(resolve(&table, false, false, Some("120")).term_width, Some(120));
        assert_eq!(resolve(&table, false, false, Some("20")).term_width, None);
        assert_eq!(resolve(&table, false, false, Some("wide")).term_width, None);
    }
}

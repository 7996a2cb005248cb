use crate::config::Config;
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for punchsheet
/// CLI application to reconcile time-clock punch exports into daily timesheets
#[derive(Parser)]
#[command(
    name = "punchsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile time-clock punch exports: slots, durations, breaks and punctuality",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration file in use: `--config` (with `~/` expanded) or the
    /// platform default.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// List keys missing from the configuration file
        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        /// Add the defaults for the missing keys to the configuration file
        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Import a punch export and print the reconciled days
    Analyze {
        /// Punch export file (CSV)
        file: String,

        /// Apply this sector to every row instead of the row's department
        #[arg(long, value_name = "SECTOR")]
        sector: Option<String>,

        /// Only show days of this employee number
        #[arg(long, short = 'e', value_name = "NUMBER")]
        employee: Option<String>,

        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2025-06-01:2025-06-10")
        ///
        /// Special value:
        /// - all                   → every day in the file
        #[arg(
            long,
            short = 'r',
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        range: Option<String>,

        /// Only show days with an anomaly or invalid punches
        #[arg(long = "problems", help = "Only show days with problems")]
        problems: bool,

        /// Show warnings, suggested fixes and break analysis under each day
        #[arg(long = "details", help = "Show per-day warnings, suggestions and breaks")]
        details: bool,
    },

    /// Preview a manual punch correction for one day
    Fix {
        /// Punch export file (CSV)
        file: String,

        /// Day to correct (DD/MM/YYYY or YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: String,

        /// Time of the punch to insert (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        time: String,

        /// Employee number (required when the file has several employees)
        #[arg(long, short = 'e', value_name = "NUMBER")]
        employee: Option<String>,

        /// Problem text guiding the punch kind (default: the day's anomaly)
        #[arg(long, value_name = "TEXT")]
        problem: Option<String>,

        #[arg(long, value_name = "SECTOR")]
        sector: Option<String>,
    },

    /// Export the reconciled table
    Export {
        /// Punch export file (CSV)
        file: String,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "SECTOR")]
        sector: Option<String>,

        /// Date range to export (same forms as `analyze --range`).
        /// If omitted, every day is exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the configured sectors and their schedules
    Sectors,
}

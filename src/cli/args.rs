//! CLI argument definitions for `ccrm`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_records::config::ConfigOverrides;
use campus_records::logger::Level;

/// CLI log level argument
///
/// Lowercase strings go into the config file; `logger::Level` is used at runtime.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Reset one configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Print the location of the config file.
    Path,
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Start the interactive records menu.
    Menu {
        /// Start with an empty catalog and directory
        #[arg(long)]
        no_sample_data: bool,
    },
    /// Import students from a CSV file and list them.
    ///
    /// Rows are `id,regNo,fullName,email[,department]` after a header line.
    Import {
        /// Student CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Also export the imported students (with GPA) to this file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Export students to a CSV file.
    Export {
        /// Destination CSV file
        #[arg(value_name = "FILE")]
        output_file: PathBuf,

        /// Students to export instead of the built-in sample records
        #[arg(long, value_name = "FILE")]
        import: Option<PathBuf>,
    },
    /// Copy the data directory into a timestamped backup.
    Backup,
    /// Generate a GPA report.
    Report {
        /// Report format: text (txt) or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (defaults to `reports_dir`, or stdout when unset)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report on students from this CSV instead of the built-in sample records
        #[arg(long, value_name = "FILE")]
        import: Option<PathBuf>,

        /// Number of top students to list
        #[arg(long, value_name = "COUNT", default_value_t = 3)]
        top: usize,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "ccrm",
    about = "Campus Course & Records Manager",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data directory (backup source)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the backup directory
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Override the reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides; `None` leaves the loaded value alone
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            data_dir: path_string(self.data_dir.as_ref()),
            backup_dir: path_string(self.backup_dir.as_ref()),
            reports_dir: path_string(self.reports_dir.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
    }

    #[test]
    fn test_overrides_empty_by_default() {
        let cli = Cli::parse_from(["ccrm", "backup"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.backup_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::parse_from([
            "ccrm",
            "--config-level",
            "debug",
            "--config-verbose",
            "yes",
            "--data-dir",
            "/srv/ccrm/data",
            "--backup-dir",
            "/srv/ccrm/backups",
            "report",
            "--format",
            "md",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/srv/ccrm/data".to_string()));
        assert_eq!(overrides.backup_dir, Some("/srv/ccrm/backups".to_string()));
        assert!(matches!(cli.command, Command::Report { ref format, top: 3, .. } if format == "md"));
    }

    #[test]
    fn test_menu_flag() {
        let cli = Cli::parse_from(["ccrm", "menu", "--no-sample-data"]);
        assert!(matches!(cli.command, Command::Menu { no_sample_data: true }));
    }
}

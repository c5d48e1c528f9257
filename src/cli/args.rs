//! CLI argument definitions for `edu-portal`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use edu_portal::config::ConfigOverrides;
use edu_portal::core::models::Role;
use edu_portal::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// [`Level`] for runtime use.
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
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `checkout_path`)
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
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
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
    /// Sign in and store the session.
    ///
    /// Waits out the redirect delay, then prints the dashboard it lands on.
    Login {
        /// Role to sign in as (student, teacher, admin)
        #[arg(short, long, value_name = "ROLE", default_value = "student")]
        role: String,

        /// Account email
        #[arg(short, long, value_name = "EMAIL")]
        email: String,

        /// Account password
        #[arg(short, long, value_name = "PASSWORD")]
        password: String,
    },
    /// Show the role of the stored session.
    Whoami,
    /// Clear the stored session.
    Logout,
    /// Visit a role's dashboard, going back to login unless signed in as that role.
    Dashboard {
        /// Dashboard owner
        #[arg(value_name = "ROLE")]
        role: Role,
    },
    /// Load the course list and render it as a page.
    Catalog {
        /// Course list JSON (defaults to the configured resource)
        #[arg(long, value_name = "FILE")]
        courses: Option<PathBuf>,

        /// Output format: html (htm) or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (defaults to the configured pages directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Start checkout for a course.
    Buy {
        /// Course to buy
        #[arg(value_name = "COURSE_ID")]
        course_id: String,

        /// Price shown on the course card
        #[arg(value_name = "PRICE")]
        price: f64,
    },
    /// Print a landing or dashboard page decorated with sparkles.
    Sparkle {
        /// Seed for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Decorate the dashboard page instead of the landing page
        #[arg(long)]
        dashboard: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "eduportal",
    about = "Learning portal command-line interface",
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
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the directory relative course resources resolve against
    #[arg(long = "page-dir", value_name = "DIR")]
    pub page_dir: Option<PathBuf>,

    /// Override the session storage file
    #[arg(long = "storage-file", value_name = "PATH")]
    pub storage_file: Option<PathBuf>,

    /// Override the rendered pages directory
    #[arg(long = "pages-dir", value_name = "DIR")]
    pub pages_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            page_dir: path_string(self.page_dir.as_ref()),
            storage_file: path_string(self.storage_file.as_ref()),
            pages_dir: path_string(self.pages_dir.as_ref()),
        }
    }
}

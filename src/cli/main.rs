//! Command-line interface entry point for `edu-portal`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use edu_portal::config::Config;
use edu_portal::info;
use edu_portal::logger::{
    enable_debug, enable_verbose, init_file_logging, reserve_stdout, set_level, Level,
};

fn main() {
    let args = Cli::parse();

    // Commands that print a document keep stdout clean for redirection
    reserve_stdout(matches!(args.command, Command::Sparkle { .. }));

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        Command::Login {
            role,
            email,
            password,
        } => commands::login::run(&role, &email, &password, &config),
        Command::Whoami => commands::session::whoami(&config),
        Command::Logout => commands::session::logout(&config),
        Command::Dashboard { role } => commands::session::dashboard(role, &config),
        Command::Catalog {
            courses,
            format,
            output,
        } => commands::catalog::run(courses.as_deref(), &format, output.as_deref(), &config),
        Command::Buy { course_id, price } => commands::catalog::buy(&course_id, price, &config),
        Command::Sparkle { seed, dashboard } => {
            commands::sparkle::run(seed, dashboard);
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

//! Config command handler

use crate::args::ConfigSubcommand;
use edu_portal::config::Config;
use edu_portal::info;
use std::io::{self, Write};

/// Dispatch config subcommands
///
/// # Returns
/// `false` when the requested change could not be applied or saved
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            edit(config, &key, |c| c.set(&key, &value), &format!("Set {key} = {value}"))
        }
        Some(ConfigSubcommand::Unset { key }) => edit(
            config,
            &key,
            |c| c.unset(&key, defaults),
            &format!("Reset {key} to default"),
        ),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// Print one value, or the whole config when `key` is `None`
fn show(config: &Config, key: Option<&str>) -> bool {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return true;
    };
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("Unknown config key: '{key}'");
            false
        }
    }
}

/// Apply `change` and persist the result
fn edit(
    config: &mut Config,
    key: &str,
    change: impl FnOnce(&mut Config) -> Result<(), String>,
    done: &str,
) -> bool {
    if let Err(e) = change(config) {
        eprintln!("{e}");
        return false;
    }
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        return false;
    }
    info!("config key '{key}' updated");
    println!("✓ {done}");
    true
}

/// Delete the user config file after confirmation
fn reset() -> bool {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
        println!("✗ Reset cancelled");
        return true;
    }
    match Config::reset() {
        Ok(()) => {
            println!("✓ Config reset to defaults");
            true
        }
        Err(e) => {
            eprintln!("Failed to remove config file: {e}");
            false
        }
    }
}

//! CLI command handlers for `edu-portal`.
//!
//! Each command drives one page controller against a host-side window and
//! reports the result on the terminal. Handlers return `false` when the
//! command failed so `main` can set the exit status.

pub mod catalog;
pub mod config;
pub mod login;
pub mod session;
pub mod sparkle;

use edu_portal::config::Config;
use edu_portal::core::storage::FileStore;
use edu_portal::error;
use std::path::Path;

/// Open the durable store backing the session marker
fn open_store(config: &Config) -> Option<FileStore> {
    let path = Path::new(&config.paths.storage_file);
    match FileStore::open(path) {
        Ok(store) => Some(store),
        Err(e) => {
            error!("Failed to open storage: {e}");
            eprintln!("✗ {e}");
            None
        }
    }
}

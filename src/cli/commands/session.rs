//! Session command handlers: whoami, logout and dashboard visits

use super::open_store;
use edu_portal::config::Config;
use edu_portal::core::dom::Document;
use edu_portal::core::models::Role;
use edu_portal::core::pages::sparkle::dashboard_page_document;
use edu_portal::core::session::{self, DashboardGuard, GuardOutcome};
use edu_portal::core::window::Window;

/// Print the role of the stored session
pub fn whoami(config: &Config) -> bool {
    let Some(store) = open_store(config) else {
        return false;
    };
    match session::current_role(&store) {
        Some(role) => println!("{role}"),
        None => println!("Not signed in"),
    }
    true
}

/// Clear the stored session and print where the visitor lands
pub fn logout(config: &Config) -> bool {
    let Some(store) = open_store(config) else {
        return false;
    };
    let mut window = Window::new(Document::new(), Box::new(store));
    match session::logout(&mut window, &config.site.login_path) {
        Ok(()) => {
            println!("✓ Signed out");
            println!("→ {}", window.location());
            true
        }
        Err(e) => {
            eprintln!("✗ Failed to sign out: {e}");
            false
        }
    }
}

/// Visit the dashboard of `role`
pub fn dashboard(role: Role, config: &Config) -> bool {
    let Some(store) = open_store(config) else {
        return false;
    };
    let mut window =
        Window::new(dashboard_page_document(), Box::new(store)).at(&role.dashboard_path());
    let guard = DashboardGuard::new(role, &config.site.login_path);
    match guard.enforce(&mut window) {
        GuardOutcome::Allowed(role) => {
            println!("✓ Welcome to the {role} dashboard");
            true
        }
        GuardOutcome::Redirected { found } => {
            match found {
                Some(other) => eprintln!("✗ Signed in as {other}, not {role}"),
                None => eprintln!("✗ Not signed in"),
            }
            println!("→ {}", window.location());
            false
        }
    }
}

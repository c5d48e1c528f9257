//! Session marker kept in durable storage
//!
//! A successful login stores the role under [`ROLE_KEY`]. Dashboards read
//! it back through [`DashboardGuard`]; [`logout`] clears it.

use crate::core::models::Role;
use crate::core::storage::{KeyValueStore, StorageError};
use crate::core::window::Window;
use crate::{debug, info, warn};

/// Storage key holding the signed-in role
pub const ROLE_KEY: &str = "userRole";

/// Remember `role` as the signed-in role
///
/// # Errors
/// Returns an error if the storage backend cannot persist the value
pub fn store_role(storage: &mut dyn KeyValueStore, role: Role) -> Result<(), StorageError> {
    storage.set(ROLE_KEY, role.as_str())
}

/// The signed-in role, if any
///
/// A stored value that is not a role name counts as signed out.
#[must_use]
pub fn current_role(storage: &dyn KeyValueStore) -> Option<Role> {
    let stored = storage.get(ROLE_KEY)?;
    match stored.parse() {
        Ok(role) => Some(role),
        Err(err) => {
            warn!("ignoring session marker: {err}");
            None
        }
    }
}

/// Forget the signed-in role
///
/// # Errors
/// Returns an error if the storage backend cannot persist the removal
pub fn clear_role(storage: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    storage.remove(ROLE_KEY)
}

/// Clear the session and send the visitor to `login_path`
///
/// # Errors
/// Returns an error if the session marker cannot be removed; the visitor is
/// not redirected in that case.
pub fn logout(window: &mut Window, login_path: &str) -> Result<(), StorageError> {
    clear_role(window.storage_mut())?;
    info!("signed out, redirecting to {login_path}");
    window.navigate(login_path);
    Ok(())
}

/// Result of a dashboard visit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The stored role owns this dashboard
    Allowed(Role),
    /// Nobody or somebody else is signed in; the visitor was sent to login
    Redirected {
        /// Role found in storage, if any
        found: Option<Role>,
    },
}

/// Keeps each role's dashboard to visitors signed in as that role
#[derive(Debug, Clone)]
pub struct DashboardGuard {
    role: Role,
    login_path: String,
}

impl DashboardGuard {
    /// Guard the dashboard of `role`, sending intruders to `login_path`
    #[must_use]
    pub fn new(role: Role, login_path: &str) -> Self {
        Self {
            role,
            login_path: login_path.to_string(),
        }
    }

    /// Check the session on page load
    pub fn enforce(&self, window: &mut Window) -> GuardOutcome {
        let found = current_role(window.storage());
        if found == Some(self.role) {
            debug!("{} dashboard: access granted", self.role);
            return GuardOutcome::Allowed(self.role);
        }
        warn!(
            "{} dashboard: session holds {found:?}, redirecting to {}",
            self.role, self.login_path
        );
        window.navigate(&self.login_path);
        GuardOutcome::Redirected { found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::Document;
    use crate::core::storage::MemoryStore;

    fn window_with(stored: Option<&str>) -> Window {
        let mut store = MemoryStore::new();
        if let Some(value) = stored {
            store.set(ROLE_KEY, value).unwrap();
        }
        Window::new(Document::new(), Box::new(store)).at("./teacher/dashboard.html")
    }

    #[test]
    fn test_round_trip_role() {
        let mut store = MemoryStore::new();
        assert_eq!(current_role(&store), None);
        store_role(&mut store, Role::Teacher).unwrap();
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("teacher"));
        assert_eq!(current_role(&store), Some(Role::Teacher));
        clear_role(&mut store).unwrap();
        assert_eq!(current_role(&store), None);
    }

    #[test]
    fn test_garbage_marker_is_signed_out() {
        let window = window_with(Some("superuser"));
        assert_eq!(current_role(window.storage()), None);
    }

    #[test]
    fn test_guard_allows_matching_role() {
        let mut window = window_with(Some("teacher"));
        let outcome = DashboardGuard::new(Role::Teacher, "/index.html").enforce(&mut window);
        assert_eq!(outcome, GuardOutcome::Allowed(Role::Teacher));
        assert_eq!(window.location(), "./teacher/dashboard.html");
    }

    #[test]
    fn test_guard_redirects_other_roles_and_anonymous() {
        let mut window = window_with(Some("student"));
        let outcome = DashboardGuard::new(Role::Teacher, "/index.html").enforce(&mut window);
        assert_eq!(
            outcome,
            GuardOutcome::Redirected {
                found: Some(Role::Student)
            }
        );
        assert_eq!(window.location(), "/index.html");

        let mut anonymous = window_with(None);
        let outcome = DashboardGuard::new(Role::Admin, "/index.html").enforce(&mut anonymous);
        assert_eq!(outcome, GuardOutcome::Redirected { found: None });
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let mut window = window_with(Some("teacher"));
        logout(&mut window, "/index.html").unwrap();
        assert!(window.storage().get(ROLE_KEY).is_none());
        assert_eq!(window.location(), "/index.html");
    }
}

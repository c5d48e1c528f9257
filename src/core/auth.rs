//! Authentication providers
//!
//! [`MockAuthProvider`] is a deliberately insecure stand-in: the credential
//! table is compiled in and compared in plain text. It exists so the login
//! page behaves like the real site until a backend implements
//! [`AuthProvider`].

use crate::core::models::Role;
use thiserror::Error;

/// Why a login attempt was refused
///
/// Every cause renders the same message so the form does not reveal which
/// field was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The role picker held a value that is not a known role
    #[error("Invalid credentials!")]
    UnknownRole(String),
    /// Email or password did not match the entry for the role
    #[error("Invalid credentials!")]
    Mismatch(Role),
}

/// One row of the credential table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Role this entry signs in as
    pub role: Role,
    /// Expected email
    pub email: String,
    /// Expected password
    pub password: String,
}

impl Credential {
    /// Create a credential entry
    #[must_use]
    pub fn new(role: Role, email: &str, password: &str) -> Self {
        Self {
            role,
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Checks a login form submission
pub trait AuthProvider {
    /// Authenticate `email`/`password` for the role named by `role`
    ///
    /// # Errors
    /// Returns an [`AuthError`] when the role is unknown or the credentials
    /// do not match.
    fn authenticate(&self, role: &str, email: &str, password: &str) -> Result<Role, AuthError>;
}

/// Fixed in-memory credential table, one entry per role
#[derive(Debug, Clone)]
pub struct MockAuthProvider {
    credentials: Vec<Credential>,
}

impl MockAuthProvider {
    /// The demo accounts shipped with the site
    #[must_use]
    pub fn demo() -> Self {
        Self::with_credentials(vec![
            Credential::new(Role::Student, "student@sus.com", "123456"),
            Credential::new(Role::Teacher, "teacher@sus.com", "123456"),
            Credential::new(Role::Admin, "admin@sus.com", "123456"),
        ])
    }

    /// Use a custom table
    #[must_use]
    pub const fn with_credentials(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// The table entry for `role`
    #[must_use]
    pub fn credential_for(&self, role: Role) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.role == role)
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::demo()
    }
}

impl AuthProvider for MockAuthProvider {
    fn authenticate(&self, role: &str, email: &str, password: &str) -> Result<Role, AuthError> {
        let role: Role = role
            .parse()
            .map_err(|_| AuthError::UnknownRole(role.to_string()))?;
        match self.credential_for(role) {
            Some(entry) if entry.email == email && entry.password == password => Ok(role),
            _ => Err(AuthError::Mismatch(role)),
        }
    }
}

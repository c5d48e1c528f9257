//! Site roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who a signed-in visitor is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Buys and watches courses
    Student,
    /// Publishes courses
    Teacher,
    /// Runs the site
    Admin,
}

impl Role {
    /// Every role, in the order the login picker lists them
    pub const ALL: [Self; 3] = [Self::Student, Self::Teacher, Self::Admin];

    /// The value stored in the session marker and used in URLs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Dashboard this role lands on after signing in
    ///
    /// # Returns
    /// A relative path of the form `./{role}/dashboard.html`
    #[must_use]
    pub fn dashboard_path(self) -> String {
        format!("./{}/dashboard.html", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Only the exact lowercase role names are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role: '{s}'"))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

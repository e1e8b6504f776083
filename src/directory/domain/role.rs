//! Role vocabulary gating navigation visibility.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access tier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including user administration.
    Admin,
    /// Operational access, excluding user administration.
    Manager,
    /// Field-level access to requests and tasks.
    Executor,
}

impl Role {
    /// All roles.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Manager, Self::Executor];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Executor => "executor",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::Executor => "Executor",
        }
    }

    /// Returns the badge color token consumed by the rendering layer.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Admin => "bg-red-500",
            Self::Manager => "bg-blue-500",
            Self::Executor => "bg-green-500",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "executor" => Ok(Self::Executor),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

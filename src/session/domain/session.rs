//! The session state machine.

use crate::directory::domain::Role;
use serde::{Deserialize, Serialize};

/// Authentication state of the dashboard.
///
/// The machine has exactly two states. Sign-in is the only transition out
/// of [`Session::Anonymous`]; sign-out is unconditional and immediate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum Session {
    /// Nobody is signed in.
    Anonymous,
    /// A demo account is signed in.
    Authenticated {
        /// Role granted by the matched demo account.
        role: Role,
        /// Display name of the matched demo account.
        display_name: String,
    },
}

impl Session {
    /// Returns whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the signed-in role, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { role, .. } => Some(*role),
        }
    }

    /// Returns the signed-in display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { display_name, .. } => Some(display_name),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::Anonymous
    }
}

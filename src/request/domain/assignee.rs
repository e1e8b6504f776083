//! Assignee field shared by requests and work tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel token for a request or task nobody has picked up yet.
pub const UNASSIGNED: &str = "unassigned";

/// The person a request or task is assigned to.
///
/// Assignment is free text, not a reference into the user collection. The
/// [`UNASSIGNED`] sentinel marks unpicked work and round-trips through the
/// plain string representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Assignee {
    /// Nobody has been assigned yet.
    Unassigned,
    /// A free-text name.
    Named(String),
}

impl Assignee {
    /// Creates an assignee from a free-text name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the display string, using the sentinel for unassigned work.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unassigned => UNASSIGNED,
            Self::Named(name) => name,
        }
    }
}

impl From<String> for Assignee {
    fn from(value: String) -> Self {
        if value == UNASSIGNED {
            Self::Unassigned
        } else {
            Self::Named(value)
        }
    }
}

impl From<&str> for Assignee {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<Assignee> for String {
    fn from(value: Assignee) -> Self {
        match value {
            Assignee::Unassigned => UNASSIGNED.to_owned(),
            Assignee::Named(name) => name,
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

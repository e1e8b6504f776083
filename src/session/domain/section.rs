//! Navigation sections, the fixed menu, and the access gate.

use super::ParseSectionError;
use crate::directory::domain::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Landing overview.
    Dashboard,
    /// Service request management.
    Requests,
    /// Serviced sites.
    Objects,
    /// Work task board.
    Tasks,
    /// User administration.
    Users,
    /// Reports and analytics.
    Reports,
    /// Profile and system settings.
    Settings,
}

impl Section {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Requests => "requests",
            Self::Objects => "objects",
            Self::Tasks => "tasks",
            Self::Users => "users",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Requests => "Requests",
            Self::Objects => "Objects",
            Self::Tasks => "Tasks",
            Self::Users => "Users",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Section {
    type Error = ParseSectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "requests" => Ok(Self::Requests),
            "objects" => Ok(Self::Objects),
            "tasks" => Ok(Self::Tasks),
            "users" => Ok(Self::Users),
            "reports" => Ok(Self::Reports),
            "settings" => Ok(Self::Settings),
            _ => Err(ParseSectionError(value.to_owned())),
        }
    }
}

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    section: Section,
    allowed_roles: &'static [Role],
}

impl MenuEntry {
    /// Returns the section this entry navigates to.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Returns the roles this entry is shown to.
    #[must_use]
    pub const fn allowed_roles(&self) -> &'static [Role] {
        self.allowed_roles
    }
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Manager, Role::Executor];
const MANAGEMENT_ROLES: &[Role] = &[Role::Admin, Role::Manager];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// The fixed, ordered navigation menu.
pub static MENU: [MenuEntry; 7] = [
    MenuEntry {
        section: Section::Dashboard,
        allowed_roles: ALL_ROLES,
    },
    MenuEntry {
        section: Section::Requests,
        allowed_roles: ALL_ROLES,
    },
    MenuEntry {
        section: Section::Objects,
        allowed_roles: MANAGEMENT_ROLES,
    },
    MenuEntry {
        section: Section::Tasks,
        allowed_roles: ALL_ROLES,
    },
    MenuEntry {
        section: Section::Users,
        allowed_roles: ADMIN_ONLY,
    },
    MenuEntry {
        section: Section::Reports,
        allowed_roles: MANAGEMENT_ROLES,
    },
    MenuEntry {
        section: Section::Settings,
        allowed_roles: ALL_ROLES,
    },
];

/// Returns whether a role may see an entry gated by the given role set.
///
/// The gate is advisory only: it filters which navigation entries the
/// rendering layer shows and enforces nothing.
///
/// # Examples
///
/// ```
/// use requesthub::directory::domain::Role;
/// use requesthub::session::domain::can_access;
///
/// assert!(can_access(Role::Admin, &[Role::Admin, Role::Manager]));
/// assert!(!can_access(Role::Executor, &[Role::Admin]));
/// ```
#[must_use]
pub fn can_access(role: Role, allowed_roles: &[Role]) -> bool {
    allowed_roles.contains(&role)
}

/// Returns the menu entries visible to the given role, in menu order.
#[must_use]
pub fn visible_menu(role: Role) -> Vec<&'static MenuEntry> {
    MENU.iter()
        .filter(|entry| can_access(role, entry.allowed_roles))
        .collect()
}

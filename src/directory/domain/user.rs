//! The user account entity and creation draft.

use super::{DirectoryDomainError, Role, UserId};
use serde::{Deserialize, Serialize};

/// Validated input for creating a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
    role: Role,
}

impl UserDraft {
    /// Creates a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyName`] when the name is blank
    /// after trimming and [`DirectoryDomainError::EmptyEmail`] when the
    /// email is blank after trimming.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, DirectoryDomainError> {
        let raw_name = name.into();
        let trimmed_name = raw_name.trim();
        if trimmed_name.is_empty() {
            return Err(DirectoryDomainError::EmptyName);
        }

        let raw_email = email.into();
        let trimmed_email = raw_email.trim();
        if trimmed_email.is_empty() {
            return Err(DirectoryDomainError::EmptyEmail);
        }

        Ok(Self {
            name: trimmed_name.to_owned(),
            email: trimmed_email.to_owned(),
            role,
        })
    }

    /// Returns the requested display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the requested role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    name: String,
    email: String,
    role: Role,
}

impl UserAccount {
    /// Creates an account from a validated draft and an assigned
    /// identifier.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
        }
    }

    /// Creates an account record directly, for seeding.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the access role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

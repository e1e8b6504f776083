//! Identifier type for user accounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user account.
///
/// User identifiers are plain decimal strings without padding, unlike the
/// zero-padded request scheme. The inconsistency is inherited from the
/// seeded dataset and preserved deliberately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user identifier from an arbitrary string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derives the identifier for the given collection sequence number
    /// (`"5"` for sequence 5).
    #[must_use]
    pub fn from_sequence(sequence: usize) -> Self {
        Self(sequence.to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

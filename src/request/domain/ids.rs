//! Identifier type for service requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a service request, conventionally `REQ-NNN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Creates a request identifier from an arbitrary string.
    ///
    /// The value is opaque: references are not checked against the request
    /// collection and a dangling reference renders as its raw identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derives the identifier for the given collection sequence number,
    /// zero-padded to three digits (`REQ-005` for sequence 5).
    #[must_use]
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("REQ-{sequence:03}"))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Transient notification values published to the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a published notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new random notification identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a notification, used by the rendering layer to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The operation completed as requested.
    Success,
    /// The operation was rejected or failed.
    Error,
}

impl Severity {
    /// Returns the canonical token for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient user-facing message.
///
/// Notifications are fire-and-forget: the core publishes them to a
/// [`crate::notify::ports::NotificationSink`] and never waits for an
/// acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity: Severity::Success,
            text: text.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity: Severity::Error,
            text: text.into(),
        }
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the notification severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

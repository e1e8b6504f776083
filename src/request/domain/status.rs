//! Request status vocabulary and display lookups.

use super::ParseRequestStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display token used for any status or priority outside the closed sets.
pub const NEUTRAL_COLOR_TOKEN: &str = "bg-gray-500";

/// Lifecycle status of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Request has been filed but work has not started.
    New,
    /// Request is being worked on.
    InProgress,
    /// Request has been completed.
    Completed,
    /// Request has been cancelled.
    Cancelled,
}

impl RequestStatus {
    /// All statuses, in reporting order.
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Completed, Self::Cancelled];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns the display color token consumed by the rendering layer.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::New => "bg-blue-500",
            Self::InProgress => "bg-yellow-500",
            Self::Completed => "bg-green-500",
            Self::Cancelled => "bg-gray-500",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RequestStatus {
    type Error = ParseRequestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseRequestStatusError(value.to_owned())),
        }
    }
}

/// Returns the display label for a raw status token.
///
/// Values outside the closed set fall back to the raw token itself, so the
/// lookup is total over arbitrary input.
///
/// # Examples
///
/// ```
/// use requesthub::request::domain::status_label;
///
/// assert_eq!(status_label("completed"), "Completed");
/// assert_eq!(status_label("archived"), "archived");
/// ```
#[must_use]
pub fn status_label(raw: &str) -> &str {
    RequestStatus::try_from(raw).map_or(raw, |status| status.label())
}

/// Returns the display color token for a raw status token.
///
/// Values outside the closed set fall back to [`NEUTRAL_COLOR_TOKEN`].
#[must_use]
pub fn status_color(raw: &str) -> &'static str {
    RequestStatus::try_from(raw).map_or(NEUTRAL_COLOR_TOKEN, RequestStatus::color_token)
}

//! Request priority vocabulary and display lookups.

use super::{NEUTRAL_COLOR_TOKEN, ParsePriorityError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl Priority {
    /// All priorities, most urgent first, in reporting order.
    pub const ALL: [Self; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// Returns the display color token consumed by the rendering layer.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Low => "bg-gray-500",
            Self::Medium => "bg-blue-500",
            Self::High => "bg-orange-500",
            Self::Urgent => "bg-red-500",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Returns the display label for a raw priority token, falling back to the
/// raw token itself for values outside the closed set.
#[must_use]
pub fn priority_label(raw: &str) -> &str {
    Priority::try_from(raw).map_or(raw, |priority| priority.label())
}

/// Returns the display color token for a raw priority token, falling back
/// to [`NEUTRAL_COLOR_TOKEN`] for values outside the closed set.
#[must_use]
pub fn priority_color(raw: &str) -> &'static str {
    Priority::try_from(raw).map_or(NEUTRAL_COLOR_TOKEN, Priority::color_token)
}

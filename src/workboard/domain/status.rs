//! Task status pipeline and display lookups.

use super::ParseTaskStatusError;
use crate::request::domain::NEUTRAL_COLOR_TOKEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a work task on the board pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Captured but not yet scheduled.
    Backlog,
    /// Scheduled and ready to start.
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// The board pipeline, left to right.
    pub const PIPELINE: [Self; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Review,
        Self::Done,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "To do",
            Self::InProgress => "In progress",
            Self::Review => "In review",
            Self::Done => "Done",
        }
    }

    /// Returns the display color token consumed by the rendering layer.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Backlog => "bg-gray-400",
            Self::Todo => "bg-blue-400",
            Self::InProgress => "bg-yellow-500",
            Self::Review => "bg-purple-500",
            Self::Done => "bg-green-500",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Returns the display label for a raw task status token, falling back to
/// the raw token itself for values outside the closed set.
#[must_use]
pub fn task_status_label(raw: &str) -> &str {
    TaskStatus::try_from(raw).map_or(raw, |status| status.label())
}

/// Returns the display color token for a raw task status token, falling
/// back to [`NEUTRAL_COLOR_TOKEN`] for values outside the closed set.
#[must_use]
pub fn task_status_color(raw: &str) -> &'static str {
    TaskStatus::try_from(raw).map_or(NEUTRAL_COLOR_TOKEN, TaskStatus::color_token)
}

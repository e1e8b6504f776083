//! Histograms over request and task collections.

use crate::request::domain::{Priority, RequestStatus, ServiceRequest};
use crate::workboard::domain::{TaskStatus, WorkTask};
use serde::Serialize;

/// Per-status counts over the request collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestStatusBreakdown {
    /// Requests filed but not started.
    pub new: usize,
    /// Requests being worked on.
    pub in_progress: usize,
    /// Requests completed.
    pub completed: usize,
    /// Requests cancelled.
    pub cancelled: usize,
}

impl RequestStatusBreakdown {
    /// Counts requests per status.
    #[must_use]
    pub fn from_requests(requests: &[ServiceRequest]) -> Self {
        let mut breakdown = Self::default();
        for request in requests {
            match request.status() {
                RequestStatus::New => breakdown.new += 1,
                RequestStatus::InProgress => breakdown.in_progress += 1,
                RequestStatus::Completed => breakdown.completed += 1,
                RequestStatus::Cancelled => breakdown.cancelled += 1,
            }
        }
        breakdown
    }

    /// Returns the sum over all statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.new + self.in_progress + self.completed + self.cancelled
    }
}

/// Per-priority counts over the request collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    /// Requests needing immediate attention.
    pub urgent: usize,
    /// Requests to pick up soon.
    pub high: usize,
    /// Requests on normal scheduling.
    pub medium: usize,
    /// Requests that can wait.
    pub low: usize,
}

impl PriorityBreakdown {
    /// Counts requests per priority.
    #[must_use]
    pub fn from_requests(requests: &[ServiceRequest]) -> Self {
        let mut breakdown = Self::default();
        for request in requests {
            match request.priority() {
                Priority::Urgent => breakdown.urgent += 1,
                Priority::High => breakdown.high += 1,
                Priority::Medium => breakdown.medium += 1,
                Priority::Low => breakdown.low += 1,
            }
        }
        breakdown
    }

    /// Returns the sum over all priorities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.urgent + self.high + self.medium + self.low
    }
}

/// Per-status counts over the task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatusBreakdown {
    /// Tasks captured but not scheduled.
    pub backlog: usize,
    /// Tasks ready to start.
    pub todo: usize,
    /// Tasks being worked on.
    pub in_progress: usize,
    /// Tasks awaiting review.
    pub review: usize,
    /// Tasks finished.
    pub done: usize,
}

impl TaskStatusBreakdown {
    /// Counts tasks per pipeline status.
    #[must_use]
    pub fn from_tasks(tasks: &[WorkTask]) -> Self {
        let mut breakdown = Self::default();
        for task in tasks {
            match task.status() {
                TaskStatus::Backlog => breakdown.backlog += 1,
                TaskStatus::Todo => breakdown.todo += 1,
                TaskStatus::InProgress => breakdown.in_progress += 1,
                TaskStatus::Review => breakdown.review += 1,
                TaskStatus::Done => breakdown.done += 1,
            }
        }
        breakdown
    }

    /// Returns the sum over all pipeline statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.backlog + self.todo + self.in_progress + self.review + self.done
    }
}

/// Rounded share of `part` in `total`, as a whole percentage.
///
/// Returns 0 when `total` is zero. Rounding is half-away-from-zero: with
/// the non-negative operands here, a fractional part of exactly .5 rounds
/// up, so 1 of 8 yields 13.
///
/// # Examples
///
/// ```
/// use requesthub::reporting::percentage;
///
/// assert_eq!(percentage(1, 4), 25);
/// assert_eq!(percentage(1, 8), 13);
/// assert_eq!(percentage(0, 0), 0);
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::cast_possible_truncation,
    reason = "half-away-from-zero rounding in integer arithmetic, clamped to 100 before narrowing"
)]
pub const fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * part + total) / (2 * total);
    if rounded > 100 { 100 } else { rounded as u8 }
}

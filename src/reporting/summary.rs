//! The combined report consumed by the analytics view.

use super::{PriorityBreakdown, RequestStatusBreakdown, TaskStatusBreakdown, percentage};
use crate::request::domain::ServiceRequest;
use crate::workboard::domain::WorkTask;
use serde::Serialize;

/// Illustrative average resolution time, in days.
///
/// A fixed display constant, not computed from data.
pub const AVERAGE_RESOLUTION_DAYS: &str = "3.5";

/// Illustrative request arrival rate, per week.
///
/// A fixed display constant, not computed from data.
pub const REQUESTS_PER_WEEK: u32 = 12;

/// Aggregate statistics over the current request and task collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Per-status request counts.
    pub request_statuses: RequestStatusBreakdown,
    /// Per-priority request counts.
    pub priorities: PriorityBreakdown,
    /// Per-status task counts.
    pub task_statuses: TaskStatusBreakdown,
    /// Number of requests.
    pub total_requests: usize,
    /// Number of tasks.
    pub total_tasks: usize,
    /// Rounded share of completed requests, 0 to 100.
    pub completion_rate: u8,
    /// Rounded share of done tasks, 0 to 100.
    pub task_completion_rate: u8,
}

impl ReportSummary {
    /// Computes the summary from the current collections.
    #[must_use]
    pub fn compute(requests: &[ServiceRequest], tasks: &[WorkTask]) -> Self {
        let request_statuses = RequestStatusBreakdown::from_requests(requests);
        let priorities = PriorityBreakdown::from_requests(requests);
        let task_statuses = TaskStatusBreakdown::from_tasks(tasks);

        Self {
            request_statuses,
            priorities,
            task_statuses,
            total_requests: requests.len(),
            total_tasks: tasks.len(),
            completion_rate: percentage(request_statuses.completed, requests.len()),
            task_completion_rate: percentage(task_statuses.done, tasks.len()),
        }
    }
}

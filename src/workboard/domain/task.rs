//! The work task entity.

use super::{TaskId, TaskStatus};
use crate::request::domain::{Assignee, RequestId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work derived from a service request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTask {
    id: TaskId,
    title: String,
    status: TaskStatus,
    request_id: RequestId,
    assignee: Assignee,
    due_date: NaiveDate,
}

impl WorkTask {
    /// Creates a task record.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        status: TaskStatus,
        request_id: RequestId,
        assignee: Assignee,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            request_id,
            assignee,
            due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pipeline status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the originating request reference, dangling references
    /// tolerated.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assignee(&self) -> &Assignee {
        &self.assignee
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

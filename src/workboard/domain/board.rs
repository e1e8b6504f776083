//! Kanban bucketing of work tasks into pipeline columns.

use super::{TaskStatus, WorkTask};
use serde::Serialize;

/// One column of the kanban board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    status: TaskStatus,
    tasks: Vec<WorkTask>,
}

impl BoardColumn {
    /// Returns the pipeline status this column represents.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Returns the tasks in this column, in input order.
    #[must_use]
    pub fn tasks(&self) -> &[WorkTask] {
        &self.tasks
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Partitions tasks into the five pipeline columns.
///
/// The partition is stable: within each column, tasks keep the relative
/// order they had in the input slice. Every column is present even when
/// empty.
///
/// # Examples
///
/// ```
/// use requesthub::workboard::domain::{TaskStatus, bucket_tasks};
///
/// let columns = bucket_tasks(&[]);
/// assert_eq!(columns.len(), 5);
/// assert_eq!(columns[0].status(), TaskStatus::Backlog);
/// assert!(columns.iter().all(|column| column.is_empty()));
/// ```
#[must_use]
pub fn bucket_tasks(tasks: &[WorkTask]) -> Vec<BoardColumn> {
    TaskStatus::PIPELINE
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            tasks: tasks
                .iter()
                .filter(|task| task.status() == *status)
                .cloned()
                .collect(),
        })
        .collect()
}

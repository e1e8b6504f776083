//! Service layer for board-style task display.

use crate::workboard::{
    domain::{BoardColumn, bucket_tasks},
    ports::{WorkTaskRepository, WorkTaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkTaskRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Kanban board orchestration service.
///
/// Columns are recomputed from the task collection on every call; nothing
/// is cached.
#[derive(Clone)]
pub struct BoardService<R>
where
    R: WorkTaskRepository,
{
    repository: Arc<R>,
}

impl<R> BoardService<R>
where
    R: WorkTaskRepository,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the five pipeline columns in board order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the task collection
    /// cannot be read.
    pub async fn columns(&self) -> BoardServiceResult<Vec<BoardColumn>> {
        let tasks = self.repository.list().await?;
        Ok(bucket_tasks(&tasks))
    }
}

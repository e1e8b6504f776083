//! In-memory work task repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::workboard::{
    domain::WorkTask,
    ports::{WorkTaskRepository, WorkTaskRepositoryError, WorkTaskRepositoryResult},
};

/// Thread-safe in-memory task repository preserving seed order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkTaskRepository {
    tasks: Arc<RwLock<Vec<WorkTask>>>,
}

impl InMemoryWorkTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: Vec<WorkTask>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }
}

#[async_trait]
impl WorkTaskRepository for InMemoryWorkTaskRepository {
    async fn list(&self) -> WorkTaskRepositoryResult<Vec<WorkTask>> {
        let tasks = self.tasks.read().map_err(|err| {
            WorkTaskRepositoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.clone())
    }
}

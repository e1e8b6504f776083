//! Repository port for the seeded work task collection.

use crate::workboard::domain::WorkTask;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for work task repository operations.
pub type WorkTaskRepositoryResult<T> = Result<T, WorkTaskRepositoryError>;

/// Work task lookup contract.
///
/// Tasks are seeded and read-only in this version; the port only exposes
/// reads.
#[async_trait]
pub trait WorkTaskRepository: Send + Sync {
    /// Returns all tasks in seed order.
    async fn list(&self) -> WorkTaskRepositoryResult<Vec<WorkTask>>;
}

/// Errors returned by work task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkTaskRepositoryError {
    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkTaskRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

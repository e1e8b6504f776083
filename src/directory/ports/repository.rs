//! Repository port for user account storage and lookup.

use crate::directory::domain::{UserAccount, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User account storage contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Appends a new account to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the identifier
    /// already exists.
    async fn append(&self, account: &UserAccount) -> UserRepositoryResult<()>;

    /// Returns all accounts in insertion order.
    async fn list(&self) -> UserRepositoryResult<Vec<UserAccount>>;

    /// Returns the number of accounts in the collection.
    async fn count(&self) -> UserRepositoryResult<usize>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// An account with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

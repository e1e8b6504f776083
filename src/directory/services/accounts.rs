//! Service layer for adding user accounts.

use crate::directory::{
    domain::{UserAccount, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use crate::notify::{domain::Notification, ports::NotificationSink};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account administration orchestration service.
#[derive(Clone)]
pub struct AccountService<R, N>
where
    R: UserRepository,
    N: NotificationSink,
{
    repository: Arc<R>,
    notifications: Arc<N>,
}

impl<R, N> AccountService<R, N>
where
    R: UserRepository,
    N: NotificationSink,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, notifications: Arc<N>) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Creates a user account from a validated draft.
    ///
    /// The identifier is the current collection length plus one, as an
    /// unpadded decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Repository`] when the collection
    /// rejects the append.
    pub async fn create(&self, draft: UserDraft) -> AccountServiceResult<UserAccount> {
        let sequence = self.repository.count().await? + 1;
        let account = UserAccount::from_draft(UserId::from_sequence(sequence), draft);
        self.repository.append(&account).await?;

        tracing::info!(id = %account.id(), role = %account.role(), "user account added");
        self.notifications
            .publish(Notification::success("User added successfully"))
            .await;
        Ok(account)
    }
}

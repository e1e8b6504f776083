//! In-memory user repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::UserAccount,
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<Vec<UserAccount>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given accounts.
    #[must_use]
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn append(&self, account: &UserAccount) -> UserRepositoryResult<()> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        if accounts.iter().any(|existing| existing.id() == account.id()) {
            return Err(UserRepositoryError::DuplicateUser(account.id().clone()));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<UserAccount>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.clone())
    }

    async fn count(&self) -> UserRepositoryResult<usize> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.len())
    }
}

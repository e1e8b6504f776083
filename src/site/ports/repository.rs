//! Repository port for the read-only site collection.

use crate::site::domain::{ServiceSite, SiteId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for site repository operations.
pub type SiteRepositoryResult<T> = Result<T, SiteRepositoryError>;

/// Site lookup contract.
///
/// The site collection has no mutation operations in this version; the
/// port only exposes reads.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Returns all sites in seed order.
    async fn list(&self) -> SiteRepositoryResult<Vec<ServiceSite>>;

    /// Finds a site by identifier.
    ///
    /// Returns `None` when the site does not exist.
    async fn find_by_id(&self, id: &SiteId) -> SiteRepositoryResult<Option<ServiceSite>>;
}

/// Errors returned by site repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SiteRepositoryError {
    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SiteRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

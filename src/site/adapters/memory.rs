//! In-memory site repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::site::{
    domain::{ServiceSite, SiteId},
    ports::{SiteRepository, SiteRepositoryError, SiteRepositoryResult},
};

/// Thread-safe in-memory site repository preserving seed order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySiteRepository {
    sites: Arc<RwLock<Vec<ServiceSite>>>,
}

impl InMemorySiteRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given sites.
    #[must_use]
    pub fn with_sites(sites: Vec<ServiceSite>) -> Self {
        Self {
            sites: Arc::new(RwLock::new(sites)),
        }
    }
}

#[async_trait]
impl SiteRepository for InMemorySiteRepository {
    async fn list(&self) -> SiteRepositoryResult<Vec<ServiceSite>> {
        let sites = self
            .sites
            .read()
            .map_err(|err| SiteRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(sites.clone())
    }

    async fn find_by_id(&self, id: &SiteId) -> SiteRepositoryResult<Option<ServiceSite>> {
        let sites = self
            .sites
            .read()
            .map_err(|err| SiteRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(sites.iter().find(|site| site.id() == id).cloned())
    }
}

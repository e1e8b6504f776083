//! In-memory request repository.
//!
//! Requests are stored in a plain vector so that insertion order, which
//! the dashboard and identifier derivation both rely on, is preserved.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::request::{
    domain::{RequestId, RequestStatus, ServiceRequest},
    ports::{RequestRepository, RequestRepositoryError, RequestRepositoryResult},
};

/// Thread-safe in-memory request repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequestRepository {
    requests: Arc<RwLock<Vec<ServiceRequest>>>,
}

impl InMemoryRequestRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given requests.
    #[must_use]
    pub fn with_requests(requests: Vec<ServiceRequest>) -> Self {
        Self {
            requests: Arc::new(RwLock::new(requests)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> RequestRepositoryError {
    RequestRepositoryError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn append(&self, request: &ServiceRequest) -> RequestRepositoryResult<()> {
        let mut requests = self.requests.write().map_err(poisoned)?;
        if requests.iter().any(|existing| existing.id() == request.id()) {
            return Err(RequestRepositoryError::DuplicateRequest(request.id().clone()));
        }
        requests.push(request.clone());
        Ok(())
    }

    async fn set_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> RequestRepositoryResult<Option<ServiceRequest>> {
        let mut requests = self.requests.write().map_err(poisoned)?;
        let updated = requests.iter_mut().find(|request| request.id() == id);
        Ok(updated.map(|request| {
            request.set_status(status);
            request.clone()
        }))
    }

    async fn find_by_id(&self, id: &RequestId) -> RequestRepositoryResult<Option<ServiceRequest>> {
        let requests = self.requests.read().map_err(poisoned)?;
        Ok(requests.iter().find(|request| request.id() == id).cloned())
    }

    async fn list(&self) -> RequestRepositoryResult<Vec<ServiceRequest>> {
        let requests = self.requests.read().map_err(poisoned)?;
        Ok(requests.clone())
    }

    async fn count(&self) -> RequestRepositoryResult<usize> {
        let requests = self.requests.read().map_err(poisoned)?;
        Ok(requests.len())
    }
}

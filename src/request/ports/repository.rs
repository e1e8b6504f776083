//! Repository port for service request storage and lookup.

use crate::request::domain::{RequestId, RequestStatus, ServiceRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for request repository operations.
pub type RequestRepositoryResult<T> = Result<T, RequestRepositoryError>;

/// Service request storage contract.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Appends a new request to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RequestRepositoryError::DuplicateRequest`] when the
    /// identifier already exists.
    async fn append(&self, request: &ServiceRequest) -> RequestRepositoryResult<()>;

    /// Replaces the status of the request with the given identifier.
    ///
    /// Returns the updated request, or `None` when no request matches the
    /// identifier. The unknown-id case is a no-op, not an error.
    async fn set_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> RequestRepositoryResult<Option<ServiceRequest>>;

    /// Finds a request by identifier.
    ///
    /// Returns `None` when the request does not exist.
    async fn find_by_id(&self, id: &RequestId) -> RequestRepositoryResult<Option<ServiceRequest>>;

    /// Returns all requests in insertion order.
    async fn list(&self) -> RequestRepositoryResult<Vec<ServiceRequest>>;

    /// Returns the number of requests in the collection.
    async fn count(&self) -> RequestRepositoryResult<usize>;
}

/// Errors returned by request repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RequestRepositoryError {
    /// A request with the same identifier already exists.
    #[error("duplicate request identifier: {0}")]
    DuplicateRequest(RequestId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl RequestRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

//! Service layer for request creation and status updates.

use crate::notify::{domain::Notification, ports::NotificationSink};
use crate::request::{
    domain::{RequestDraft, RequestId, RequestStatus, ServiceRequest},
    ports::{RequestRepository, RequestRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for request intake operations.
#[derive(Debug, Error)]
pub enum RequestIntakeError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RequestRepositoryError),
}

/// Result type for request intake operations.
pub type RequestIntakeResult<T> = Result<T, RequestIntakeError>;

/// Request intake and status update orchestration service.
#[derive(Clone)]
pub struct RequestIntakeService<R, C, N>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
    N: NotificationSink,
{
    repository: Arc<R>,
    clock: Arc<C>,
    notifications: Arc<N>,
}

impl<R, C, N> RequestIntakeService<R, C, N>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
    N: NotificationSink,
{
    /// Creates a new intake service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, notifications: Arc<N>) -> Self {
        Self {
            repository,
            clock,
            notifications,
        }
    }

    /// Creates a service request from a validated draft.
    ///
    /// The identifier is derived from the current collection length plus
    /// one, zero-padded to three digits. Safe only because this scope has
    /// a single user and no deletion; any persistence layer would need a
    /// monotonic counter instead.
    ///
    /// # Errors
    ///
    /// Returns [`RequestIntakeError::Repository`] when the collection
    /// rejects the append.
    pub async fn create(&self, draft: RequestDraft) -> RequestIntakeResult<ServiceRequest> {
        let sequence = self.repository.count().await? + 1;
        let request = ServiceRequest::open(RequestId::from_sequence(sequence), draft, &*self.clock);
        self.repository.append(&request).await?;

        tracing::info!(id = %request.id(), "service request created");
        self.notifications
            .publish(Notification::success("Request created successfully"))
            .await;
        Ok(request)
    }

    /// Replaces the status of the request with the given identifier.
    ///
    /// Returns `None` without error when the identifier matches nothing;
    /// the success notification fires either way.
    ///
    /// # Errors
    ///
    /// Returns [`RequestIntakeError::Repository`] when the collection
    /// cannot be read or written.
    pub async fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> RequestIntakeResult<Option<ServiceRequest>> {
        let updated = self.repository.set_status(id, status).await?;

        if updated.is_none() {
            tracing::warn!(id = %id, "status update matched no request");
        }
        self.notifications
            .publish(Notification::success("Request status updated"))
            .await;
        Ok(updated)
    }
}

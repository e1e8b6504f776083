//! Service request aggregate root and creation draft.

use super::{Assignee, Priority, RequestDomainError, RequestId, RequestStatus};
use crate::site::domain::SiteId;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated input for creating a service request.
///
/// Construction fails when the title or site reference is blank, so a
/// draft that exists is always submittable. Rejection leaves every
/// collection untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    title: String,
    site_id: SiteId,
    priority: Priority,
}

impl RequestDraft {
    /// Creates a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::EmptyTitle`] when the title is blank
    /// after trimming and [`RequestDomainError::EmptySiteReference`] when
    /// the site reference is blank after trimming.
    pub fn new(
        title: impl Into<String>,
        site_id: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, RequestDomainError> {
        let raw_title = title.into();
        let trimmed_title = raw_title.trim();
        if trimmed_title.is_empty() {
            return Err(RequestDomainError::EmptyTitle);
        }

        let raw_site = site_id.into();
        let trimmed_site = raw_site.trim();
        if trimmed_site.is_empty() {
            return Err(RequestDomainError::EmptySiteReference);
        }

        Ok(Self {
            title: trimmed_title.to_owned(),
            site_id: SiteId::new(trimmed_site),
            priority,
        })
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the referenced site.
    #[must_use]
    pub const fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    /// Returns the requested priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Service request aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    id: RequestId,
    title: String,
    status: RequestStatus,
    priority: Priority,
    site_id: SiteId,
    created_at: NaiveDate,
    assignee: Assignee,
}

/// Parameter object for reconstructing a seeded or stored request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// Request identifier.
    pub id: RequestId,
    /// Request title.
    pub title: String,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// Urgency.
    pub priority: Priority,
    /// Referenced site, dangling references tolerated.
    pub site_id: SiteId,
    /// Calendar date the request was filed.
    pub created_at: NaiveDate,
    /// Current assignee.
    pub assignee: Assignee,
}

impl ServiceRequest {
    /// Opens a new request from a validated draft.
    ///
    /// New requests start in [`RequestStatus::New`], unassigned, with the
    /// creation date taken from the injected clock.
    #[must_use]
    pub fn open(id: RequestId, draft: RequestDraft, clock: &impl Clock) -> Self {
        Self {
            id,
            title: draft.title,
            status: RequestStatus::New,
            priority: draft.priority,
            site_id: draft.site_id,
            created_at: clock.utc().date_naive(),
            assignee: Assignee::Unassigned,
        }
    }

    /// Reconstructs a request from a full record.
    #[must_use]
    pub fn from_record(record: RequestRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            status: record.status,
            priority: record.priority,
            site_id: record.site_id,
            created_at: record.created_at,
            assignee: record.assignee,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> &RequestId {
        &self.id
    }

    /// Returns the request title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    /// Returns the urgency.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the referenced site.
    #[must_use]
    pub const fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    /// Returns the calendar date the request was filed.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assignee(&self) -> &Assignee {
        &self.assignee
    }

    /// Replaces the lifecycle status.
    ///
    /// The status is the only field that may change after creation.
    pub const fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

//! The serviced site entity.

use super::SiteId;
use serde::{Deserialize, Serialize};

/// A physical site under service management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSite {
    id: SiteId,
    name: String,
    address: String,
    requests_count: u32,
    tasks_count: u32,
}

impl ServiceSite {
    /// Creates a site record.
    ///
    /// The two counters are denormalized snapshots taken when the dataset
    /// was seeded. They are not recomputed from the request or task
    /// collections.
    #[must_use]
    pub fn new(
        id: SiteId,
        name: impl Into<String>,
        address: impl Into<String>,
        requests_count: u32,
        tasks_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            requests_count,
            tasks_count,
        }
    }

    /// Returns the site identifier.
    #[must_use]
    pub const fn id(&self) -> &SiteId {
        &self.id
    }

    /// Returns the site display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the seeded request counter snapshot.
    #[must_use]
    pub const fn requests_count(&self) -> u32 {
        self.requests_count
    }

    /// Returns the seeded task counter snapshot.
    #[must_use]
    pub const fn tasks_count(&self) -> u32 {
        self.tasks_count
    }
}

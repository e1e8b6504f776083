//! In-memory notification sink that records every published notification.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notify::{domain::Notification, ports::NotificationSink};

/// Thread-safe sink that stores notifications in publication order.
///
/// Used as the default sink for a headless core and as a probe in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    entries: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications published so far, oldest first.
    #[must_use]
    pub fn published(&self) -> Vec<Notification> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Removes and returns all recorded notifications.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .write()
            .map(|mut entries| entries.drain(..).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn publish(&self, notification: Notification) {
        // Fire-and-forget: a poisoned lock drops the notification.
        if let Ok(mut entries) = self.entries.write() {
            entries.push(notification);
        }
    }
}

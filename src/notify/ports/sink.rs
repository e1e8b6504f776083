//! Sink port for transient notifications.

use crate::notify::domain::Notification;
use async_trait::async_trait;

/// Consumer of transient notifications.
///
/// Implementations deliver notifications to the rendering layer. Delivery
/// is fire-and-forget: there is no acknowledgement and no error path, and a
/// sink that cannot deliver simply drops the notification.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Publishes a notification.
    async fn publish(&self, notification: Notification);
}

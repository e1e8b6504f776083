//! Port contracts for notification publication.

pub mod sink;

pub use sink::NotificationSink;

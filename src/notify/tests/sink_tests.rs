//! Tests for notification values and the recording sink.

use crate::notify::{
    adapters::memory::RecordingNotificationSink,
    domain::{Notification, Severity},
    ports::NotificationSink,
};
use rstest::rstest;

#[rstest]
fn success_and_error_carry_severity_and_text() {
    let success = Notification::success("Request created successfully");
    let error = Notification::error("Invalid username or password");

    assert_eq!(success.severity(), Severity::Success);
    assert_eq!(success.text(), "Request created successfully");
    assert_eq!(error.severity(), Severity::Error);
    assert_eq!(error.text(), "Invalid username or password");
    assert_ne!(success.id(), error.id());
}

#[rstest]
#[case(Severity::Success, "success")]
#[case(Severity::Error, "error")]
fn severity_tokens_are_canonical(#[case] severity: Severity, #[case] token: &str) {
    assert_eq!(severity.as_str(), token);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recording_sink_preserves_publication_order() {
    let sink = RecordingNotificationSink::new();

    sink.publish(Notification::success("first")).await;
    sink.publish(Notification::error("second")).await;

    let published = sink.published();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].text(), "first");
    assert_eq!(published[1].text(), "second");

    let drained = sink.drain();
    assert_eq!(drained.len(), 2);
    assert!(sink.published().is_empty());
}

//! Sign-in state machine tests.

use std::sync::Arc;
use std::time::Duration;

use crate::directory::domain::Role;
use crate::notify::{adapters::memory::RecordingNotificationSink, domain::Severity};
use crate::session::{
    domain::{Session, SignInError, verify_credentials},
    services::SignInService,
};
use rstest::{fixture, rstest};

struct Harness {
    service: SignInService<RecordingNotificationSink>,
    sink: RecordingNotificationSink,
}

#[fixture]
fn harness() -> Harness {
    let sink = RecordingNotificationSink::new();
    let service = SignInService::with_delay(Arc::new(sink.clone()), Duration::ZERO);
    Harness { service, sink }
}

#[rstest]
#[case("admin", "admin123", Role::Admin, "Administrator")]
#[case("manager", "manager123", Role::Manager, "Ivan Petrov")]
#[case("executor", "executor123", Role::Executor, "Sergei Ivanov")]
fn credential_table_matches_demo_accounts(
    #[case] username: &str,
    #[case] password: &str,
    #[case] role: Role,
    #[case] display_name: &str,
) {
    let account = verify_credentials(username, password).expect("credentials should match");
    assert_eq!(account.role(), role);
    assert_eq!(account.display_name(), display_name);
}

#[rstest]
fn credential_check_requires_exact_match() {
    assert!(verify_credentials("admin", "admin124").is_none());
    assert!(verify_credentials("Admin", "admin123").is_none());
    assert!(verify_credentials("admin", "ADMIN123").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_with_valid_credentials_authenticates(harness: Harness) {
    let session = harness
        .service
        .sign_in("admin", "admin123")
        .await
        .expect("sign-in should succeed");

    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.display_name(), Some("Administrator"));

    let published = harness.sink.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].severity(), Severity::Success);
    assert_eq!(published[0].text(), "Welcome, Administrator!");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_with_wrong_password_emits_one_failure(harness: Harness) {
    let result = harness.service.sign_in("admin", "wrong").await;

    assert_eq!(result, Err(SignInError::InvalidCredentials));

    let published = harness.sink.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].severity(), Severity::Error);
    assert_eq!(published[0].text(), "Invalid username or password");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_with_blank_fields_fails_immediately(harness: Harness) {
    let missing_username = harness.service.sign_in("", "admin123").await;
    assert_eq!(missing_username, Err(SignInError::MissingCredentials));

    let missing_password = harness.service.sign_in("admin", "").await;
    assert_eq!(missing_password, Err(SignInError::MissingCredentials));

    let published = harness.sink.published();
    assert_eq!(published.len(), 2);
    assert!(published
        .iter()
        .all(|notification| notification.severity() == Severity::Error));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_failures_are_independent(harness: Harness) {
    for _ in 0..3 {
        let result = harness.service.sign_in("admin", "wrong").await;
        assert_eq!(result, Err(SignInError::InvalidCredentials));
    }

    // No lockout: a correct attempt still succeeds.
    let session = harness
        .service
        .sign_in("admin", "admin123")
        .await
        .expect("sign-in should succeed");
    assert!(session.is_authenticated());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_out_returns_anonymous_and_notifies(harness: Harness) {
    let session = harness.service.sign_out().await;

    assert_eq!(session, Session::Anonymous);
    let published = harness.sink.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].text(), "You have signed out");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn sign_in_suspends_for_the_configured_delay() {
    let sink = RecordingNotificationSink::new();
    let service = SignInService::with_delay(Arc::new(sink), Duration::from_millis(800));

    let started = tokio::time::Instant::now();
    service
        .sign_in("admin", "admin123")
        .await
        .expect("sign-in should succeed");

    assert!(started.elapsed() >= Duration::from_millis(800));
}

//! Shared world state for sign-in session BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use requesthub::notify::adapters::memory::RecordingNotificationSink;
use requesthub::session::{
    domain::{Session, SignInError},
    services::SignInService,
};
use rstest::fixture;

/// Scenario world for sign-in behaviour tests.
pub struct SignInWorld {
    pub service: SignInService<RecordingNotificationSink>,
    pub sink: RecordingNotificationSink,
    pub session: Session,
    pub last_result: Option<Result<Session, SignInError>>,
}

impl SignInWorld {
    /// Creates a world with a zero-delay sign-in service.
    #[must_use]
    pub fn new() -> Self {
        let sink = RecordingNotificationSink::new();
        let service = SignInService::with_delay(Arc::new(sink.clone()), Duration::ZERO);
        Self {
            service,
            sink,
            session: Session::Anonymous,
            last_result: None,
        }
    }
}

impl Default for SignInWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SignInWorld {
    SignInWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

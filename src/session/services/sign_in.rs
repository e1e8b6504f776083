//! Service layer for signing in and out of the dashboard.

use crate::notify::{domain::Notification, ports::NotificationSink};
use crate::session::domain::{Session, SignInError, verify_credentials};
use std::sync::Arc;
use std::time::Duration;

/// Artificial sign-in latency, imitating a network round trip.
pub const DEFAULT_SIGN_IN_DELAY: Duration = Duration::from_millis(800);

/// Sign-in and sign-out orchestration service.
///
/// The caller keeps at most one sign-in attempt in flight; the rendering
/// layer disables its form while an attempt is pending.
#[derive(Clone)]
pub struct SignInService<N>
where
    N: NotificationSink,
{
    notifications: Arc<N>,
    delay: Duration,
}

impl<N> SignInService<N>
where
    N: NotificationSink,
{
    /// Creates a sign-in service with the default artificial delay.
    #[must_use]
    pub const fn new(notifications: Arc<N>) -> Self {
        Self::with_delay(notifications, DEFAULT_SIGN_IN_DELAY)
    }

    /// Creates a sign-in service with an explicit delay. Tests pass
    /// [`Duration::ZERO`].
    #[must_use]
    pub const fn with_delay(notifications: Arc<N>, delay: Duration) -> Self {
        Self {
            notifications,
            delay,
        }
    }

    /// Attempts to sign in with the submitted credentials.
    ///
    /// Blank credentials fail immediately. Otherwise the service suspends
    /// for the configured delay before resolving, then either returns an
    /// authenticated session with a welcome notification or publishes
    /// exactly one failure notification. The delay always resolves; there
    /// is no timeout or abort path.
    ///
    /// # Errors
    ///
    /// Returns [`SignInError::MissingCredentials`] when either field is
    /// blank and [`SignInError::InvalidCredentials`] when no demo account
    /// matches.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session, SignInError> {
        if username.is_empty() || password.is_empty() {
            self.notifications
                .publish(Notification::error("Fill in all fields"))
                .await;
            return Err(SignInError::MissingCredentials);
        }

        tokio::time::sleep(self.delay).await;

        let Some(account) = verify_credentials(username, password) else {
            tracing::warn!(username, "sign-in rejected");
            self.notifications
                .publish(Notification::error("Invalid username or password"))
                .await;
            return Err(SignInError::InvalidCredentials);
        };

        tracing::info!(username, role = %account.role(), "signed in");
        self.notifications
            .publish(Notification::success(format!(
                "Welcome, {}!",
                account.display_name()
            )))
            .await;
        Ok(Session::Authenticated {
            role: account.role(),
            display_name: account.display_name().to_owned(),
        })
    }

    /// Signs out unconditionally and immediately.
    #[must_use = "the returned session replaces the current one"]
    pub async fn sign_out(&self) -> Session {
        tracing::info!("signed out");
        self.notifications
            .publish(Notification::success("You have signed out"))
            .await;
        Session::Anonymous
    }
}

//! The single controller owning all application state.

use crate::app::{seed, snapshot::DashboardSnapshot};
use crate::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{UserAccount, UserDraft},
    ports::{UserRepository, UserRepositoryError},
    services::{AccountService, AccountServiceResult},
};
use crate::notify::ports::NotificationSink;
use crate::reporting::ReportSummary;
use crate::request::{
    adapters::memory::InMemoryRequestRepository,
    domain::{RequestDraft, RequestId, RequestStatus, ServiceRequest},
    ports::{RequestRepository, RequestRepositoryError},
    services::{RequestIntakeResult, RequestIntakeService},
};
use crate::session::{
    domain::{MenuEntry, Section, Session, SignInError, visible_menu},
    services::SignInService,
};
use crate::site::{
    adapters::memory::InMemorySiteRepository,
    ports::{SiteRepository, SiteRepositoryError},
};
use crate::workboard::{
    adapters::memory::InMemoryWorkTaskRepository,
    domain::BoardColumn,
    ports::{WorkTaskRepository, WorkTaskRepositoryError},
    services::{BoardService, BoardServiceResult},
};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by snapshot and report reads.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request collection could not be read.
    #[error(transparent)]
    Requests(#[from] RequestRepositoryError),
    /// The task collection could not be read.
    #[error(transparent)]
    Tasks(#[from] WorkTaskRepositoryError),
    /// The site collection could not be read.
    #[error(transparent)]
    Sites(#[from] SiteRepositoryError),
    /// The user collection could not be read.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Owner of all dashboard state.
///
/// The controller holds the four collections, the session, the active
/// section, and the sidebar flag. Reads hand out plain snapshots; writes
/// go through the context services, which publish notifications as side
/// effects. Access control stays advisory: mutation methods are not
/// role-gated, and the gate only filters navigation visibility.
pub struct DashboardController<C, N>
where
    C: Clock + Send + Sync,
    N: NotificationSink,
{
    requests: Arc<InMemoryRequestRepository>,
    tasks: Arc<InMemoryWorkTaskRepository>,
    sites: Arc<InMemorySiteRepository>,
    users: Arc<InMemoryUserRepository>,
    notifications: Arc<N>,
    intake: RequestIntakeService<InMemoryRequestRepository, C, N>,
    accounts: AccountService<InMemoryUserRepository, N>,
    board: BoardService<InMemoryWorkTaskRepository>,
    sign_in_service: SignInService<N>,
    session: Session,
    active_section: Section,
    sidebar_collapsed: bool,
}

impl<C, N> DashboardController<C, N>
where
    C: Clock + Send + Sync,
    N: NotificationSink,
{
    /// Creates a controller over empty collections.
    #[must_use]
    pub fn new(clock: Arc<C>, notifications: Arc<N>) -> Self {
        Self::assemble(
            InMemoryRequestRepository::new(),
            InMemoryWorkTaskRepository::new(),
            InMemorySiteRepository::new(),
            InMemoryUserRepository::new(),
            clock,
            notifications,
        )
    }

    /// Creates a controller seeded with the demo dataset.
    #[must_use]
    pub fn with_demo_data(clock: Arc<C>, notifications: Arc<N>) -> Self {
        Self::assemble(
            InMemoryRequestRepository::with_requests(seed::demo_requests()),
            InMemoryWorkTaskRepository::with_tasks(seed::demo_tasks()),
            InMemorySiteRepository::with_sites(seed::demo_sites()),
            InMemoryUserRepository::with_accounts(seed::demo_users()),
            clock,
            notifications,
        )
    }

    fn assemble(
        request_store: InMemoryRequestRepository,
        task_store: InMemoryWorkTaskRepository,
        site_store: InMemorySiteRepository,
        user_store: InMemoryUserRepository,
        clock: Arc<C>,
        notifications: Arc<N>,
    ) -> Self {
        let requests = Arc::new(request_store);
        let tasks = Arc::new(task_store);
        let sites = Arc::new(site_store);
        let users = Arc::new(user_store);

        let intake = RequestIntakeService::new(
            Arc::clone(&requests),
            clock,
            Arc::clone(&notifications),
        );
        let accounts = AccountService::new(Arc::clone(&users), Arc::clone(&notifications));
        let board = BoardService::new(Arc::clone(&tasks));
        let sign_in_service = SignInService::new(Arc::clone(&notifications));

        Self {
            requests,
            tasks,
            sites,
            users,
            notifications,
            intake,
            accounts,
            board,
            sign_in_service,
            session: Session::Anonymous,
            active_section: Section::Dashboard,
            sidebar_collapsed: false,
        }
    }

    /// Replaces the artificial sign-in delay. Tests pass
    /// [`Duration::ZERO`].
    #[must_use]
    pub fn with_sign_in_delay(mut self, delay: Duration) -> Self {
        self.sign_in_service = SignInService::with_delay(Arc::clone(&self.notifications), delay);
        self
    }

    /// Attempts to sign in with the submitted credentials.
    ///
    /// On success the session becomes authenticated; on failure it is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SignInError`] when credentials are blank or match no demo
    /// account.
    pub async fn sign_in(&mut self, username: &str, password: &str) -> Result<(), SignInError> {
        let session = self.sign_in_service.sign_in(username, password).await?;
        self.session = session;
        Ok(())
    }

    /// Signs out and resets the active section to the dashboard.
    pub async fn sign_out(&mut self) {
        self.session = self.sign_in_service.sign_out().await;
        self.active_section = Section::Dashboard;
    }

    /// Navigates to the given section.
    pub const fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Collapses or expands the sidebar.
    pub const fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    /// Creates a service request from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`crate::request::services::RequestIntakeError`] when the
    /// collection rejects the append.
    pub async fn create_request(&self, draft: RequestDraft) -> RequestIntakeResult<ServiceRequest> {
        self.intake.create(draft).await
    }

    /// Replaces the status of the request with the given identifier.
    ///
    /// Returns `None` without error when the identifier matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::request::services::RequestIntakeError`] when the
    /// collection cannot be read or written.
    pub async fn update_request_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> RequestIntakeResult<Option<ServiceRequest>> {
        self.intake.update_status(id, status).await
    }

    /// Creates a user account from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`crate::directory::services::AccountServiceError`] when
    /// the collection rejects the append.
    pub async fn create_user(&self, draft: UserDraft) -> AccountServiceResult<UserAccount> {
        self.accounts.create(draft).await
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the active navigation section.
    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.active_section
    }

    /// Returns whether the sidebar is collapsed.
    #[must_use]
    pub const fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Returns the menu entries visible to the signed-in role, in menu
    /// order. Anonymous sessions see no entries.
    #[must_use]
    pub fn menu(&self) -> Vec<&'static MenuEntry> {
        self.session.role().map(visible_menu).unwrap_or_default()
    }

    /// Builds a point-in-time snapshot of all state.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when any collection cannot be read.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, DashboardError> {
        Ok(DashboardSnapshot {
            requests: self.requests.list().await?,
            tasks: self.tasks.list().await?,
            sites: self.sites.list().await?,
            users: self.users.list().await?,
            role: self.session.role(),
            display_name: self.session.display_name().map(str::to_owned),
            active_section: self.active_section,
            sidebar_collapsed: self.sidebar_collapsed,
        })
    }

    /// Recomputes the report summary from the current collections.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when a collection cannot be read.
    pub async fn report(&self) -> Result<ReportSummary, DashboardError> {
        let requests = self.requests.list().await?;
        let tasks = self.tasks.list().await?;
        Ok(ReportSummary::compute(&requests, &tasks))
    }

    /// Recomputes the kanban board columns from the task collection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::workboard::services::BoardServiceError`] when the
    /// task collection cannot be read.
    pub async fn board(&self) -> BoardServiceResult<Vec<BoardColumn>> {
        self.board.columns().await
    }
}

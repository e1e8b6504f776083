//! The seeded demo dataset.
//!
//! A fresh controller starts from these collections; there is no
//! persistence, so a restart always returns to this state.

use crate::directory::domain::{Role, UserAccount, UserId};
use crate::request::domain::{
    Assignee, Priority, RequestId, RequestRecord, RequestStatus, ServiceRequest,
};
use crate::site::domain::{ServiceSite, SiteId};
use crate::workboard::domain::{TaskId, TaskStatus, WorkTask};
use chrono::NaiveDate;

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn seed_request(
    id: &str,
    title: &str,
    status: RequestStatus,
    priority: Priority,
    site: &str,
    day: u32,
    assignee: &str,
) -> ServiceRequest {
    ServiceRequest::from_record(RequestRecord {
        id: RequestId::new(id),
        title: title.to_owned(),
        status,
        priority,
        site_id: SiteId::new(site),
        created_at: seed_date(2024, 1, day),
        assignee: Assignee::named(assignee),
    })
}

/// The four seeded service requests.
#[must_use]
pub fn demo_requests() -> Vec<ServiceRequest> {
    vec![
        seed_request(
            "REQ-001",
            "Equipment installation",
            RequestStatus::InProgress,
            Priority::High,
            "OBJ-001",
            15,
            "A. Sidorov",
        ),
        seed_request(
            "REQ-002",
            "Routine maintenance",
            RequestStatus::New,
            Priority::Medium,
            "OBJ-002",
            16,
            "P. Ivanov",
        ),
        seed_request(
            "REQ-003",
            "System repair",
            RequestStatus::Completed,
            Priority::Urgent,
            "OBJ-001",
            10,
            "K. Petrov",
        ),
        seed_request(
            "REQ-004",
            "Equipment diagnostics",
            RequestStatus::InProgress,
            Priority::Low,
            "OBJ-003",
            17,
            "A. Sidorov",
        ),
    ]
}

fn seed_task(
    id: &str,
    title: &str,
    status: TaskStatus,
    request: &str,
    assignee: &str,
    day: u32,
) -> WorkTask {
    WorkTask::new(
        TaskId::new(id),
        title,
        status,
        RequestId::new(request),
        Assignee::named(assignee),
        seed_date(2024, 1, day),
    )
}

/// The five seeded work tasks, one per pipeline status.
#[must_use]
pub fn demo_tasks() -> Vec<WorkTask> {
    vec![
        seed_task(
            "TSK-001",
            "Prepare documentation",
            TaskStatus::InProgress,
            "REQ-001",
            "A. Sidorov",
            20,
        ),
        seed_task(
            "TSK-002",
            "Verify delivery contents",
            TaskStatus::Todo,
            "REQ-001",
            "P. Ivanov",
            18,
        ),
        seed_task(
            "TSK-003",
            "Install software",
            TaskStatus::Done,
            "REQ-003",
            "K. Petrov",
            12,
        ),
        seed_task(
            "TSK-004",
            "Test the system",
            TaskStatus::Review,
            "REQ-001",
            "A. Sidorov",
            19,
        ),
        seed_task(
            "TSK-005",
            "Plan the work",
            TaskStatus::Backlog,
            "REQ-002",
            "P. Ivanov",
            22,
        ),
    ]
}

/// The three seeded sites.
///
/// The per-site counters are snapshots fixed at seeding time.
#[must_use]
pub fn demo_sites() -> Vec<ServiceSite> {
    vec![
        ServiceSite::new(
            SiteId::new("OBJ-001"),
            "Production building A",
            "15 Industrial St",
            12,
            8,
        ),
        ServiceSite::new(
            SiteId::new("OBJ-002"),
            "Warehouse complex B",
            "42 Logistics St",
            7,
            5,
        ),
        ServiceSite::new(
            SiteId::new("OBJ-003"),
            "Office building C",
            "88 Central Ave",
            4,
            3,
        ),
    ]
}

/// The three seeded user accounts, one per role.
#[must_use]
pub fn demo_users() -> Vec<UserAccount> {
    vec![
        UserAccount::new(
            UserId::new("1"),
            "Administrator",
            "admin@company.example",
            Role::Admin,
        ),
        UserAccount::new(
            UserId::new("2"),
            "Ivan Petrov",
            "manager@company.example",
            Role::Manager,
        ),
        UserAccount::new(
            UserId::new("3"),
            "Sergei Ivanov",
            "executor@company.example",
            Role::Executor,
        ),
    ]
}

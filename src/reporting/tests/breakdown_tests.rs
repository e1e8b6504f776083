//! Histogram and percentage tests.

use crate::reporting::{
    PriorityBreakdown, RequestStatusBreakdown, TaskStatusBreakdown, percentage,
};
use crate::request::domain::{
    Assignee, Priority, RequestId, RequestRecord, RequestStatus, ServiceRequest,
};
use crate::site::domain::SiteId;
use crate::workboard::domain::{TaskId, TaskStatus, WorkTask};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

fn request(id: &str, status: RequestStatus, priority: Priority) -> ServiceRequest {
    ServiceRequest::from_record(RequestRecord {
        id: RequestId::new(id),
        title: format!("Request {id}"),
        status,
        priority,
        site_id: SiteId::new("OBJ-001"),
        created_at: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid seed date"),
        assignee: Assignee::Unassigned,
    })
}

fn task(id: &str, status: TaskStatus) -> WorkTask {
    WorkTask::new(
        TaskId::new(id),
        format!("Task {id}"),
        status,
        RequestId::new("REQ-001"),
        Assignee::Unassigned,
        NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid seed date"),
    )
}

#[fixture]
fn seeded_requests() -> Vec<ServiceRequest> {
    vec![
        request("REQ-001", RequestStatus::InProgress, Priority::High),
        request("REQ-002", RequestStatus::New, Priority::Medium),
        request("REQ-003", RequestStatus::Completed, Priority::Urgent),
        request("REQ-004", RequestStatus::InProgress, Priority::Low),
    ]
}

#[rstest]
fn status_histogram_counts_every_request(seeded_requests: Vec<ServiceRequest>) {
    let breakdown = RequestStatusBreakdown::from_requests(&seeded_requests);

    assert_eq!(breakdown.new, 1);
    assert_eq!(breakdown.in_progress, 2);
    assert_eq!(breakdown.completed, 1);
    assert_eq!(breakdown.cancelled, 0);
    assert_eq!(breakdown.total(), seeded_requests.len());
}

#[rstest]
fn priority_histogram_counts_every_request(seeded_requests: Vec<ServiceRequest>) {
    let breakdown = PriorityBreakdown::from_requests(&seeded_requests);

    assert_eq!(breakdown.urgent, 1);
    assert_eq!(breakdown.high, 1);
    assert_eq!(breakdown.medium, 1);
    assert_eq!(breakdown.low, 1);
    assert_eq!(breakdown.total(), seeded_requests.len());
}

#[rstest]
fn task_histogram_counts_every_task() {
    let tasks = vec![
        task("TSK-001", TaskStatus::InProgress),
        task("TSK-002", TaskStatus::Todo),
        task("TSK-003", TaskStatus::Done),
        task("TSK-004", TaskStatus::Review),
        task("TSK-005", TaskStatus::Backlog),
    ];

    let breakdown = TaskStatusBreakdown::from_tasks(&tasks);
    assert_eq!(breakdown.backlog, 1);
    assert_eq!(breakdown.todo, 1);
    assert_eq!(breakdown.in_progress, 1);
    assert_eq!(breakdown.review, 1);
    assert_eq!(breakdown.done, 1);
    assert_eq!(breakdown.total(), tasks.len());
}

#[rstest]
fn empty_collections_yield_zero_histograms() {
    assert_eq!(RequestStatusBreakdown::from_requests(&[]).total(), 0);
    assert_eq!(PriorityBreakdown::from_requests(&[]).total(), 0);
    assert_eq!(TaskStatusBreakdown::from_tasks(&[]).total(), 0);
}

#[rstest]
#[case(0, 0, 0)]
#[case(0, 4, 0)]
#[case(1, 4, 25)]
#[case(2, 3, 67)]
#[case(4, 4, 100)]
fn percentage_rounds_to_whole_numbers(#[case] part: usize, #[case] total: usize, #[case] expected: u8) {
    assert_eq!(percentage(part, total), expected);
}

#[rstest]
fn percentage_rounds_half_away_from_zero() {
    // 1 of 8 is 12.5 percent; the tie rounds up to 13.
    assert_eq!(percentage(1, 8), 13);
    // 3 of 8 is 37.5 percent; the tie rounds up to 38.
    assert_eq!(percentage(3, 8), 38);
}

#[rstest]
fn percentage_stays_within_bounds() {
    for part in 0..=10 {
        let value = percentage(part, 10);
        assert!(value <= 100);
    }
}

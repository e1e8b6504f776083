//! Domain-focused tests for request drafts, statuses, and display lookups.

use crate::request::domain::{
    Assignee, Priority, RequestDomainError, RequestDraft, RequestId, RequestStatus,
    NEUTRAL_COLOR_TOKEN, priority_color, priority_label, status_color, status_label,
};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn draft_rejects_blank_title() {
    let result = RequestDraft::new("   ", "OBJ-001", Priority::Medium);
    assert_eq!(result, Err(RequestDomainError::EmptyTitle));
}

#[rstest]
fn draft_rejects_blank_site_reference() {
    let result = RequestDraft::new("Fix pump", "  ", Priority::Medium);
    assert_eq!(result, Err(RequestDomainError::EmptySiteReference));
}

#[rstest]
fn draft_trims_title_and_site() {
    let draft = RequestDraft::new("  Fix pump  ", " OBJ-001 ", Priority::High).expect("valid draft");

    assert_eq!(draft.title(), "Fix pump");
    assert_eq!(draft.site_id().as_str(), "OBJ-001");
    assert_eq!(draft.priority(), Priority::High);
}

#[rstest]
fn open_sets_new_status_unassigned_and_todays_date() {
    let draft = RequestDraft::new("Fix pump", "OBJ-001", Priority::Urgent).expect("valid draft");
    let request = crate::request::domain::ServiceRequest::open(
        RequestId::from_sequence(5),
        draft,
        &DefaultClock,
    );

    assert_eq!(request.id().as_str(), "REQ-005");
    assert_eq!(request.status(), RequestStatus::New);
    assert_eq!(request.assignee(), &Assignee::Unassigned);
    assert_eq!(request.created_at(), Utc::now().date_naive());
}

#[rstest]
#[case(1, "REQ-001")]
#[case(5, "REQ-005")]
#[case(42, "REQ-042")]
#[case(123, "REQ-123")]
fn request_id_is_zero_padded_to_three_digits(#[case] sequence: usize, #[case] expected: &str) {
    assert_eq!(RequestId::from_sequence(sequence).as_str(), expected);
}

#[rstest]
#[case(RequestStatus::New, "new")]
#[case(RequestStatus::InProgress, "in_progress")]
#[case(RequestStatus::Completed, "completed")]
#[case(RequestStatus::Cancelled, "cancelled")]
fn status_tokens_round_trip(#[case] status: RequestStatus, #[case] token: &str) {
    assert_eq!(status.as_str(), token);
    assert_eq!(RequestStatus::try_from(token), Ok(status));
}

#[rstest]
fn status_parsing_normalizes_case_and_whitespace() {
    assert_eq!(
        RequestStatus::try_from(" In_Progress "),
        Ok(RequestStatus::InProgress)
    );
    assert!(RequestStatus::try_from("archived").is_err());
}

#[rstest]
fn status_lookups_fall_back_for_unknown_tokens() {
    assert_eq!(status_label("completed"), "Completed");
    assert_eq!(status_label("archived"), "archived");
    assert_eq!(status_color("new"), "bg-blue-500");
    assert_eq!(status_color("archived"), NEUTRAL_COLOR_TOKEN);
}

#[rstest]
fn priority_lookups_fall_back_for_unknown_tokens() {
    assert_eq!(priority_label("urgent"), "Urgent");
    assert_eq!(priority_label("blocker"), "blocker");
    assert_eq!(priority_color("high"), "bg-orange-500");
    assert_eq!(priority_color("blocker"), NEUTRAL_COLOR_TOKEN);
}

#[rstest]
fn assignee_round_trips_through_plain_strings() {
    assert_eq!(Assignee::from("unassigned"), Assignee::Unassigned);
    assert_eq!(Assignee::Unassigned.as_str(), "unassigned");

    let named = Assignee::from("A. Larsen");
    assert_eq!(named, Assignee::named("A. Larsen"));
    assert_eq!(String::from(named), "A. Larsen");
}

#[rstest]
fn priority_reporting_order_is_most_urgent_first() {
    assert_eq!(
        Priority::ALL,
        [
            Priority::Urgent,
            Priority::High,
            Priority::Medium,
            Priority::Low
        ]
    );
}

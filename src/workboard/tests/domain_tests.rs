//! Domain-focused tests for the task status pipeline.

use crate::request::domain::NEUTRAL_COLOR_TOKEN;
use crate::workboard::domain::{TaskStatus, task_status_color, task_status_label};
use rstest::rstest;

#[rstest]
fn pipeline_order_is_left_to_right() {
    assert_eq!(
        TaskStatus::PIPELINE,
        [
            TaskStatus::Backlog,
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done
        ]
    );
}

#[rstest]
#[case(TaskStatus::Backlog, "backlog")]
#[case(TaskStatus::Todo, "todo")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::Review, "review")]
#[case(TaskStatus::Done, "done")]
fn status_tokens_round_trip(#[case] status: TaskStatus, #[case] token: &str) {
    assert_eq!(status.as_str(), token);
    assert_eq!(TaskStatus::try_from(token), Ok(status));
}

#[rstest]
fn lookups_fall_back_for_unknown_tokens() {
    assert_eq!(task_status_label("review"), "In review");
    assert_eq!(task_status_label("blocked"), "blocked");
    assert_eq!(task_status_color("backlog"), "bg-gray-400");
    assert_eq!(task_status_color("blocked"), NEUTRAL_COLOR_TOKEN);
}

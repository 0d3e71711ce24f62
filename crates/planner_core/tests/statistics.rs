use chrono::{NaiveDate, NaiveDateTime};
use planner_core::{calculate_statistics, Priority, Task};
use uuid::Uuid;

#[test]
fn empty_input_yields_zero_counters() {
    let stats = calculate_statistics(&[], at(2024, 2, 25));

    assert_eq!(stats.total, 0);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.overdue, 0);
}

#[test]
fn essay_and_quiz_before_deadline() {
    // Essay due 2024-03-01 (incomplete), Quiz due 2024-02-20 (completed),
    // observed at 2024-02-25: the essay is upcoming, not overdue.
    let stats = calculate_statistics(&essay_and_quiz(), at(2024, 2, 25));

    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.overdue, 0);
}

#[test]
fn essay_and_quiz_after_deadline() {
    // Same tasks observed at 2024-03-05: the essay became overdue.
    let stats = calculate_statistics(&essay_and_quiz(), at(2024, 3, 5));

    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.overdue, 1);
}

#[test]
fn pending_is_total_minus_completed_and_bounds_overdue() {
    let course = Uuid::new_v4();
    let now = at(2024, 2, 25);
    let mut tasks = vec![
        Task::new("a", course, at(2024, 2, 20), Priority::Low),
        Task::new("b", course, at(2024, 2, 25), Priority::Medium),
        Task::new("c", course, at(2024, 3, 2), Priority::High),
        Task::new("d", course, at(2024, 2, 1), Priority::High),
    ];
    tasks[2].completed = true;

    let stats = calculate_statistics(&tasks, now);
    assert_eq!(stats.pending, stats.total - stats.completed);
    assert!(stats.overdue <= stats.pending);
    assert_eq!(stats.overdue, 2);
}

#[test]
fn works_on_course_filtered_subsets() {
    let math = Uuid::new_v4();
    let history = Uuid::new_v4();
    let now = at(2024, 2, 25);
    let tasks = vec![
        Task::new("problem set", math, at(2024, 2, 20), Priority::High),
        Task::new("reading", history, at(2024, 3, 1), Priority::Low),
    ];

    let math_tasks: Vec<Task> = tasks
        .iter()
        .filter(|task| task.course_id == math)
        .cloned()
        .collect();
    let stats = calculate_statistics(&math_tasks, now);

    assert_eq!(stats.total, 1);
    assert_eq!(stats.overdue, 1);
}

fn essay_and_quiz() -> Vec<Task> {
    let course = Uuid::new_v4();
    let essay = Task::new("Essay", course, at(2024, 3, 1), Priority::High);
    let mut quiz = Task::new("Quiz", course, at(2024, 2, 20), Priority::Low);
    quiz.completed = true;
    vec![essay, quiz]
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

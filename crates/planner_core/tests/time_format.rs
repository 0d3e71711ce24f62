use chrono::{NaiveDate, NaiveDateTime};
use planner_core::{format_date, format_relative_time};

#[test]
fn format_date_is_calendar_date_without_time() {
    assert_eq!(format_date(at(2024, 3, 1, 14, 30)), "Mar 1, 2024");
    assert_eq!(format_date(at(2024, 12, 25, 0, 0)), "Dec 25, 2024");
}

#[test]
fn same_day_is_today_regardless_of_clock() {
    let now = at(2024, 2, 25, 9, 0);

    assert_eq!(format_relative_time(at(2024, 2, 25, 23, 59), now), "today");
    assert_eq!(format_relative_time(at(2024, 2, 25, 0, 0), now), "today");
}

#[test]
fn adjacent_days_use_singular_phrases() {
    let now = at(2024, 2, 25, 9, 0);

    assert_eq!(format_relative_time(at(2024, 2, 26, 8, 0), now), "tomorrow");
    assert_eq!(format_relative_time(at(2024, 2, 24, 22, 0), now), "yesterday");
}

#[test]
fn future_days_are_phrased_as_in_n_days() {
    let now = at(2024, 2, 25, 9, 0);

    assert_eq!(format_relative_time(at(2024, 2, 28, 9, 0), now), "in 3 days");
    assert_eq!(format_relative_time(at(2024, 3, 6, 9, 0), now), "in 10 days");
}

#[test]
fn past_days_are_phrased_as_n_days_ago() {
    let now = at(2024, 2, 25, 9, 0);

    assert_eq!(format_relative_time(at(2024, 2, 23, 9, 0), now), "2 days ago");
    assert_eq!(
        format_relative_time(at(2024, 1, 26, 9, 0), now),
        "30 days ago"
    );
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

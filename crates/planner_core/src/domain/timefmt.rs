//! Date and relative-time formatting for display.
//!
//! # Invariants
//! - Output is deterministic and locale-independent.
//! - Relative phrasing is based on whole-day difference after both instants
//!   are reduced to their calendar day; zero days is always "today".

use chrono::NaiveDateTime;

/// Formats an instant as a human-readable calendar date, e.g. `"Mar 1, 2024"`.
///
/// Consumers need no time-of-day precision.
pub fn format_date(instant: NaiveDateTime) -> String {
    instant.format("%b %-d, %Y").to_string()
}

/// Phrases an instant relative to `now`: "today", "tomorrow", "in 3 days",
/// "yesterday", "2 days ago".
///
/// `now` is explicit so callers and tests control the reference instant.
pub fn format_relative_time(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = (instant.date() - now.date()).num_days();

    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        n if n > 1 => format!("in {n} days"),
        n => format!("{} days ago", -n),
    }
}

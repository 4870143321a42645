//! Date and interval arithmetic for the farm's derived metrics.
//!
//! All comparisons are on calendar dates; time-of-day is ignored throughout.
//! Callers evaluate "today" once per query and pass it down so every figure
//! inside one query is computed against the same date.

use chrono::NaiveDate;
use shared::DaysAway;

/// Signed whole-day difference `to - from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Days elapsed since `start`, never negative.
pub fn days_elapsed(start: NaiveDate, today: NaiveDate) -> i64 {
    days_between(start, today).max(0)
}

/// Days until `target`; negative when the target has passed (interpreted by
/// callers as "due now / overdue").
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    days_between(today, target)
}

/// Percentage progress of `today` through the window `[start, end]`, rounded
/// and clamped to 0..=100. Before the window: 0. After it: 100.
pub fn progress_percent(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> u8 {
    if today < start {
        return 0;
    }
    if today >= end {
        return 100;
    }
    let total = days_between(start, end);
    if total <= 0 {
        return 100;
    }
    let elapsed = days_between(start, today);
    ((100.0 * elapsed as f64 / total as f64).round() as i64).clamp(0, 100) as u8
}

/// Relative "days away" label for a scheduled date.
pub fn days_away(event_date: NaiveDate, today: NaiveDate) -> DaysAway {
    match days_remaining(event_date, today) {
        0 => DaysAway::Today,
        n if n < 0 => DaysAway::Overdue,
        n => DaysAway::Remaining(n),
    }
}

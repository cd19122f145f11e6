//! Streak computation over the completion log.

use chrono::{Duration, NaiveDate};

use crate::completions::CompletionLog;
use crate::date::day_key;

/// Rolling window scanned by [`best_streak`]: today plus the 365 days before.
///
/// Bounds the scan cost regardless of habit age; runs older than the window
/// are not counted. Full-history scanning was considered and rejected, see
/// DESIGN.md.
pub const BEST_STREAK_WINDOW_DAYS: i64 = 366;

/// Consecutive completed days ending today or yesterday, whichever is more
/// recent.
///
/// Today not being done yet does not break a streak that ran through
/// yesterday; the walk simply starts one day earlier.
pub fn current_streak(log: &CompletionLog, habit_id: &str, today: NaiveDate) -> u32 {
    let mut day = today;
    if !log.is_completed(habit_id, &day_key(day)) {
        day -= Duration::days(1);
    }
    let mut streak = 0;
    while log.is_completed(habit_id, &day_key(day)) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive completed days within the trailing window.
pub fn best_streak(log: &CompletionLog, habit_id: &str, today: NaiveDate) -> u32 {
    let start = today - Duration::days(BEST_STREAK_WINDOW_DAYS - 1);
    let mut best = 0;
    let mut run = 0;
    for offset in 0..BEST_STREAK_WINDOW_DAYS {
        let day = start + Duration::days(offset);
        if log.is_completed(habit_id, &day_key(day)) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

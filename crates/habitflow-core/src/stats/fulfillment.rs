//! Per-habit fulfillment: is a habit "done" for the day?
//!
//! Daily and weekday habits must be completed on the day itself. Quota
//! habits (3x, weekly) count as fulfilled for the rest of the week once
//! their weekly target is met, even without a completion that day.

use chrono::{Datelike, Duration, NaiveDate};

use crate::completions::CompletionLog;
use crate::date::{day_key, week_start};
use crate::model::Habit;

/// Completions for `habit_id` in the ISO week containing `reference`.
///
/// Counts the 7 days starting at the week's Monday, stopping at and
/// excluding any day strictly after `reference` -- future days within the
/// current week never count.
pub fn weekly_completions(log: &CompletionLog, habit_id: &str, reference: NaiveDate) -> u32 {
    let start = week_start(reference);
    (0..7)
        .map(|offset| start + Duration::days(offset))
        .take_while(|day| *day <= reference)
        .filter(|day| log.is_completed(habit_id, &day_key(*day)))
        .count() as u32
}

/// Whether the habit is satisfied for `today`.
pub fn is_fulfilled(log: &CompletionLog, habit: &Habit, today: NaiveDate) -> bool {
    if log.is_completed(&habit.id, &day_key(today)) {
        return true;
    }
    habit.frequency.has_weekly_quota()
        && weekly_completions(log, &habit.id, today) >= habit.frequency.weekly_target()
}

/// Active habits due on the given calendar day.
pub fn due_on(habits: &[Habit], date: NaiveDate) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|h| !h.archived && h.frequency.is_due_on(date.weekday()))
        .collect()
}

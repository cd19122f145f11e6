//! Dashboard aggregates: daily and weekly rollups, category bars, streak
//! leaders.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::completions::CompletionLog;
use crate::date::{day_key, week_start};
use crate::model::{Category, Habit};
use crate::stats::fulfillment::{due_on, is_fulfilled};
use crate::stats::streaks::current_streak;

/// Today's fulfillment headline: due vs fulfilled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub due: usize,
    pub fulfilled: usize,
    pub percent: u8,
}

/// One day of the trailing-week chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRate {
    pub day: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

/// Per-category fulfillment for today's due habits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub fulfilled: usize,
    pub total: usize,
}

/// A habit with a running streak, for the streak leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakLeader {
    pub habit_id: String,
    pub name: String,
    pub streak: u32,
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Fulfilled vs due count for `today`.
pub fn daily_summary(habits: &[Habit], log: &CompletionLog, today: NaiveDate) -> DailySummary {
    let due = due_on(habits, today);
    let fulfilled = due.iter().filter(|h| is_fulfilled(log, h, today)).count();
    DailySummary {
        due: due.len(),
        fulfilled,
        percent: percent(fulfilled, due.len()),
    }
}

/// Completion rate for this week, Monday through `today` inclusive.
///
/// Each day's denominator is the count of all active habits, not only the
/// habits due that day. That asymmetry with the daily fulfillment check is
/// legacy behavior kept on purpose (see DESIGN.md).
pub fn weekly_rate(habits: &[Habit], log: &CompletionLog, today: NaiveDate) -> u8 {
    let active: Vec<&Habit> = habits.iter().filter(|h| !h.archived).collect();
    let start = week_start(today);
    let mut total = 0;
    let mut done = 0;
    for offset in 0..7 {
        let day = start + Duration::days(offset);
        if day > today {
            break;
        }
        let key = day_key(day);
        total += active.len();
        done += active.iter().filter(|h| log.is_completed(&h.id, &key)).count();
    }
    percent(done, total)
}

/// Per-day completion percentage for the trailing 7 days, oldest first.
///
/// Denominator is all active habits; days with no habits report 0%.
pub fn trailing_week(habits: &[Habit], log: &CompletionLog, today: NaiveDate) -> Vec<DayRate> {
    let active: Vec<&Habit> = habits.iter().filter(|h| !h.archived).collect();
    (0..7)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let key = day_key(day);
            let completed = active.iter().filter(|h| log.is_completed(&h.id, &key)).count();
            DayRate {
                percent: percent(completed, active.len()),
                day: key,
                completed,
                total: active.len(),
            }
        })
        .collect()
}

/// Fulfilled/total per category over today's due habits, catalog order.
/// Categories with no due habits are omitted.
pub fn category_breakdown(
    habits: &[Habit],
    log: &CompletionLog,
    today: NaiveDate,
) -> Vec<CategoryProgress> {
    let due = due_on(habits, today);
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let in_category: Vec<&&Habit> = due.iter().filter(|h| h.category == category).collect();
            if in_category.is_empty() {
                return None;
            }
            let fulfilled = in_category
                .iter()
                .filter(|h| is_fulfilled(log, h, today))
                .count();
            Some(CategoryProgress {
                category,
                fulfilled,
                total: in_category.len(),
            })
        })
        .collect()
}

/// Active habits with a streak > 0, longest first, capped at `limit`.
pub fn streak_leaders(
    habits: &[Habit],
    log: &CompletionLog,
    today: NaiveDate,
    limit: usize,
) -> Vec<StreakLeader> {
    let mut leaders: Vec<StreakLeader> = habits
        .iter()
        .filter(|h| !h.archived)
        .filter_map(|h| {
            let streak = current_streak(log, &h.id, today);
            (streak > 0).then(|| StreakLeader {
                habit_id: h.id.clone(),
                name: h.name.clone(),
                streak,
            })
        })
        .collect();
    leaders.sort_by(|a, b| b.streak.cmp(&a.streak));
    leaders.truncate(limit);
    leaders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frequency;

    fn day(s: &str) -> NaiveDate {
        crate::date::parse_day_key(s).unwrap()
    }

    fn habit(id: &str, category: Category, frequency: Frequency) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("Habit {id}"),
            description: String::new(),
            category,
            frequency,
            stack: String::new(),
            created_at: "2026-08-01".to_string(),
            archived: false,
        }
    }

    #[test]
    fn daily_summary_counts_fulfilled_due_habits() {
        let habits = vec![
            habit("h1", Category::Health, Frequency::Daily),
            habit("h2", Category::Fitness, Frequency::Daily),
        ];
        let mut log = CompletionLog::new();
        log.set("h1", "2026-08-25", true);

        let summary = daily_summary(&habits, &log, day("2026-08-25"));
        assert_eq!(summary.due, 2);
        assert_eq!(summary.fulfilled, 1);
        assert_eq!(summary.percent, 50);
    }

    #[test]
    fn daily_summary_with_no_habits_is_zero_percent() {
        let summary = daily_summary(&[], &CompletionLog::new(), day("2026-08-25"));
        assert_eq!(summary.percent, 0);
    }

    #[test]
    fn weekly_rate_divides_by_all_active_habits_per_day() {
        let habits = vec![
            habit("h1", Category::Health, Frequency::Daily),
            habit("h2", Category::Health, Frequency::Weekly),
        ];
        let mut log = CompletionLog::new();
        // Monday and Tuesday of the week of 2026-08-24; h1 done both days.
        log.set("h1", "2026-08-24", true);
        log.set("h1", "2026-08-25", true);

        // Two days elapsed, 2 habits each day => 2 done of 4 slots.
        assert_eq!(weekly_rate(&habits, &log, day("2026-08-25")), 50);
    }

    #[test]
    fn weekly_rate_ignores_future_days_of_the_week() {
        let habits = vec![habit("h1", Category::Health, Frequency::Daily)];
        let mut log = CompletionLog::new();
        log.set("h1", "2026-08-24", true);
        // Monday itself: 1 of 1.
        assert_eq!(weekly_rate(&habits, &log, day("2026-08-24")), 100);
    }

    #[test]
    fn trailing_week_is_oldest_first_and_seven_days_long() {
        let habits = vec![habit("h1", Category::Health, Frequency::Daily)];
        let mut log = CompletionLog::new();
        log.set("h1", "2026-08-25", true);

        let week = trailing_week(&habits, &log, day("2026-08-25"));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, "2026-08-19");
        assert_eq!(week[6].day, "2026-08-25");
        assert_eq!(week[6].percent, 100);
        assert_eq!(week[5].percent, 0);
    }

    #[test]
    fn category_breakdown_groups_due_habits() {
        let habits = vec![
            habit("h1", Category::Health, Frequency::Daily),
            habit("h2", Category::Health, Frequency::Daily),
            habit("h3", Category::Learning, Frequency::Daily),
        ];
        let mut log = CompletionLog::new();
        log.set("h1", "2026-08-25", true);
        log.set("h3", "2026-08-25", true);

        let breakdown = category_breakdown(&habits, &log, day("2026-08-25"));
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, Category::Health);
        assert_eq!(breakdown[0].fulfilled, 1);
        assert_eq!(breakdown[0].total, 2);
        assert_eq!(breakdown[1].category, Category::Learning);
        assert_eq!(breakdown[1].fulfilled, 1);
    }

    #[test]
    fn streak_leaders_sorted_and_capped() {
        let habits = vec![
            habit("h1", Category::Health, Frequency::Daily),
            habit("h2", Category::Health, Frequency::Daily),
            habit("h3", Category::Health, Frequency::Daily),
        ];
        let mut log = CompletionLog::new();
        for d in ["2026-08-24", "2026-08-25"] {
            log.set("h2", d, true);
        }
        log.set("h3", "2026-08-25", true);

        let leaders = streak_leaders(&habits, &log, day("2026-08-25"), 5);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].habit_id, "h2");
        assert_eq!(leaders[0].streak, 2);

        let capped = streak_leaders(&habits, &log, day("2026-08-25"), 1);
        assert_eq!(capped.len(), 1);
    }
}

//! Achievement badges.
//!
//! Badges are derived on demand from current state; nothing is persisted.
//! A badge can therefore be un-earned if the underlying state regresses,
//! e.g. after deleting a habit. That matches the legacy behavior and is
//! recorded as a deliberate choice in DESIGN.md.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{AppState, Habit};
use crate::stats::streaks::current_streak;

/// Badge identifiers, one per catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    FirstHabit,
    Streak3,
    Streak7,
    Streak14,
    Streak30,
    Habits5,
    Habits10,
    Score100,
    Score500,
    FirstGoal,
    Mood7,
    PerfectDay,
}

/// A catalog entry: identity plus display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed badge catalog, in display order.
pub const CATALOG: [Badge; 12] = [
    Badge { id: BadgeId::FirstHabit, name: "First Step", description: "Created your first habit" },
    Badge { id: BadgeId::Streak3, name: "3-Day Streak", description: "3 days in a row" },
    Badge { id: BadgeId::Streak7, name: "Week Warrior", description: "7 days in a row" },
    Badge { id: BadgeId::Streak14, name: "Two Weeks Strong", description: "14-day streak" },
    Badge { id: BadgeId::Streak30, name: "Month Hero", description: "30-day streak" },
    Badge { id: BadgeId::Habits5, name: "Habit Collector", description: "Created 5 habits" },
    Badge { id: BadgeId::Habits10, name: "Habit Master", description: "Created 10 habits" },
    Badge { id: BadgeId::Score100, name: "Score: 100", description: "Reached 100 points" },
    Badge { id: BadgeId::Score500, name: "Score: 500", description: "Reached 500 points" },
    Badge { id: BadgeId::FirstGoal, name: "Goal Setter", description: "Created your first goal" },
    Badge { id: BadgeId::Mood7, name: "Self Reflection", description: "Tracked mood on 7 days" },
    Badge { id: BadgeId::PerfectDay, name: "Perfect Day", description: "Completed every habit in one day" },
];

/// Evaluation result for one badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStatus {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

/// Whether the badge's predicate currently holds.
pub fn is_earned(id: BadgeId, state: &AppState, today: NaiveDate) -> bool {
    match id {
        BadgeId::FirstHabit => !state.habits.is_empty(),
        BadgeId::Streak3 => any_streak_at_least(state, today, 3),
        BadgeId::Streak7 => any_streak_at_least(state, today, 7),
        BadgeId::Streak14 => any_streak_at_least(state, today, 14),
        BadgeId::Streak30 => any_streak_at_least(state, today, 30),
        BadgeId::Habits5 => state.habits.len() >= 5,
        BadgeId::Habits10 => state.habits.len() >= 10,
        BadgeId::Score100 => state.score >= 100,
        BadgeId::Score500 => state.score >= 500,
        BadgeId::FirstGoal => !state.goals.is_empty(),
        BadgeId::Mood7 => state.moods.len() >= 7,
        BadgeId::PerfectDay => has_perfect_day(state),
    }
}

/// Evaluate the whole catalog against current state.
pub fn evaluate(state: &AppState, today: NaiveDate) -> Vec<BadgeStatus> {
    CATALOG
        .iter()
        .map(|badge| BadgeStatus {
            id: badge.id,
            name: badge.name,
            description: badge.description,
            earned: is_earned(badge.id, state, today),
        })
        .collect()
}

fn any_streak_at_least(state: &AppState, today: NaiveDate, n: u32) -> bool {
    state
        .active_habits()
        .any(|h| current_streak(&state.completions, &h.id, today) >= n)
}

/// A day on which every currently-active habit was completed.
fn has_perfect_day(state: &AppState) -> bool {
    let active: Vec<&Habit> = state.active_habits().collect();
    if active.is_empty() {
        return false;
    }
    state.completions.days().any(|(_, entry)| {
        active
            .iter()
            .all(|h| entry.get(&h.id).copied().unwrap_or(false))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Frequency};

    fn day(s: &str) -> NaiveDate {
        crate::date::parse_day_key(s).unwrap()
    }

    fn habit(id: &str) -> Habit {
        Habit {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: Category::Health,
            frequency: Frequency::Daily,
            stack: String::new(),
            created_at: "2026-08-01".to_string(),
            archived: false,
        }
    }

    #[test]
    fn empty_state_earns_nothing() {
        let state = AppState::default();
        let statuses = evaluate(&state, day("2026-08-25"));
        assert_eq!(statuses.len(), CATALOG.len());
        assert!(statuses.iter().all(|s| !s.earned));
    }

    #[test]
    fn streak_badges_follow_current_streak() {
        let mut state = AppState::default();
        state.habits.push(habit("h1"));
        for d in ["2026-08-23", "2026-08-24", "2026-08-25"] {
            state.completions.set("h1", d, true);
        }
        let today = day("2026-08-25");
        assert!(is_earned(BadgeId::Streak3, &state, today));
        assert!(!is_earned(BadgeId::Streak7, &state, today));
    }

    #[test]
    fn habit_count_badges_include_archived_habits() {
        let mut state = AppState::default();
        for i in 0..5 {
            let mut h = habit(&format!("h{i}"));
            h.archived = i == 0;
            state.habits.push(h);
        }
        assert!(is_earned(BadgeId::Habits5, &state, day("2026-08-25")));
        assert!(!is_earned(BadgeId::Habits10, &state, day("2026-08-25")));
    }

    #[test]
    fn perfect_day_requires_all_active_habits_on_one_day() {
        let mut state = AppState::default();
        state.habits.push(habit("h1"));
        state.habits.push(habit("h2"));
        state.completions.set("h1", "2026-08-20", true);
        assert!(!is_earned(BadgeId::PerfectDay, &state, day("2026-08-25")));

        state.completions.set("h2", "2026-08-20", true);
        assert!(is_earned(BadgeId::PerfectDay, &state, day("2026-08-25")));
    }

    #[test]
    fn badges_regress_when_state_regresses() {
        let mut state = AppState::default();
        state.habits.push(habit("h1"));
        assert!(is_earned(BadgeId::FirstHabit, &state, day("2026-08-25")));

        state.habits.clear();
        assert!(!is_earned(BadgeId::FirstHabit, &state, day("2026-08-25")));
    }

    #[test]
    fn mood_badge_counts_days_with_entries() {
        let mut state = AppState::default();
        for d in 1..=7 {
            state
                .moods
                .insert(format!("2026-08-{d:02}"), crate::model::MoodEntry::default());
        }
        assert!(is_earned(BadgeId::Mood7, &state, day("2026-08-25")));
    }
}

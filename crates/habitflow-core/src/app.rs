//! Aggregate application root: owned state plus the mutation API.
//!
//! [`App`] is the single explicitly-owned instance of the state; there are
//! no ambient globals. All operations are synchronous and run to completion
//! on the calling thread. Every mutation is followed by a blocking
//! write-through save; a failed save is logged and the in-memory mutation
//! stands (the persisted copy may lag behind, an accepted risk of the
//! write-through design).

use chrono::NaiveDate;
use log::warn;
use uuid::Uuid;

use crate::date::{self, day_key};
use crate::error::{ImportError, Result};
use crate::events::Event;
use crate::model::{AppState, Goal, GoalDraft, Habit, HabitDraft, Mood, MoodEntry};
use crate::stats::{
    badges, fulfillment, goals, heatmap, streaks, summary, BadgeStatus, DailySummary, DayRate,
    GoalProgress, HeatmapDay, StreakLeader,
};
use crate::storage::StateStore;

/// Points awarded for completing a habit (and revoked on un-complete).
pub const COMPLETION_POINTS: u32 = 10;
/// Bonus awarded when every habit due today is fulfilled.
pub const ALL_DONE_BONUS: u32 = 25;
/// Points awarded for creating a habit.
pub const HABIT_CREATED_POINTS: u32 = 5;

/// The application: aggregate state plus its store.
pub struct App {
    state: AppState,
    store: StateStore,
}

impl App {
    /// Open the app against the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared. A missing
    /// or corrupt state blob is not an error; it loads as defaults.
    pub fn open() -> Result<Self> {
        Ok(Self::with_store(StateStore::open()?))
    }

    /// Open the app against an explicit store.
    pub fn with_store(store: StateStore) -> Self {
        let state = store.load();
        Self { state, store }
    }

    /// Read access to the aggregate state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state) {
            warn!("failed to persist state: {err}");
        }
    }

    // ── Habits ──────────────────────────────────────────────────────────

    /// Create a habit from a draft. Awards creation points.
    pub fn add_habit(&mut self, draft: HabitDraft) -> Habit {
        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            frequency: draft.frequency,
            stack: draft.stack,
            created_at: date::today_key(),
            archived: false,
        };
        self.state.habits.push(habit.clone());
        self.state.score += HABIT_CREATED_POINTS;
        self.persist();
        habit
    }

    /// Update a habit in place, preserving id and creation date.
    /// Returns false if the id is unknown.
    pub fn update_habit(&mut self, id: &str, draft: HabitDraft) -> bool {
        let Some(habit) = self.state.habits.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        habit.name = draft.name;
        habit.description = draft.description;
        habit.category = draft.category;
        habit.frequency = draft.frequency;
        habit.stack = draft.stack;
        self.persist();
        true
    }

    /// Archive or restore a habit. Archived habits are never due and keep
    /// their completion history.
    pub fn set_archived(&mut self, id: &str, archived: bool) -> bool {
        let Some(habit) = self.state.habits.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        habit.archived = archived;
        self.persist();
        true
    }

    /// Hard-delete a habit, cascading to its completion entries.
    /// Returns false if the id is unknown.
    pub fn delete_habit(&mut self, id: &str) -> bool {
        let before = self.state.habits.len();
        self.state.habits.retain(|h| h.id != id);
        if self.state.habits.len() == before {
            return false;
        }
        self.state.completions.remove_habit(id);
        self.persist();
        true
    }

    /// Active habits due today.
    pub fn due_today(&self) -> Vec<&Habit> {
        fulfillment::due_on(&self.state.habits, date::today())
    }

    // ── Completions ─────────────────────────────────────────────────────

    /// Whether the habit was completed on the given day.
    pub fn is_completed(&self, habit_id: &str, day: NaiveDate) -> bool {
        self.state.completions.is_completed(habit_id, &day_key(day))
    }

    /// Toggle today's completion for a habit.
    pub fn toggle_completion(&mut self, habit_id: &str) -> Vec<Event> {
        self.toggle_completion_on(habit_id, date::today())
    }

    /// Toggle a completion for an arbitrary day.
    ///
    /// The toggle applies even for an unknown habit id; only the
    /// weekly-target check needs the habit record and silently skips
    /// without one.
    pub fn toggle_completion_on(&mut self, habit_id: &str, day: NaiveDate) -> Vec<Event> {
        let events = apply_toggle(&mut self.state, habit_id, day, date::today());
        self.persist();
        events
    }

    // ── Moods ───────────────────────────────────────────────────────────

    /// Set today's mood, leaving any note untouched.
    pub fn set_mood(&mut self, mood: Mood) {
        self.set_mood_on(mood, date::today());
    }

    /// Set the mood for an arbitrary day.
    pub fn set_mood_on(&mut self, mood: Mood, day: NaiveDate) {
        let entry = self.state.moods.entry(day_key(day)).or_default();
        entry.mood = Some(mood);
        self.persist();
    }

    /// Set today's mood note, leaving the mood token untouched.
    pub fn set_mood_note(&mut self, note: String) {
        let entry = self.state.moods.entry(date::today_key()).or_default();
        entry.note = Some(note);
        self.persist();
    }

    /// Mood entry for a day, if any.
    pub fn mood(&self, day: NaiveDate) -> Option<&MoodEntry> {
        self.state.moods.get(&day_key(day))
    }

    // ── Goals ───────────────────────────────────────────────────────────

    /// Create a goal from a draft.
    pub fn add_goal(&mut self, draft: GoalDraft) -> Goal {
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            deadline: draft.deadline,
            target_days: draft.target_days.max(1),
            linked_habits: dedupe(draft.linked_habits),
            created_at: date::today_key(),
        };
        self.state.goals.push(goal.clone());
        self.persist();
        goal
    }

    /// Update a goal in place, preserving id and creation date.
    /// Returns false if the id is unknown.
    pub fn update_goal(&mut self, id: &str, draft: GoalDraft) -> bool {
        let Some(goal) = self.state.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        goal.name = draft.name;
        goal.description = draft.description;
        goal.deadline = draft.deadline;
        goal.target_days = draft.target_days.max(1);
        goal.linked_habits = dedupe(draft.linked_habits);
        self.persist();
        true
    }

    /// Delete a goal. Returns false if the id is unknown.
    pub fn delete_goal(&mut self, id: &str) -> bool {
        let before = self.state.goals.len();
        self.state.goals.retain(|g| g.id != id);
        if self.state.goals.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Derived progress for a goal, or None for an unknown id.
    pub fn goal_progress(&self, id: &str) -> Option<GoalProgress> {
        self.state
            .goal(id)
            .map(|g| goals::goal_progress(g, &self.state.completions))
    }

    // ── Derived views ───────────────────────────────────────────────────

    pub fn current_streak(&self, habit_id: &str) -> u32 {
        streaks::current_streak(&self.state.completions, habit_id, date::today())
    }

    pub fn best_streak(&self, habit_id: &str) -> u32 {
        streaks::best_streak(&self.state.completions, habit_id, date::today())
    }

    pub fn weekly_completions(&self, habit_id: &str) -> u32 {
        fulfillment::weekly_completions(&self.state.completions, habit_id, date::today())
    }

    /// Whether the habit is fulfilled for today. False for an unknown id.
    pub fn is_fulfilled(&self, habit_id: &str) -> bool {
        self.state
            .habit(habit_id)
            .map(|h| fulfillment::is_fulfilled(&self.state.completions, h, date::today()))
            .unwrap_or(false)
    }

    pub fn daily_summary(&self) -> DailySummary {
        summary::daily_summary(&self.state.habits, &self.state.completions, date::today())
    }

    pub fn weekly_rate(&self) -> u8 {
        summary::weekly_rate(&self.state.habits, &self.state.completions, date::today())
    }

    pub fn trailing_week(&self) -> Vec<DayRate> {
        summary::trailing_week(&self.state.habits, &self.state.completions, date::today())
    }

    pub fn category_breakdown(&self) -> Vec<summary::CategoryProgress> {
        summary::category_breakdown(&self.state.habits, &self.state.completions, date::today())
    }

    pub fn streak_leaders(&self, limit: usize) -> Vec<StreakLeader> {
        summary::streak_leaders(&self.state.habits, &self.state.completions, date::today(), limit)
    }

    pub fn month_heatmap(&self, year: i32, month: u32) -> Vec<HeatmapDay> {
        heatmap::month_heatmap(&self.state.habits, &self.state.completions, year, month)
    }

    pub fn badges(&self) -> Vec<BadgeStatus> {
        badges::evaluate(&self.state, date::today())
    }

    // ── Import / export ─────────────────────────────────────────────────

    /// Serialize the full state blob for export.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /// Replace the entire state from a backup document.
    ///
    /// Missing top-level keys are filled from defaults (shallow merge). On
    /// parse failure the prior state is left untouched.
    ///
    /// # Errors
    /// Returns [`ImportError::ParseFailed`] for an invalid document.
    pub fn import_json(&mut self, raw: &str) -> Result<(), ImportError> {
        let imported = AppState::from_json(raw)?;
        self.state = imported;
        self.persist();
        Ok(())
    }

    /// Reset everything to defaults.
    pub fn clear_all(&mut self) {
        self.state = AppState::default();
        self.persist();
    }
}

fn dedupe(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    let mut out = ids;
    out.retain(|id| seen.insert(id.clone()));
    out
}

/// Flip a completion and apply the scoring side effects.
///
/// On false -> true: award completion points, then re-check the all-done
/// bonus for today and the habit's weekly target. On true -> false: revoke
/// the points, floored at zero. The bonus re-fires on every qualifying
/// toggle; see DESIGN.md for why that legacy behavior is kept.
fn apply_toggle(
    state: &mut AppState,
    habit_id: &str,
    day: NaiveDate,
    today: NaiveDate,
) -> Vec<Event> {
    let key = day_key(day);
    let now_done = state.completions.toggle(habit_id, &key);
    let mut events = Vec::new();

    if now_done {
        state.score += COMPLETION_POINTS;
        events.push(Event::CompletionMarked {
            habit_id: habit_id.to_string(),
            day: key,
            points: COMPLETION_POINTS,
        });

        let all_done = {
            let due = fulfillment::due_on(&state.habits, today);
            !due.is_empty()
                && due
                    .iter()
                    .all(|h| fulfillment::is_fulfilled(&state.completions, h, today))
        };
        if all_done {
            state.score += ALL_DONE_BONUS;
            events.push(Event::AllHabitsDone {
                day: day_key(today),
                bonus: ALL_DONE_BONUS,
            });
        }

        if let Some(habit) = state.habits.iter().find(|h| h.id == habit_id) {
            if habit.frequency.has_weekly_quota() {
                let completed =
                    fulfillment::weekly_completions(&state.completions, habit_id, today);
                let target = habit.frequency.weekly_target();
                if completed == target {
                    events.push(Event::WeeklyTargetReached {
                        habit_id: habit_id.to_string(),
                        habit_name: habit.name.clone(),
                        completed,
                        target,
                    });
                }
            }
        }
    } else {
        let revoked = COMPLETION_POINTS.min(state.score);
        state.score -= revoked;
        events.push(Event::CompletionCleared {
            habit_id: habit_id.to_string(),
            day: key,
            points_revoked: revoked,
        });
    }

    events
}

//! Data model: habits, moods, goals, settings, and the aggregate state.
//!
//! Field names serialize in camelCase to stay wire-compatible with the
//! persisted state blob and exported backup documents. Every top-level field
//! of [`AppState`] carries a serde default, which is what gives load and
//! import their shallow merge-over-defaults semantics: a missing top-level
//! key is filled from defaults, nested objects are taken as-is.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::completions::CompletionLog;

/// Habit category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Fitness,
    Mindfulness,
    Productivity,
    Social,
    Learning,
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 7] = [
        Category::Health,
        Category::Fitness,
        Category::Mindfulness,
        Category::Productivity,
        Category::Social,
        Category::Learning,
        Category::Other,
    ];
}

/// Required cadence of a habit.
///
/// The frequency policy is a pure lookup: a weekly target count plus a
/// "due today" predicate.
///
/// | frequency | weekly target | due today |
/// |-----------|---------------|-----------|
/// | daily     | 7             | always    |
/// | weekdays  | 5             | Mon-Fri   |
/// | 3x        | 3             | always    |
/// | weekly    | 1             | always    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekdays,
    #[serde(rename = "3x")]
    ThreeTimesWeekly,
    Weekly,
}

impl Frequency {
    /// Number of completions that satisfy one ISO week.
    pub fn weekly_target(self) -> u32 {
        match self {
            Frequency::Daily => 7,
            Frequency::Weekdays => 5,
            Frequency::ThreeTimesWeekly => 3,
            Frequency::Weekly => 1,
        }
    }

    /// Whether the habit is due on the given local weekday.
    ///
    /// 3x and weekly habits are due every day; the user chooses which days
    /// to actually complete them on.
    pub fn is_due_on(self, weekday: Weekday) -> bool {
        match self {
            Frequency::Weekdays => weekday.number_from_monday() <= 5,
            Frequency::Daily | Frequency::ThreeTimesWeekly | Frequency::Weekly => true,
        }
    }

    /// Whether this frequency counts against a sub-daily weekly quota.
    ///
    /// Quota frequencies are "fulfilled" for the rest of the week once the
    /// target is met, even without a completion on the day itself.
    pub fn has_weekly_quota(self) -> bool {
        matches!(self, Frequency::ThreeTimesWeekly | Frequency::Weekly)
    }
}

/// A recurring habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub frequency: Frequency,
    /// Optional habit-stacking note ("after I brush my teeth, ...").
    #[serde(default)]
    pub stack: String,
    /// Day key of creation.
    pub created_at: String,
    #[serde(default)]
    pub archived: bool,
}

/// User-editable habit fields, used for create and edit.
#[derive(Debug, Clone, Default)]
pub struct HabitDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub frequency: Frequency,
    pub stack: String,
}

/// Mood token for a day's check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Bad,
    Awful,
}

/// Mood check-in for one day. Mood and note are settable independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A user-defined goal tracked via completions of linked habits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Day key, or empty for no deadline.
    #[serde(default)]
    pub deadline: String,
    #[serde(default = "default_target_days")]
    pub target_days: u32,
    #[serde(default)]
    pub linked_habits: Vec<String>,
    pub created_at: String,
}

/// User-editable goal fields, used for create and edit.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub name: String,
    pub description: String,
    pub deadline: String,
    pub target_days: u32,
    pub linked_habits: Vec<String>,
}

fn default_target_days() -> u32 {
    30
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// User settings stored inside the state blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Aggregate application state: the single persisted blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub habits: Vec<Habit>,
    pub completions: CompletionLog,
    pub moods: BTreeMap<String, MoodEntry>,
    pub goals: Vec<Goal>,
    pub score: u32,
    pub settings: Settings,
}

impl AppState {
    /// Parse a state blob, filling missing top-level keys from defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Habits that are not archived.
    pub fn active_habits(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter().filter(|h| !h.archived)
    }

    /// Look up a habit by id.
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Look up a goal by id.
    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }
}

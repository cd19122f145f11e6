//! HabitFlow core library.
//!
//! Owns the domain model (habits, completions, moods, goals), the derived
//! statistics (streaks, fulfillment, summaries, heatmaps, badges), and the
//! JSON blob persistence. Frontends hold a single [`App`] and drive it
//! through its mutation and query API; all computation is synchronous and
//! every derived figure is recomputed from the completion log on demand.

pub mod app;
pub mod completions;
pub mod date;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod stats;
pub mod storage;

pub use app::{App, ALL_DONE_BONUS, COMPLETION_POINTS, HABIT_CREATED_POINTS};
pub use completions::CompletionLog;
pub use error::{CoreError, ImportError, Result, StorageError};
pub use events::Event;
pub use model::{
    AppState, Category, Frequency, Goal, GoalDraft, Habit, HabitDraft, Mood, MoodEntry, Settings,
    Theme,
};
pub use storage::{data_dir, export_file_name, StateStore};

//! Scoring-relevant transitions produce Events.
//!
//! The presentation layer (CLI, or a GUI shell) renders these as
//! notifications; the core never displays anything itself.

use serde::{Deserialize, Serialize};

/// Notification event emitted by mutation APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A completion flipped to done; points were awarded.
    CompletionMarked {
        habit_id: String,
        day: String,
        points: u32,
    },
    /// A completion flipped back to not-done; points were revoked (floored at 0).
    CompletionCleared {
        habit_id: String,
        day: String,
        points_revoked: u32,
    },
    /// Every habit due today is now fulfilled; bonus awarded.
    ///
    /// Re-fires on every qualifying toggle, matching the legacy scoring
    /// behavior (see DESIGN.md).
    AllHabitsDone { day: String, bonus: u32 },
    /// A quota habit's weekly target was reached by this completion.
    /// Fires exactly when the count first equals the target.
    WeeklyTargetReached {
        habit_id: String,
        habit_name: String,
        completed: u32,
        target: u32,
    },
}

//! Goal progress, derived from the completion history.

use serde::{Deserialize, Serialize};

use crate::completions::CompletionLog;
use crate::model::Goal;

/// Derived progress of a goal. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Distinct days with at least one linked habit completed.
    pub days_completed: u32,
    pub target_days: u32,
    /// Capped at 100.
    pub percent: u8,
}

/// Progress across the entire completion history, not bounded to a window.
pub fn goal_progress(goal: &Goal, log: &CompletionLog) -> GoalProgress {
    let days_completed = log
        .days()
        .filter(|(_, entry)| {
            goal.linked_habits
                .iter()
                .any(|id| entry.get(id).copied().unwrap_or(false))
        })
        .count() as u32;

    let target = goal.target_days.max(1);
    let percent = (f64::from(days_completed) / f64::from(target) * 100.0)
        .round()
        .min(100.0) as u8;

    GoalProgress {
        days_completed,
        target_days: goal.target_days,
        percent,
    }
}

//! Derived views over the completion log.
//!
//! Everything in here is a pure reader: functions take the habits and the
//! log plus an explicit reference date, and recompute their result on
//! demand. Nothing is cached and nothing is persisted.

pub mod badges;
pub mod fulfillment;
pub mod goals;
pub mod heatmap;
pub mod streaks;
pub mod summary;

pub use badges::{Badge, BadgeId, BadgeStatus, CATALOG};
pub use fulfillment::{due_on, is_fulfilled, weekly_completions};
pub use goals::{goal_progress, GoalProgress};
pub use heatmap::{heat_level, month_heatmap, HeatmapDay};
pub use streaks::{best_streak, current_streak, BEST_STREAK_WINDOW_DAYS};
pub use summary::{
    category_breakdown, daily_summary, streak_leaders, trailing_week, weekly_rate,
    CategoryProgress, DailySummary, DayRate, StreakLeader,
};

//! Completion log: which habits were done on which days.
//!
//! The log is a sparse day-key -> habit-id -> bool mapping. Absence of an
//! entry means "not completed"; day entries are created lazily on the first
//! toggle for that day and never pruned, except that deleting a habit strips
//! its key from every day entry (empty day entries are left in place).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sparse per-day completion log, keyed by `YYYY-MM-DD` day keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog(BTreeMap<String, BTreeMap<String, bool>>);

impl CompletionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `habit_id` was completed on `day`. False on any missing key.
    pub fn is_completed(&self, habit_id: &str, day: &str) -> bool {
        self.0
            .get(day)
            .and_then(|entry| entry.get(habit_id))
            .copied()
            .unwrap_or(false)
    }

    /// Set the completion flag, creating the day entry if absent.
    pub fn set(&mut self, habit_id: &str, day: &str, done: bool) {
        self.0
            .entry(day.to_string())
            .or_default()
            .insert(habit_id.to_string(), done);
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle(&mut self, habit_id: &str, day: &str) -> bool {
        let now_done = !self.is_completed(habit_id, day);
        self.set(habit_id, day, now_done);
        now_done
    }

    /// Remove a habit's key from every day entry.
    ///
    /// Day entries that become empty are kept; the log stays sparse either way.
    pub fn remove_habit(&mut self, habit_id: &str) {
        for entry in self.0.values_mut() {
            entry.remove(habit_id);
        }
    }

    /// Iterate over all day entries in chronological (lexicographic) order.
    pub fn days(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, bool>)> {
        self.0.iter().map(|(day, entry)| (day.as_str(), entry))
    }

    /// Number of day entries in the log (including empty ones).
    pub fn day_count(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absence_means_not_completed() {
        let log = CompletionLog::new();
        assert!(!log.is_completed("h1", "2026-08-25"));
    }

    #[test]
    fn toggle_creates_day_entry_lazily() {
        let mut log = CompletionLog::new();
        assert_eq!(log.day_count(), 0);
        assert!(log.toggle("h1", "2026-08-25"));
        assert_eq!(log.day_count(), 1);
        assert!(log.is_completed("h1", "2026-08-25"));
    }

    #[test]
    fn remove_habit_leaves_other_habits_untouched() {
        let mut log = CompletionLog::new();
        for day in ["2026-08-01", "2026-08-02", "2026-08-03", "2026-08-04", "2026-08-05"] {
            log.set("h1", day, true);
        }
        log.set("h2", "2026-08-03", true);

        log.remove_habit("h1");

        for day in ["2026-08-01", "2026-08-02", "2026-08-03", "2026-08-04", "2026-08-05"] {
            assert!(!log.is_completed("h1", day));
        }
        assert!(log.is_completed("h2", "2026-08-03"));
        // Day entries stay, even the now-empty ones.
        assert_eq!(log.day_count(), 5);
    }

    #[test]
    fn serializes_as_plain_nested_map() {
        let mut log = CompletionLog::new();
        log.set("h1", "2026-08-25", true);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json, serde_json::json!({ "2026-08-25": { "h1": true } }));
    }

    proptest! {
        /// A second toggle restores the prior value for any habit id and day key.
        #[test]
        fn double_toggle_is_involution(habit_id in "[a-z0-9-]{1,16}", day in "20[0-9]{2}-[01][0-9]-[0-3][0-9]") {
            let mut log = CompletionLog::new();
            let before = log.is_completed(&habit_id, &day);
            let after_first = log.toggle(&habit_id, &day);
            prop_assert_eq!(after_first, !before);
            prop_assert_eq!(log.is_completed(&habit_id, &day), after_first);
            log.toggle(&habit_id, &day);
            prop_assert_eq!(log.is_completed(&habit_id, &day), before);
        }
    }
}

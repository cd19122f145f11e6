//! Monthly completion heatmap.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::completions::CompletionLog;
use crate::date::day_key;
use crate::model::Habit;

/// One calendar day of the monthly heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapDay {
    pub day: String,
    pub completed: usize,
    pub total: usize,
    /// Intensity bucket 0-4.
    pub level: u8,
}

/// Bucket a day's completion ratio into 5 intensity levels.
///
/// 0 => 0; (0, 0.25) => 1; [0.25, 0.5) => 2; [0.5, 0.75) => 3; [0.75, 1] => 4.
/// An empty habit set counts as a denominator of one, so the day stays level 0.
pub fn heat_level(completed: usize, total: usize) -> u8 {
    let ratio = completed as f64 / total.max(1) as f64;
    if ratio <= 0.0 {
        0
    } else if ratio < 0.25 {
        1
    } else if ratio < 0.5 {
        2
    } else if ratio < 0.75 {
        3
    } else {
        4
    }
}

/// Heatmap for every day of the given calendar month.
///
/// Returns an empty vec for an invalid year/month combination.
pub fn month_heatmap(
    habits: &[Habit],
    log: &CompletionLog,
    year: i32,
    month: u32,
) -> Vec<HeatmapDay> {
    let active: Vec<&Habit> = habits.iter().filter(|h| !h.archived).collect();
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut days = Vec::new();
    let mut day = first;
    while day.month() == month {
        let key = day_key(day);
        let completed = active.iter().filter(|h| log.is_completed(&h.id, &key)).count();
        days.push(HeatmapDay {
            level: heat_level(completed, active.len()),
            day: key,
            completed,
            total: active.len(),
        });
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Frequency};

    fn habit(id: &str) -> Habit {
        Habit {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: Category::Other,
            frequency: Frequency::Daily,
            stack: String::new(),
            created_at: "2026-01-01".to_string(),
            archived: false,
        }
    }

    #[test]
    fn heat_level_bucket_edges() {
        assert_eq!(heat_level(0, 4), 0);
        assert_eq!(heat_level(0, 0), 0);
        assert_eq!(heat_level(1, 5), 1); // 0.2
        assert_eq!(heat_level(1, 4), 2); // 0.25
        assert_eq!(heat_level(2, 4), 3); // 0.5
        assert_eq!(heat_level(3, 4), 4); // 0.75
        assert_eq!(heat_level(4, 4), 4); // 1.0
    }

    #[test]
    fn month_heatmap_covers_whole_month() {
        let habits = vec![habit("h1"), habit("h2")];
        let mut log = CompletionLog::new();
        log.set("h1", "2026-02-10", true);
        log.set("h2", "2026-02-10", true);
        log.set("h1", "2026-02-14", true);

        let map = month_heatmap(&habits, &log, 2026, 2);
        assert_eq!(map.len(), 28);
        assert_eq!(map[0].day, "2026-02-01");
        assert_eq!(map[9].level, 4); // both done on the 10th
        assert_eq!(map[13].level, 3); // 1 of 2 on the 14th
        assert_eq!(map[0].level, 0);
    }

    #[test]
    fn month_heatmap_handles_leap_february() {
        let map = month_heatmap(&[], &CompletionLog::new(), 2028, 2);
        assert_eq!(map.len(), 29);
    }

    #[test]
    fn invalid_month_yields_empty_map() {
        assert!(month_heatmap(&[], &CompletionLog::new(), 2026, 13).is_empty());
    }
}

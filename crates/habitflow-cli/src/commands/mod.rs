//! CLI command modules plus shared argument parsing helpers.

use chrono::NaiveDate;
use habitflow_core::{App, Category, Frequency, Mood};

pub mod data;
pub mod goal;
pub mod habit;
pub mod mood;
pub mod stats;
pub mod track;

/// Parse a category token (health, fitness, mindfulness, productivity,
/// learning, social, other).
pub fn parse_category(s: &str) -> Result<Category, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| format!("unknown category: {s}"))
}

/// Parse a frequency token (daily, weekdays, 3x, weekly).
pub fn parse_frequency(s: &str) -> Result<Frequency, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| format!("unknown frequency: {s}"))
}

/// Parse a mood token (great, good, okay, bad, awful).
pub fn parse_mood(s: &str) -> Result<Mood, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| format!("unknown mood: {s}"))
}

/// Parse a YYYY-MM-DD argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    habitflow_core::date::parse_day_key(s).ok_or_else(|| format!("invalid date (YYYY-MM-DD): {s}"))
}

/// Resolve a habit argument that may be an id or a name.
///
/// Exact id wins; otherwise a case-insensitive name match is tried, and an
/// ambiguous name is rejected.
pub fn resolve_habit_id(app: &App, needle: &str) -> Result<String, String> {
    let habits = &app.state().habits;
    if let Some(h) = habits.iter().find(|h| h.id == needle) {
        return Ok(h.id.clone());
    }

    let lowered = needle.to_lowercase();
    let mut matches = habits.iter().filter(|h| h.name.to_lowercase() == lowered);
    match (matches.next(), matches.next()) {
        (Some(h), None) => Ok(h.id.clone()),
        (Some(_), Some(_)) => Err(format!("habit name is ambiguous, use the id: {needle}")),
        (None, _) => Err(format!("habit not found: {needle}")),
    }
}

/// Split a comma-separated list argument.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_frequency_tokens_parse() {
        assert_eq!(parse_category("Health").unwrap(), Category::Health);
        assert_eq!(parse_frequency("3x").unwrap(), Frequency::ThreeTimesWeekly);
        assert_eq!(parse_mood("okay").unwrap(), Mood::Okay);
        assert!(parse_category("swimming").is_err());
        assert!(parse_frequency("fortnightly").is_err());
    }

    #[test]
    fn list_arguments_split_and_trim() {
        assert_eq!(split_list("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }
}

//! Calendar-day helpers.
//!
//! All habit data is keyed by the local calendar day, formatted as a
//! zero-padded `YYYY-MM-DD` string (the "day key"). Two timestamps on the
//! same local day always map to the same key, and every past/future
//! comparison in the engine is done on `NaiveDate` values so a time-of-day
//! mismatch can never skip the current day.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Format a date as a `YYYY-MM-DD` day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` day key back into a date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Day key for the current local calendar day.
pub fn today_key() -> String {
    day_key(today())
}

/// The Monday (ISO week start) at or before `date`.
///
/// A date falling on Sunday maps to the preceding Monday, six days back.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn day_key_zero_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(day_key(date), "2026-03-07");
    }

    #[test]
    fn parse_day_key_is_inverse_of_day_key() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(parse_day_key(&day_key(date)), Some(date));
        assert_eq!(parse_day_key("not-a-date"), None);
    }

    #[test]
    fn week_start_on_monday_is_identity() {
        // 2026-08-24 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn week_start_on_sunday_goes_back_six_days() {
        // 2026-08-30 is a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            week_start(sunday),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
        );
    }

    proptest! {
        /// Every date within a Mon-Sun week maps to the same Monday.
        #[test]
        fn week_start_is_stable_across_the_week(days_from_epoch in 0i64..40_000, offset in 0i64..7) {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let date = epoch + Duration::days(days_from_epoch);
            let monday = week_start(date);
            prop_assert_eq!(monday.weekday(), chrono::Weekday::Mon);
            // Any other day of the same week resolves to the same Monday.
            prop_assert_eq!(week_start(monday + Duration::days(offset)), monday);
        }
    }
}

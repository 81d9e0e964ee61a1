//! Upcoming birthday computation.
//!
//! For a given "today", each birthday is projected onto its next occurrence
//! (this year, or next year if it has already passed). Occurrences inside the
//! lookahead window are reported; those landing on a weekend are moved to the
//! following Monday.
//!
//! The window test uses the occurrence *before* the weekend shift, so a
//! Saturday or Sunday birthday at the far edge of the window is reported on a
//! Monday up to two days past the window.

use crate::domain::{format_date, BirthdayDate};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Default lookahead in days, inclusive of both ends.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One contact to congratulate and the date to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Stored contact name
    pub name: String,

    /// Congratulation date (`DD.MM.YYYY`), already moved off weekends
    pub birthday: String,
}

/// Next occurrence of `birthday` on or after `today`.
///
/// Feb 29 birthdays fall on Feb 28 in non-leap years. Returns `None` only
/// when the occurrence would leave chrono's representable range.
pub fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        return occurrence_in_year(birthday, today.year() + 1);
    }
    Some(this_year)
}

/// Move Saturday and Sunday forward to Monday. Weekdays are returned as-is.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date + Duration::days(i64::from(7 - weekday))
    } else {
        date
    }
}

/// Congratulation date for a birthday if its next occurrence is within
/// `window_days` of `today`.
pub fn congratulation_date(
    birthday: &BirthdayDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let days_until = (occurrence - today).num_days();
    if days_until < 0 || days_until > i64::from(window_days) {
        return None;
    }
    Some(shift_weekend(occurrence))
}

pub(crate) fn upcoming_entry(
    name: &str,
    birthday: &BirthdayDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<UpcomingBirthday> {
    congratulation_date(birthday, today, window_days).map(|date| UpcomingBirthday {
        name: name.to_string(),
        birthday: format_date(date),
    })
}

fn occurrence_in_year(birthday: &BirthdayDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        // Only Feb 29 can be missing from a year.
        NaiveDate::from_ymd_opt(year, 2, 28)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(raw: &str) -> BirthdayDate {
        BirthdayDate::parse(raw).unwrap()
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let next = next_occurrence(&birthday("12.05.1990"), date(10, 5, 2024));
        assert_eq!(next, Some(date(12, 5, 2024)));
    }

    #[test]
    fn test_next_occurrence_today_is_not_advanced() {
        let next = next_occurrence(&birthday("10.05.1990"), date(10, 5, 2024));
        assert_eq!(next, Some(date(10, 5, 2024)));
    }

    #[test]
    fn test_next_occurrence_rolls_into_next_year() {
        let next = next_occurrence(&birthday("01.01.2000"), date(30, 12, 2024));
        assert_eq!(next, Some(date(1, 1, 2025)));
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let next = next_occurrence(&birthday("29.02.2000"), date(20, 2, 2023));
        assert_eq!(next, Some(date(28, 2, 2023)));

        let next = next_occurrence(&birthday("29.02.2000"), date(20, 2, 2024));
        assert_eq!(next, Some(date(29, 2, 2024)));
    }

    #[test]
    fn test_shift_weekend() {
        // 11.05.2024 is a Saturday, 12.05.2024 a Sunday.
        assert_eq!(shift_weekend(date(11, 5, 2024)), date(13, 5, 2024));
        assert_eq!(shift_weekend(date(12, 5, 2024)), date(13, 5, 2024));
        assert_eq!(shift_weekend(date(10, 5, 2024)), date(10, 5, 2024));
        assert_eq!(shift_weekend(date(13, 5, 2024)), date(13, 5, 2024));
    }

    #[test]
    fn test_window_bounds() {
        let today = date(10, 5, 2024);
        // day 7: Friday 17.05.2024
        assert_eq!(
            congratulation_date(&birthday("17.05.1980"), today, 7),
            Some(date(17, 5, 2024))
        );
        // day 8 is out
        assert_eq!(congratulation_date(&birthday("18.05.1980"), today, 7), None);
        // yesterday wraps to next year and is out
        assert_eq!(congratulation_date(&birthday("09.05.1980"), today, 7), None);
    }

    #[test]
    fn test_weekend_at_window_edge_reported_past_window() {
        // today Monday 06.05.2024; day 6 is Sunday 12.05 -> Monday 13.05 (day 7)
        let today = date(6, 5, 2024);
        assert_eq!(
            congratulation_date(&birthday("12.05.1980"), today, 7),
            Some(date(13, 5, 2024))
        );
        // today Sunday 05.05.2024; day 7 is Sunday 12.05 -> Monday 13.05 (day 8)
        let today = date(5, 5, 2024);
        assert_eq!(
            congratulation_date(&birthday("12.05.1980"), today, 7),
            Some(date(13, 5, 2024))
        );
    }

    #[test]
    fn test_upcoming_entry_formats_shifted_date() {
        let entry = upcoming_entry("Alice", &birthday("12.05.2024"), date(10, 5, 2024), 7);
        assert_eq!(
            entry,
            Some(UpcomingBirthday {
                name: "Alice".to_string(),
                birthday: "13.05.2024".to_string(),
            })
        );
    }
}

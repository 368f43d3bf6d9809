//! United States federal holidays.
//!
//! The table is computed from the federal rules rather than shipped as data:
//! * New Year's Day (Jan 1)
//! * Martin Luther King Jr. Day (third Monday of January, since 1986)
//! * Washington's Birthday (third Monday of February since 1971, Feb 22 before)
//! * Memorial Day (last Monday of May since 1971, May 30 before)
//! * Juneteenth National Independence Day (Jun 19, since 2021)
//! * Independence Day (Jul 4)
//! * Labor Day (first Monday of September)
//! * Columbus Day (second Monday of October since 1971, Oct 12 from 1937)
//! * Veterans Day (Nov 11; fourth Monday of October 1971-1977; Armistice Day 1938-1953)
//! * Thanksgiving Day (fourth Thursday of November since 1942, last Thursday before)
//! * Christmas Day (Dec 25)
//!
//! From 1971 a fixed-date holiday on a Saturday is also observed the Friday
//! before, and one on a Sunday the Monday after.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holidays::models::Holiday;

pub const FIRST_SUPPORTED_YEAR: i32 = 1900;
pub const LAST_SUPPORTED_YEAR: i32 = 2200;

const OBSERVED_SINCE: i32 = 1971;

pub fn is_supported_year(year: i32) -> bool {
    (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year)
}

/// All holidays whose date falls in `year`, in date order.
///
/// The caller checks `is_supported_year` first.
pub fn holidays_in_year(year: i32) -> Vec<Holiday> {
    // Observed days can cross the year boundary, so the neighbours contribute too.
    let mut holidays: Vec<Holiday> = (year - 1..=year + 1)
        .flat_map(rule_dates)
        .filter(|h| h.date.year() == year)
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Holidays produced by the rules of `year`, including observed days that may
/// land in an adjacent year.
fn rule_dates(year: i32) -> Vec<Holiday> {
    let mut out = Vec::new();
    let fixed = |month: u32, day: u32, name: &str, out: &mut Vec<Holiday>| {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            out.push(Holiday::new(date, name));
            if year >= OBSERVED_SINCE {
                if let Some(observed) = observed_shift(date) {
                    out.push(Holiday::new(observed, format!("{} (observed)", name)));
                }
            }
        }
    };

    fixed(1, 1, "New Year's Day", &mut out);

    if year >= 1986 {
        push_opt(&mut out, nth_weekday(year, 1, Weekday::Mon, 3), "Martin Luther King Jr. Day");
    }

    if year >= 1971 {
        push_opt(&mut out, nth_weekday(year, 2, Weekday::Mon, 3), "Washington's Birthday");
    } else {
        fixed(2, 22, "Washington's Birthday", &mut out);
    }

    if year >= 1971 {
        push_opt(&mut out, last_weekday(year, 5, Weekday::Mon), "Memorial Day");
    } else {
        fixed(5, 30, "Memorial Day", &mut out);
    }

    if year >= 2021 {
        fixed(6, 19, "Juneteenth National Independence Day", &mut out);
    }

    fixed(7, 4, "Independence Day", &mut out);

    push_opt(&mut out, nth_weekday(year, 9, Weekday::Mon, 1), "Labor Day");

    if year >= 1971 {
        push_opt(&mut out, nth_weekday(year, 10, Weekday::Mon, 2), "Columbus Day");
    } else if year >= 1937 {
        fixed(10, 12, "Columbus Day", &mut out);
    }

    if (1971..=1977).contains(&year) {
        push_opt(&mut out, nth_weekday(year, 10, Weekday::Mon, 4), "Veterans Day");
    } else if year >= 1954 {
        fixed(11, 11, "Veterans Day", &mut out);
    } else if year >= 1938 {
        fixed(11, 11, "Armistice Day", &mut out);
    }

    if year >= 1942 {
        push_opt(&mut out, nth_weekday(year, 11, Weekday::Thu, 4), "Thanksgiving Day");
    } else {
        push_opt(&mut out, last_weekday(year, 11, Weekday::Thu), "Thanksgiving Day");
    }

    fixed(12, 25, "Christmas Day", &mut out);

    out
}

fn push_opt(out: &mut Vec<Holiday>, date: Option<NaiveDate>, name: &str) {
    if let Some(date) = date {
        out.push(Holiday::new(date, name));
    }
}

/// Saturday moves to Friday, Sunday to Monday
fn observed_shift(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => None,
    }
}

pub fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

pub fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    nth_weekday(year, month, weekday, 5).or_else(|| nth_weekday(year, month, weekday, 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names_on(year: i32, d: NaiveDate) -> Vec<String> {
        holidays_in_year(year)
            .into_iter()
            .filter(|h| h.date == d)
            .map(|h| h.name)
            .collect()
    }

    #[test]
    fn test_floating_holidays_2024() {
        assert_eq!(names_on(2024, date(2024, 1, 15)), vec!["Martin Luther King Jr. Day"]);
        assert_eq!(names_on(2024, date(2024, 2, 19)), vec!["Washington's Birthday"]);
        assert_eq!(names_on(2024, date(2024, 5, 27)), vec!["Memorial Day"]);
        assert_eq!(names_on(2024, date(2024, 9, 2)), vec!["Labor Day"]);
        assert_eq!(names_on(2024, date(2024, 10, 14)), vec!["Columbus Day"]);
        assert_eq!(names_on(2024, date(2024, 11, 28)), vec!["Thanksgiving Day"]);
    }

    #[test]
    fn test_last_monday_of_may() {
        // May 2021 has five Mondays
        assert_eq!(last_weekday(2021, 5, Weekday::Mon), Some(date(2021, 5, 31)));
        // May 2024 has four
        assert_eq!(last_weekday(2024, 5, Weekday::Mon), Some(date(2024, 5, 27)));
    }

    #[test]
    fn test_observed_shifts() {
        // Jul 4 2026 is a Saturday
        assert_eq!(names_on(2026, date(2026, 7, 3)), vec!["Independence Day (observed)"]);
        // Dec 25 2022 is a Sunday
        assert_eq!(names_on(2022, date(2022, 12, 26)), vec!["Christmas Day (observed)"]);
    }

    #[test]
    fn test_new_year_observed_lands_in_previous_year() {
        // Jan 1 2022 is a Saturday
        assert_eq!(names_on(2021, date(2021, 12, 31)), vec!["New Year's Day (observed)"]);
        assert!(names_on(2022, date(2021, 12, 31)).is_empty());
        assert!(holidays_in_year(2022).iter().all(|h| h.date.year() == 2022));
    }

    #[test]
    fn test_juneteenth_since_2021() {
        assert!(names_on(2020, date(2020, 6, 19)).is_empty());
        assert_eq!(names_on(2021, date(2021, 6, 19)), vec!["Juneteenth National Independence Day"]);
    }

    #[test]
    fn test_historic_rules() {
        assert_eq!(names_on(1960, date(1960, 2, 22)), vec!["Washington's Birthday"]);
        assert_eq!(names_on(1975, date(1975, 10, 27)), vec!["Veterans Day"]);
        assert_eq!(names_on(1940, date(1940, 11, 11)), vec!["Armistice Day"]);
        assert!(names_on(1980, date(1980, 1, 21)).is_empty());
    }

    #[test]
    fn test_supported_range() {
        assert!(is_supported_year(FIRST_SUPPORTED_YEAR));
        assert!(is_supported_year(LAST_SUPPORTED_YEAR));
        assert!(!is_supported_year(LAST_SUPPORTED_YEAR + 1));
    }
}

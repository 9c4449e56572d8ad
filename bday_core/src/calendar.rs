//! Calendar arithmetic on proleptic-Gregorian dates.
//!
//! This module provides the date math underneath the milestone engine:
//! linear day numbering, calendar-safe addition with overflow rollover, and
//! floor differencing in whole days/weeks/months/years. Dates are plain
//! [`NaiveDate`] values; a date with year <= 0 is "year-less", meaning only
//! its month and day are known.

use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// The canonical epoch for day numbering: 1970-01-01 is day 0, with
/// negative day numbers for earlier dates.
fn unix_epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Returns true if `date` carries a real year, that is a year >= 1.
pub fn has_year(date: NaiveDate) -> bool {
    date.year() > 0
}

/// Converts `date` to its day number: days since 1970-01-01.
pub fn as_days(date: NaiveDate) -> i64 {
    date.signed_duration_since(unix_epoch()).num_days()
}

/// The exact inverse of [`as_days`].
pub fn from_days(days: i64) -> NaiveDate {
    unix_epoch() + Duration::days(days)
}

/// Builds a date from raw year/month/day values, rolling calendar overflow
/// forward: month 13 becomes January of the next year, Feb 29 of a non-leap
/// year becomes Mar 1, Jan 32 becomes Feb 1, and so on. Month and day may
/// also underflow (0 or negative) and roll backward.
pub fn ymd_normalized(year: i64, month: i64, day: i64) -> NaiveDate {
    let total_months = year * 12 + (month - 1);
    let y = total_months.div_euclid(12) as i32;
    let m = (total_months.rem_euclid(12) + 1) as u32;
    let first = NaiveDate::from_ymd_opt(y, m, 1).expect("first of month");
    first + Duration::days(day - 1)
}

/// Adds the given number of calendar years, months, and days to `date`,
/// normalizing overflow exactly once.
pub fn add_date(date: NaiveDate, years: i64, months: i64, days: i64) -> NaiveDate {
    ymd_normalized(
        date.year() as i64 + years,
        date.month() as i64 + months,
        date.day() as i64 + days,
    )
}

/// Signed day distance from `start` to `end`.
pub fn diff_in_days(end: NaiveDate, start: NaiveDate) -> i64 {
    as_days(end) - as_days(start)
}

/// Number of whole weeks from `start` to `end`, rounded toward negative
/// infinity.
pub fn diff_in_weeks(end: NaiveDate, start: NaiveDate) -> i64 {
    diff_in_days(end, start).div_euclid(7)
}

/// Number of whole calendar months from `start` to `end`, rounded down.
/// Anchored on day-of-month: the count ticks only once `end`'s day of month
/// reaches `start`'s, using calendar-correct month addition.
pub fn diff_in_months(end: NaiveDate, start: NaiveDate) -> i64 {
    let mut result = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);
    while add_date(start, 0, result + 1, 0) <= end {
        result += 1;
    }
    while add_date(start, 0, result, 0) > end {
        result -= 1;
    }
    result
}

/// Number of whole calendar years from `start` to `end`, rounded down.
pub fn diff_in_years(end: NaiveDate, start: NaiveDate) -> i64 {
    let mut result = end.year() as i64 - start.year() as i64;
    while add_date(start, result + 1, 0, 0) <= end {
        result += 1;
    }
    while add_date(start, result, 0, 0) > end {
        result -= 1;
    }
    result
}

/// Parses `s` as `MM/DD/YYYY` or as year-less `MM/DD` (year 0). The text
/// must name a real calendar date; no normalizing is done, so `08/32/2006`
/// is an error.
pub fn parse(s: &str) -> Result<NaiveDate> {
    let bad = || Error::InvalidDate(s.to_owned());
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(bad());
    }
    let month: u32 = parts[0].parse().map_err(|_| bad())?;
    let day: u32 = parts[1].parse().map_err(|_| bad())?;
    let year: i32 = match parts.get(2) {
        Some(text) => text.parse().map_err(|_| bad())?,
        None => 0,
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)
}

/// Formats `date` as `MM/DD/YYYY`, or as just `MM/DD` when it is year-less.
/// The year is zero-padded to 4 digits.
pub fn to_string(date: NaiveDate) -> String {
    if has_year(date) {
        date.format("%m/%d/%Y").to_string()
    } else {
        date.format("%m/%d").to_string()
    }
}

/// Like [`to_string`] but prefixed with the weekday, e.g. `Thu 10/15/2020`.
/// Year-less dates have no defined weekday and return an error.
pub fn to_string_with_weekday(date: NaiveDate) -> Result<String> {
    if !has_year(date) {
        return Err(Error::NoYear);
    }
    Ok(date.format("%a %m/%d/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_day_number_round_trip() {
        assert_eq!(as_days(ymd(1970, 1, 1)), 0);
        assert_eq!(as_days(ymd(1970, 1, 2)), 1);
        assert_eq!(as_days(ymd(1969, 12, 31)), -1);
        for date in [
            ymd(2020, 2, 29),
            ymd(1900, 3, 1),
            ymd(1, 1, 1),
            ymd(0, 2, 29),
            ymd(2100, 12, 31),
        ] {
            assert_eq!(from_days(as_days(date)), date);
        }
    }

    #[test]
    fn test_ymd_normalized_overflow() {
        assert_eq!(ymd_normalized(2021, 2, 29), ymd(2021, 3, 1));
        assert_eq!(ymd_normalized(2020, 2, 29), ymd(2020, 2, 29));
        assert_eq!(ymd_normalized(2021, 1, 32), ymd(2021, 2, 1));
        assert_eq!(ymd_normalized(2021, 13, 1), ymd(2022, 1, 1));
        assert_eq!(ymd_normalized(2021, 0, 1), ymd(2020, 12, 1));
        assert_eq!(ymd_normalized(2021, 1, 0), ymd(2020, 12, 31));
    }

    #[test]
    fn test_add_date() {
        // Month-end overflow rolls into the next month.
        assert_eq!(add_date(ymd(2021, 1, 31), 0, 1, 0), ymd(2021, 3, 3));
        // Feb 29 plus one year on a non-leap year rolls to Mar 1.
        assert_eq!(add_date(ymd(1968, 2, 29), 50, 0, 0), ymd(2018, 3, 1));
        assert_eq!(add_date(ymd(1968, 2, 29), 49, 6, 0), ymd(2017, 8, 29));
        assert_eq!(add_date(ymd(2020, 10, 15), 0, 0, -1), ymd(2020, 10, 14));
    }

    #[test]
    fn test_diff_in_days_and_weeks() {
        assert_eq!(diff_in_days(ymd(2020, 3, 1), ymd(2020, 2, 29)), 1);
        assert_eq!(diff_in_weeks(ymd(2020, 3, 1), ymd(2020, 2, 29)), 0);
        assert_eq!(diff_in_days(ymd(2018, 8, 5), ymd(2001, 9, 17)), 6166);
        assert_eq!(diff_in_weeks(ymd(2018, 8, 5), ymd(2001, 9, 17)), 880);
        assert_eq!(diff_in_days(ymd(2001, 9, 17), ymd(2018, 8, 5)), -6166);
        assert_eq!(diff_in_weeks(ymd(2001, 9, 17), ymd(2018, 8, 5)), -881);
    }

    #[test]
    fn test_diff_in_months() {
        let start = ymd(2019, 12, 31);
        assert_eq!(diff_in_months(ymd(2021, 3, 3), start), 14);
        assert_eq!(diff_in_months(ymd(2021, 3, 2), start), 13);
        assert_eq!(diff_in_months(ymd(2019, 12, 31), start), 0);
        assert_eq!(diff_in_months(ymd(2019, 12, 30), start), -1);
        assert_eq!(diff_in_months(ymd(1983, 5, 26), ymd(1971, 11, 26)), 138);
        assert_eq!(diff_in_months(ymd(1971, 11, 26), ymd(1983, 5, 26)), -138);
        assert_eq!(diff_in_months(ymd(1971, 11, 25), ymd(1983, 5, 26)), -139);
    }

    #[test]
    fn test_diff_in_years() {
        let end = ymd(1951, 2, 15);
        assert_eq!(diff_in_years(end, ymd(1951, 2, 15)), 0);
        assert_eq!(diff_in_years(end, ymd(1951, 2, 16)), -1);
        assert_eq!(diff_in_years(end, ymd(1951, 3, 1)), -1);
        assert_eq!(diff_in_years(end, ymd(1952, 2, 15)), -1);
        assert_eq!(diff_in_years(end, ymd(1952, 2, 16)), -2);
        assert_eq!(diff_in_years(end, ymd(1951, 2, 14)), 0);
        assert_eq!(diff_in_years(end, ymd(1951, 1, 31)), 0);
        assert_eq!(diff_in_years(end, ymd(1950, 2, 16)), 0);
        assert_eq!(diff_in_years(end, ymd(1950, 2, 15)), 1);
        assert_eq!(diff_in_years(end, ymd(1948, 2, 15)), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("12/31").unwrap(), ymd(0, 12, 31));
        assert_eq!(parse("2/29").unwrap(), ymd(0, 2, 29));
        assert_eq!(parse("1/1").unwrap(), ymd(0, 1, 1));
        assert_eq!(parse("3/28/2017").unwrap(), ymd(2017, 3, 28));

        for bad in ["wrong", "4/2/3/1", "wrong/2", "2/wrong", "5/31/wrong", "4/31", "4/31/2017", "13/01", "02/30"] {
            assert!(parse(bad).is_err(), "expected {bad:?} to fail");
        }
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(ymd(1992, 7, 4)), "07/04/1992");
        assert_eq!(to_string(ymd(953, 11, 30)), "11/30/0953");
        assert_eq!(to_string(ymd(0, 2, 29)), "02/29");
        assert_eq!(to_string(ymd(0, 12, 31)), "12/31");
        assert_eq!(to_string(ymd(0, 1, 1)), "01/01");
    }

    #[test]
    fn test_to_string_with_weekday() {
        assert_eq!(
            to_string_with_weekday(ymd(2020, 10, 15)).unwrap(),
            "Thu 10/15/2020"
        );
        assert!(matches!(
            to_string_with_weekday(ymd(0, 4, 2)),
            Err(Error::NoYear)
        ));
    }

    #[test]
    fn test_has_year() {
        assert!(has_year(ymd(1, 1, 1)));
        assert!(!has_year(ymd(0, 6, 15)));
    }
}

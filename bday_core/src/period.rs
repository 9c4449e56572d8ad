//! Composite recurrence periods.
//!
//! A [`Period`] is a repeating calendar interval made of years, months,
//! weeks, and days. It knows how to add itself to a date a given number of
//! times, how many whole copies of itself fit between two dates, and how to
//! scale itself (the scaled value doubles as an age, e.g. "49 years
//! 6 months").

use crate::calendar;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The standard reminder periods: yearly, 100 months, 100 weeks, 1000 days.
pub const DEFAULT_PERIODS: [Period; 4] = [
    Period {
        years: 1,
        months: 0,
        weeks: 0,
        days: 0,
        normalize: false,
    },
    Period {
        years: 0,
        months: 100,
        weeks: 0,
        days: 0,
        normalize: false,
    },
    Period {
        years: 0,
        months: 0,
        weeks: 100,
        days: 0,
        normalize: false,
    },
    Period {
        years: 0,
        months: 0,
        weeks: 0,
        days: 1000,
        normalize: false,
    },
];

/// A composite calendar recurrence interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub weeks: i32,
    pub days: i32,

    /// If true, `multiply` normalizes its result.
    pub normalize: bool,
}

impl Period {
    /// The canonical one-year period. This is the only period applied to
    /// year-less birthdays.
    pub const YEARLY: Period = DEFAULT_PERIODS[0];

    /// Half a year, normalizing on multiply so ages read "2 years 6 months"
    /// rather than "30 months".
    pub const HALF_YEARLY: Period = Period {
        years: 0,
        months: 6,
        weeks: 0,
        days: 0,
        normalize: true,
    };

    /// Returns true if this period represents a net positive span of time.
    pub fn is_valid(self) -> bool {
        self.approx_days() > 0.0
    }

    /// Adds `count` copies of this period to `start`: `count` calendar years
    /// and months, plus `count * (weeks * 7 + days)` days, calendar rules
    /// applied once.
    pub fn add(self, start: NaiveDate, count: i64) -> NaiveDate {
        calendar::add_date(
            start,
            count * self.years as i64,
            count * self.months as i64,
            count * (self.weeks as i64 * 7 + self.days as i64),
        )
    }

    /// Returns the number of whole copies of this period between `start` and
    /// `end`, rounded down: the largest `k` with `self.add(start, k) <= end`.
    /// The approximate day length only seeds the estimate; the answer is
    /// corrected against real calendar addition.
    pub fn diff(self, end: NaiveDate, start: NaiveDate) -> Result<i64> {
        let approx_days = self.approx_days();
        if approx_days <= 0.0 {
            return Err(Error::InvalidPeriod(self));
        }
        let span = calendar::diff_in_days(end, start) as f64;
        let mut result = (span / approx_days) as i64;
        while self.add(start, result + 1) <= end {
            result += 1;
        }
        while self.add(start, result) > end {
            result -= 1;
        }
        Ok(result)
    }

    /// Returns this period scaled by `count`. If `normalize` is set, months
    /// at or beyond a full year carry into years and days at or beyond a
    /// full week carry into weeks; truncating division keeps negative counts
    /// the mirror image of positive ones. The returned period never has
    /// `normalize` set.
    pub fn multiply(self, count: i64) -> Period {
        let mut result = Period {
            years: (self.years as i64 * count) as i32,
            months: (self.months as i64 * count) as i32,
            weeks: (self.weeks as i64 * count) as i32,
            days: (self.days as i64 * count) as i32,
            normalize: false,
        };
        if self.normalize {
            result.carry_months();
            result.carry_days();
        }
        result
    }

    fn carry_months(&mut self) {
        let whole_years = self.months / 12;
        self.years += whole_years;
        self.months -= 12 * whole_years;
    }

    fn carry_days(&mut self) {
        let whole_weeks = self.days / 7;
        self.weeks += whole_weeks;
        self.days -= 7 * whole_weeks;
    }

    fn approx_days(self) -> f64 {
        let years = self.years as f64 + self.months as f64 / 12.0;
        years * 365.2425 + 7.0 * self.weeks as f64 + self.days as f64
    }
}

// Orders by days, then weeks, then months, then years. Display determinism
// only; recurrence math never depends on this order. The normalize flag
// participates last to keep Ord consistent with Eq.
impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days
            .cmp(&other.days)
            .then_with(|| self.weeks.cmp(&other.weeks))
            .then_with(|| self.months.cmp(&other.months))
            .then_with(|| self.years.cmp(&other.years))
            .then_with(|| self.normalize.cmp(&other.normalize))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.years != 0 {
            parts.push(format!("{} years", self.years));
        }
        if self.months != 0 {
            parts.push(format!("{} months", self.months));
        }
        if self.weeks != 0 {
            parts.push(format!("{} weeks", self.weeks));
        }
        if self.days != 0 {
            parts.push(format!("{} days", self.days));
        }
        if parts.is_empty() {
            return f.write_str("0 days");
        }
        f.write_str(&parts.join(" "))
    }
}

/// Expands a period selector code into periods, in fixed `ymwdh` order:
/// `y` = 1 year, `m` = 100 months, `w` = 100 weeks, `d` = 1000 days,
/// `h` = 6 months normalized. Unknown characters are ignored. An empty code
/// yields a copy of [`DEFAULT_PERIODS`].
pub fn periods_from_code(code: &str) -> Vec<Period> {
    if code.is_empty() {
        return DEFAULT_PERIODS.to_vec();
    }
    let mut result = Vec::new();
    if code.contains('y') {
        result.push(DEFAULT_PERIODS[0]);
    }
    if code.contains('m') {
        result.push(DEFAULT_PERIODS[1]);
    }
    if code.contains('w') {
        result.push(DEFAULT_PERIODS[2]);
    }
    if code.contains('d') {
        result.push(DEFAULT_PERIODS[3]);
    }
    if code.contains('h') {
        result.push(Period::HALF_YEARLY);
    }
    result
}

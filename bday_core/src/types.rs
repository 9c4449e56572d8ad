//! Core domain types for the bday system.

use crate::period::Period;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single entry in the birthday database.
///
/// A birthday with year <= 0 is year-less: only month and day are known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub birthday: NaiveDate,
}

/// A single reminder event: a person, a date, and an age.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// The person having the milestone
    pub name: String,

    /// The date of the milestone day
    pub date: NaiveDate,

    /// Signed day distance from the reference date to `date`
    pub days_away: i64,

    /// The person's age on the milestone day; `None` when the birthday has
    /// no year
    pub age: Option<Period>,
}

impl Milestone {
    /// The age as a string, e.g. "57 years", or "? years" when unknown.
    pub fn age_label(&self) -> String {
        match self.age {
            Some(age) => age.to_string(),
            None => "? years".to_owned(),
        }
    }
}

// Orders by date, then name, then known age before unknown, then age.
// Merged reminder streams rely on this order being total.
impl Ord for Milestone {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| match (self.age, other.age) {
                (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.days_away.cmp(&other.days_away))
    }
}

impl PartialOrd for Milestone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns `entries` sorted by name, leaving the input unchanged.
pub fn entries_sorted_by_name(entries: &[Entry]) -> Vec<Entry> {
    let mut result = entries.to_vec();
    result.sort_by(|a, b| a.name.cmp(&b.name));
    result
}

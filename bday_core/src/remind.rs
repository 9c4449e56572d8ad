//! The milestone-generation engine.
//!
//! Each (entry, period) pair gets its own [`Generator`], an incremental
//! cursor over that pair's milestone dates starting at the first one on or
//! after the reference date. [`Reminder`] merges all generators into a single
//! lazily-advanced stream in milestone order using a min-heap keyed by each
//! generator's currently held milestone. The stream is conceptually
//! infinite; callers bound it with ordinary iterator adapters
//! (`take_while` on `days_away`, `take`).

use crate::calendar;
use crate::period::Period;
use crate::types::{Entry, Milestone};
use crate::{Error, Result};
use chrono::{Duration, NaiveDate};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Per (entry, period) milestone cursor. `count` indexes the next milestone
/// to produce: its date is `period.add(birthday, count)`.
struct Generator {
    name: String,
    birthday: NaiveDate,
    period: Period,
    today: NaiveDate,
    count: i64,
}

impl Generator {
    /// Positions the cursor at the earliest milestone on or after `today`.
    /// Diffing against yesterday keeps a milestone falling exactly on
    /// `today` in the stream.
    fn new(entry: &Entry, period: Period, today: NaiveDate) -> Result<Self> {
        let yesterday = today - Duration::days(1);
        let count = period.diff(yesterday, entry.birthday)? + 1;
        Ok(Self {
            name: entry.name.clone(),
            birthday: entry.birthday,
            period,
            today,
            count: count.max(0),
        })
    }

    /// Produces the next milestone and moves the cursor forward. Successive
    /// calls yield strictly increasing dates because the period is valid.
    fn next_milestone(&mut self) -> Milestone {
        let date = self.period.add(self.birthday, self.count);
        let age = calendar::has_year(self.birthday).then(|| self.period.multiply(self.count));
        let milestone = Milestone {
            name: self.name.clone(),
            date,
            days_away: calendar::diff_in_days(date, self.today),
            age,
        };
        self.count += 1;
        milestone
    }
}

/// A generator together with the milestone it currently holds, ordered for
/// use in a min-heap: the smallest held milestone wins.
struct HeldGenerator {
    current: Milestone,
    generator: Generator,
}

impl HeldGenerator {
    fn advance(&mut self) {
        self.current = self.generator.next_milestone();
    }
}

impl Ord for HeldGenerator {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so std's max-heap behaves as a min-heap.
        other.current.cmp(&self.current)
    }
}

impl PartialOrd for HeldGenerator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeldGenerator {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for HeldGenerator {}

/// The merged stream of upcoming milestones for a set of entries and
/// periods, in nondecreasing milestone order.
///
/// Year-less birthdays pair only with the canonical yearly period (their
/// month/day anniversary is computable, an age in other units is not); dated
/// birthdays pair with every supplied period. Two periods coinciding on an
/// identical milestone collapse to one emitted value.
pub struct Reminder {
    heap: BinaryHeap<HeldGenerator>,
}

impl Reminder {
    /// Builds one generator per applicable (entry, period) pair, each
    /// pre-advanced to its first milestone. Every supplied period must be
    /// valid, whether or not any pair uses it.
    pub fn new(entries: &[Entry], periods: &[Period], today: NaiveDate) -> Result<Self> {
        for period in periods {
            if !period.is_valid() {
                return Err(Error::InvalidPeriod(*period));
            }
        }
        let mut heap = BinaryHeap::new();
        for entry in entries {
            let dated = calendar::has_year(entry.birthday);
            for &period in periods {
                if dated || period == Period::YEARLY {
                    let mut generator = Generator::new(entry, period, today)?;
                    let current = generator.next_milestone();
                    heap.push(HeldGenerator { current, generator });
                }
            }
        }
        tracing::debug!("merging {} milestone generators", heap.len());
        Ok(Self { heap })
    }
}

impl Iterator for Reminder {
    type Item = Milestone;

    /// Emits the smallest held milestone, then advances every generator
    /// whose held milestone is not strictly greater than it. Generators tied
    /// on an identical milestone all step forward in the same round, which
    /// is what deduplicates coinciding periods.
    fn next(&mut self) -> Option<Milestone> {
        let emitted = self.heap.peek()?.current.clone();
        while let Some(mut top) = self.heap.peek_mut() {
            if emitted < top.current {
                break;
            }
            top.advance();
        }
        Some(emitted)
    }
}

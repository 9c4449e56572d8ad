#![forbid(unsafe_code)]

//! Core engine for tracking birthdays and upcoming milestone reminders.
//!
//! This crate provides:
//! - Calendar arithmetic on proleptic-Gregorian dates, including year-less
//!   (month/day only) birthdays
//! - Composite recurrence periods with calendar-correct add/diff/scale
//! - The milestone engine: a lazy k-way merge of per-(person, period)
//!   generators into one time-ordered stream
//! - Boundary plumbing: the flat-file entry store, name search, and
//!   configuration

pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod period;
pub mod query;
pub mod remind;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use period::{periods_from_code, Period, DEFAULT_PERIODS};
pub use query::Query;
pub use remind::Reminder;
pub use store::{load_file, read_entries};
pub use types::{entries_sorted_by_name, Entry, Milestone};
